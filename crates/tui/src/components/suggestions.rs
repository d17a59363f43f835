//! Popup listing path completions above the input.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState};

use crate::suggest::Suggestions;
use crate::theme::Theme;

const MAX_VISIBLE: u16 = 6;

/// Rows the popup needs, borders included; zero when hidden.
pub(crate) fn popup_height(suggestions: &Suggestions) -> u16 {
	if !suggestions.is_visible() {
		return 0;
	}
	let rows = u16::try_from(suggestions.items().len()).unwrap_or(MAX_VISIBLE);
	rows.min(MAX_VISIBLE) + 2
}

pub(crate) fn render_suggestions(
	frame: &mut Frame,
	area: Rect,
	suggestions: &Suggestions,
	title: Option<&str>,
	theme: &Theme,
) {
	if area.height == 0 || !suggestions.is_visible() {
		return;
	}

	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(theme.border)
		.title(Span::styled(" paths ", theme.muted));
	if let Some(title) = title {
		block = block.title_top(Line::from(Span::styled(format!(" {title} "), theme.prompt)).right_aligned());
	}

	let items: Vec<ListItem<'_>> = suggestions
		.items()
		.iter()
		.map(|item| ListItem::new(item.as_str()))
		.collect();
	let list = List::new(items)
		.block(block)
		.highlight_style(theme.highlight);
	let mut state = ListState::default().with_selected(Some(suggestions.selected()));
	frame.render_stateful_widget(list, area, &mut state);
}
