//! Single-line query input with a busy indicator.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tui_textarea::{CursorMove, TextArea};

use crate::theme::Theme;

pub(crate) const PLACEHOLDER: &str = "Ask me anything...";

/// Fresh input widget holding `text` with the cursor at the end.
pub(crate) fn new_input<'a>(text: &str, theme: &Theme) -> TextArea<'a> {
	let mut input = TextArea::new(vec![text.to_string()]);
	input.set_placeholder_text(PLACEHOLDER);
	input.set_placeholder_style(theme.muted);
	input.set_cursor_line_style(Style::default());
	input.move_cursor(CursorMove::End);
	input
}

pub(crate) struct InputContext<'a, 'b> {
	pub input: &'a TextArea<'b>,
	pub loading: bool,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

pub(crate) fn render_input(frame: &mut Frame, area: Rect, ctx: InputContext<'_, '_>) {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(ctx.theme.border)
		.title(Span::styled(" > ", ctx.theme.prompt));

	if ctx.loading {
		let spinner = Throbber::default()
			.style(ctx.theme.muted)
			.throbber_style(ctx.theme.prompt)
			.to_symbol_span(ctx.throbber_state);
		block = block.title_top(
			Line::from(vec![spinner, Span::styled("working ", ctx.theme.muted)]).right_aligned(),
		);
	} else {
		block = block.title_bottom(
			Line::from(Span::styled(
				" enter send · tab next · alt+1-5 examples · esc quit ",
				ctx.theme.muted,
			))
			.right_aligned(),
		);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);
	frame.render_widget(ctx.input, inner);
}
