//! The conversation log and the welcome screen shown before the first query.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::present::ResultCard;
use crate::session::{EXAMPLE_QUERIES, Message, Role, Session};
use crate::theme::Theme;

const CARD_RULE: &str = "  ┃ ";

pub(crate) struct LogContext<'a> {
	pub session: &'a Session,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

/// Draw the log scrolled `scroll_back` rows up from the bottom.
///
/// Returns the scroll offset actually used, clamped to the content.
pub(crate) fn render_log(
	frame: &mut Frame,
	area: Rect,
	ctx: LogContext<'_>,
	scroll_back: u16,
) -> u16 {
	if ctx.session.messages().is_empty() && !ctx.session.is_loading() {
		render_welcome(frame, area, ctx.theme);
		return 0;
	}

	let lines = log_lines(&ctx);
	let text_width = area.width.saturating_sub(1);
	let metrics = ScrollMetrics::compute(
		wrapped_height(&lines, text_width),
		usize::from(area.height),
	);
	let scroll_back = usize::from(scroll_back).min(metrics.max_scroll);
	let offset = metrics.max_scroll - scroll_back;

	let content = render_scrollbar(frame, area, metrics, offset, ctx.theme);
	let paragraph = Paragraph::new(lines)
		.wrap(Wrap { trim: false })
		.scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
	frame.render_widget(paragraph, content);

	u16::try_from(scroll_back).unwrap_or(u16::MAX)
}

fn render_welcome(frame: &mut Frame, area: Rect, theme: &Theme) {
	let mut lines = vec![
		Line::default(),
		Line::styled("How can I help you today?", theme.header),
		Line::styled(
			"Try asking me to organize directories, extract text from image or convert files",
			theme.muted,
		),
		Line::default(),
	];
	lines.extend(EXAMPLE_QUERIES.iter().enumerate().map(|(index, example)| {
		Line::from(vec![
			Span::styled(format!("alt+{}  ", index + 1), theme.prompt),
			Span::raw(*example),
		])
	}));

	let paragraph = Paragraph::new(lines)
		.alignment(Alignment::Center)
		.wrap(Wrap { trim: true });
	frame.render_widget(paragraph, area);
}

fn log_lines<'a>(ctx: &LogContext<'a>) -> Vec<Line<'a>> {
	let mut lines = Vec::new();
	for message in ctx.session.messages() {
		push_message(&mut lines, message, ctx.theme);
		lines.push(Line::default());
	}
	if ctx.session.is_loading() {
		let spinner = Throbber::default()
			.throbber_style(ctx.theme.assistant)
			.to_symbol_span(ctx.throbber_state);
		lines.push(Line::from(vec![
			spinner,
			Span::styled("Thinking...", ctx.theme.muted),
		]));
	}
	lines
}

fn push_message<'a>(lines: &mut Vec<Line<'a>>, message: &'a Message, theme: &Theme) {
	let (label, style) = match message.role {
		Role::User => ("you", theme.user),
		Role::Assistant => ("aoiler", theme.assistant),
	};
	let mut header = vec![
		Span::styled(label, style),
		Span::styled(format!("  {}", message.timestamp.format("%H:%M")), theme.muted),
	];
	if let Some(service) = message.service {
		header.push(Span::styled(format!(" · {}", service.label()), theme.muted));
	}
	lines.push(Line::from(header));

	lines.extend(
		message
			.content
			.lines()
			.map(|line| Line::from(format!("  {line}"))),
	);

	if let Some(card) = &message.card {
		push_card(lines, card, &message.content, theme);
	}
}

fn push_card<'a>(lines: &mut Vec<Line<'a>>, card: &'a ResultCard, content: &str, theme: &Theme) {
	let accent = theme.tone(card.tone);
	let rule = Span::styled(CARD_RULE, accent);
	lines.push(Line::from(vec![
		rule.clone(),
		Span::styled(card.title.as_str(), accent.add_modifier(Modifier::BOLD)),
	]));
	for (label, value) in &card.fields {
		lines.push(Line::from(vec![
			rule.clone(),
			Span::styled(format!("{label}: "), theme.muted),
			Span::raw(value.as_str()),
		]));
	}
	// A body that repeats the headline is not shown twice.
	if let Some(body) = card.body.as_ref().filter(|body| body.as_str() != content) {
		lines.extend(
			body.lines()
				.map(|line| Line::from(vec![rule.clone(), Span::styled(line, Style::default())])),
		);
	}
}

/// Rows `lines` take up when wrapped to `width` columns.
fn wrapped_height(lines: &[Line<'_>], width: u16) -> usize {
	let width = usize::from(width.max(1));
	lines
		.iter()
		.map(|line| {
			let columns: usize = line
				.spans
				.iter()
				.map(|span| span.content.as_ref().width())
				.sum();
			columns.div_ceil(width).max(1)
		})
		.sum()
}
