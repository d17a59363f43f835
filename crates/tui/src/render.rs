use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::App;
use crate::components::input::{InputContext, render_input};
use crate::components::log::{LogContext, render_log};
use crate::components::suggestions::{popup_height, render_suggestions};

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let suggestions_height = popup_height(self.session.suggestions());
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(2),
				Constraint::Min(1),
				Constraint::Length(suggestions_height),
				Constraint::Length(3),
			])
			.split(area);

		self.render_header(frame, layout[0]);

		self.scroll_back = render_log(
			frame,
			layout[1],
			LogContext {
				session: &self.session,
				throbber_state: &self.throbber_state,
				theme: &self.theme,
			},
			self.scroll_back,
		);

		let focus = self.session.focus().map(|service| service.label());
		render_suggestions(
			frame,
			layout[2],
			self.session.suggestions(),
			focus,
			&self.theme,
		);

		render_input(
			frame,
			layout[3],
			InputContext {
				input: &self.input,
				loading: self.session.is_loading(),
				throbber_state: &self.throbber_state,
				theme: &self.theme,
			},
		);
	}

	fn render_header(&self, frame: &mut Frame, area: Rect) {
		let mut spans = vec![
			Span::styled("Aoiler", self.theme.header),
			Span::styled("  intelligent command center", self.theme.muted),
		];
		if let Some(service) = self.session.focus() {
			spans.push(Span::styled("  · ", self.theme.muted));
			spans.push(Span::styled(service.label(), self.theme.prompt));
		}
		let header = Paragraph::new(Line::from(spans)).block(
			Block::default()
				.borders(Borders::BOTTOM)
				.border_style(self.theme.border),
		);
		frame.render_widget(header, area);
	}
}
