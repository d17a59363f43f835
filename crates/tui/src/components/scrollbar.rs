//! Scrollbar for the message log.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::theme::Theme;

/// Scrolling metrics for a viewport over wrapped rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ScrollMetrics {
	pub content_length: usize,
	pub max_scroll: usize,
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	pub(crate) fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}
		let max_scroll = content_length.saturating_sub(viewport_height);
		Self {
			content_length,
			max_scroll,
			needs_scrollbar: max_scroll > 0,
		}
	}
}

/// Draw a scrollbar on the right edge of `area` and return the area left for content.
pub(crate) fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	metrics: ScrollMetrics,
	offset: usize,
	theme: &Theme,
) -> Rect {
	if !metrics.needs_scrollbar {
		return area;
	}
	let mut state = ScrollbarState::new(metrics.max_scroll).position(offset);
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.border);
	frame.render_stateful_widget(scrollbar, area, &mut state);

	Rect {
		width: area.width.saturating_sub(1),
		..area
	}
}
