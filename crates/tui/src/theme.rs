//! Built-in colour schemes.

use ratatui::style::{Color, Modifier, Style};

use crate::present::Tone;

/// Styles for every element of the chat screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub muted: Style,
	pub prompt: Style,
	pub user: Style,
	pub assistant: Style,
	pub border: Style,
	pub highlight: Style,
	pub success: Style,
	pub warning: Style,
	pub error: Style,
}

impl Theme {
	/// Accent used for a card of the given tone.
	#[must_use]
	pub fn tone(&self, tone: Tone) -> Style {
		match tone {
			Tone::Success => self.success,
			Tone::Warning => self.warning,
			Tone::Error => self.error,
			Tone::Neutral => self.assistant,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

pub const SLATE: Theme = Theme {
	header: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
	muted: Style::new().fg(Color::DarkGray),
	prompt: Style::new().fg(Color::Cyan),
	user: Style::new().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
	assistant: Style::new().fg(Color::LightMagenta).add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::DarkGray),
	highlight: Style::new().fg(Color::Black).bg(Color::Cyan),
	success: Style::new().fg(Color::Green),
	warning: Style::new().fg(Color::Yellow),
	error: Style::new().fg(Color::Red),
};

pub const DAWN: Theme = Theme {
	header: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
	muted: Style::new().fg(Color::Gray),
	prompt: Style::new().fg(Color::Blue),
	user: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
	assistant: Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD),
	border: Style::new().fg(Color::Gray),
	highlight: Style::new().fg(Color::White).bg(Color::Blue),
	success: Style::new().fg(Color::Green),
	warning: Style::new().fg(Color::Rgb(180, 120, 0)),
	error: Style::new().fg(Color::Red),
};

pub const MONOCHROME: Theme = Theme {
	header: Style::new().add_modifier(Modifier::BOLD),
	muted: Style::new().add_modifier(Modifier::DIM),
	prompt: Style::new(),
	user: Style::new().add_modifier(Modifier::BOLD),
	assistant: Style::new().add_modifier(Modifier::BOLD),
	border: Style::new().add_modifier(Modifier::DIM),
	highlight: Style::new().add_modifier(Modifier::REVERSED),
	success: Style::new(),
	warning: Style::new().add_modifier(Modifier::ITALIC),
	error: Style::new().add_modifier(Modifier::UNDERLINED),
};

const BUILTINS: &[(&str, Theme)] = &[("slate", SLATE), ("dawn", DAWN), ("monochrome", MONOCHROME)];

/// Names accepted by [`by_name`], default first.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILTINS.iter().map(|(name, _)| *name).collect()
}

/// Look a theme up by name, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILTINS
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name.trim()))
		.map(|(_, theme)| *theme)
}
