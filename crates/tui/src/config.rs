use std::time::Duration;

use crate::debounce::DEFAULT_DELAY;
use crate::theme::Theme;

/// Launch options for the chat UI.
#[derive(Debug, Clone)]
pub struct TuiConfig {
	pub theme: Theme,
	/// Text placed in the input box on start.
	pub initial_query: Option<String>,
	/// Quiet period before a path suggestion lookup is sent.
	pub debounce: Duration,
}

impl Default for TuiConfig {
	fn default() -> Self {
		Self {
			theme: Theme::default(),
			initial_query: None,
			debounce: DEFAULT_DELAY,
		}
	}
}
