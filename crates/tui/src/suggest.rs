//! Path suggestion list state and token replacement.

/// Replace the path-like token of `input` with `suggestion`.
///
/// Tokens are split on single spaces so the rest of the input keeps its
/// spacing. The last token that contains `/` or starts with `.` or `~` is
/// replaced; without one, the last token is.
#[must_use]
pub fn apply_suggestion(input: &str, suggestion: &str) -> String {
	let mut tokens: Vec<&str> = input.split(' ').collect();
	let target = tokens
		.iter()
		.rposition(|token| is_path_token(token))
		.unwrap_or(tokens.len() - 1);
	tokens[target] = suggestion;
	tokens.join(" ")
}

fn is_path_token(token: &str) -> bool {
	token.contains('/') || token.starts_with('.') || token.starts_with('~')
}

/// Visible suggestion list plus the highlighted entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions {
	items: Vec<String>,
	selected: usize,
	visible: bool,
}

impl Suggestions {
	/// Replace the list; it is shown only when non-empty.
	pub fn show(&mut self, items: Vec<String>) {
		self.visible = !items.is_empty();
		self.items = items;
		self.selected = 0;
	}

	pub fn hide(&mut self) {
		self.visible = false;
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.visible && !self.items.is_empty()
	}

	#[must_use]
	pub fn items(&self) -> &[String] {
		&self.items
	}

	#[must_use]
	pub fn selected(&self) -> usize {
		self.selected
	}

	pub fn select_next(&mut self) {
		if !self.items.is_empty() {
			self.selected = (self.selected + 1) % self.items.len();
		}
	}

	pub fn select_previous(&mut self) {
		if !self.items.is_empty() {
			self.selected = self
				.selected
				.checked_sub(1)
				.unwrap_or(self.items.len() - 1);
		}
	}

	#[must_use]
	pub fn selected_item(&self) -> Option<&str> {
		if !self.is_visible() {
			return None;
		}
		self.items.get(self.selected).map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn replaces_the_path_token() {
		assert_eq!(
			apply_suggestion("open ~/Downloads/file", "~/Downloads/Documents"),
			"open ~/Downloads/Documents"
		);
		assert_eq!(
			apply_suggestion("organize ./src by name", "./src/"),
			"organize ./src/ by name"
		);
	}

	#[test]
	fn falls_back_to_the_last_token() {
		assert_eq!(apply_suggestion("format now", "main.py"), "format main.py");
		assert_eq!(apply_suggestion("", "~/"), "~/");
	}

	#[test]
	fn keeps_surrounding_spacing() {
		assert_eq!(
			apply_suggestion("convert  ~/v  to webm", "~/video.mp4"),
			"convert  ~/video.mp4  to webm"
		);
	}

	#[test]
	fn selection_wraps_and_resets() {
		let mut suggestions = Suggestions::default();
		suggestions.show(vec!["a/".into(), "b/".into(), "c".into()]);
		suggestions.select_next();
		suggestions.select_next();
		assert_eq!(suggestions.selected_item(), Some("c"));
		suggestions.select_next();
		assert_eq!(suggestions.selected(), 0);
		suggestions.select_previous();
		assert_eq!(suggestions.selected_item(), Some("c"));

		suggestions.show(vec!["d".into()]);
		assert_eq!(suggestions.selected(), 0);

		suggestions.hide();
		assert_eq!(suggestions.selected_item(), None);
	}

	#[test]
	fn empty_lists_stay_hidden() {
		let mut suggestions = Suggestions::default();
		suggestions.show(Vec::new());
		assert!(!suggestions.is_visible());
		suggestions.select_next();
		assert_eq!(suggestions.selected(), 0);
	}
}
