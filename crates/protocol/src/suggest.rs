use serde::{Deserialize, Serialize};

/// Reply of `GetPathSuggestions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoCompleteResult {
	#[serde(default)]
	pub suggestions: Vec<String>,
	pub is_path: bool,
}

impl AutoCompleteResult {
	/// Result for input that does not look like a path.
	#[must_use]
	pub fn not_a_path() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn paths(suggestions: Vec<String>) -> Self {
		Self {
			suggestions,
			is_path: true,
		}
	}

	/// Whether a frontend should show a suggestion list for this result.
	#[must_use]
	pub fn is_displayable(&self) -> bool {
		self.is_path && !self.suggestions.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wire_uses_is_path_key() {
		let result = AutoCompleteResult::paths(vec!["~/Downloads/".into()]);
		let wire = serde_json::to_string(&result).unwrap();
		assert_eq!(wire, r#"{"suggestions":["~/Downloads/"],"isPath":true}"#);
	}

	#[test]
	fn hidden_unless_path_with_suggestions() {
		assert!(!AutoCompleteResult::not_a_path().is_displayable());
		assert!(!AutoCompleteResult::paths(Vec::new()).is_displayable());
		let odd = AutoCompleteResult {
			suggestions: vec!["x".into()],
			is_path: false,
		};
		assert!(!odd.is_displayable());
	}
}
