//! Helpers for pulling paths out of free text.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// The current user's home directory.
pub(crate) fn home_dir() -> Option<PathBuf> {
	BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
	expand_home_with(path, home_dir().as_deref())
}

pub(crate) fn expand_home_with(path: &str, home: Option<&Path>) -> PathBuf {
	let Some(home) = home else {
		return PathBuf::from(path);
	};
	if path == "~" {
		return home.to_path_buf();
	}
	match path.strip_prefix("~/") {
		Some(rest) => home.join(rest),
		None => PathBuf::from(path),
	}
}

/// Strip sentence punctuation and quotes surrounding a word.
fn trim_word(word: &str) -> &str {
	let word = word
		.trim_start_matches(['"', '\'', '(', '`'])
		.trim_end_matches(['?', '!', ',', ';', ':', '"', '\'', ')', '`']);
	// A single trailing full stop ends the sentence; `.` and `..` stay intact.
	match word.strip_suffix('.') {
		Some(stripped) if !stripped.is_empty() && !stripped.ends_with('.') => stripped,
		_ => word,
	}
}

/// First word of the query that looks like a path (contains `/` or `.`).
pub(crate) fn extract_path(query: &str) -> Option<String> {
	query
		.split_whitespace()
		.map(trim_word)
		.find(|word| word.contains('/') || word.contains('.'))
		.map(str::to_string)
}

/// Lowercased extension of `path` without the dot.
pub(crate) fn extension_of(path: &str) -> Option<String> {
	Path::new(path)
		.extension()
		.and_then(|ext| ext.to_str())
		.map(str::to_ascii_lowercase)
}

/// Lowercased query words with surrounding punctuation removed.
pub(crate) fn normalized_words(query: &str) -> Vec<String> {
	query
		.split_whitespace()
		.map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
		.filter(|word| !word.is_empty())
		.collect()
}
