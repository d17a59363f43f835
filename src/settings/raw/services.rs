use std::path::PathBuf;
use std::time::Duration;

use aoiler::services::{AutocompleteOptions, LlmOptions, OcrOptions, SearchOptions, expand_home};
use serde::Deserialize;

use super::non_empty_env;

const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// `[search]`: where file search looks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) roots: Option<Vec<String>>,
	pub(super) max_depth: Option<usize>,
	pub(super) include_hidden: Option<bool>,
	pub(super) follow_symlinks: Option<bool>,
}

impl SearchSection {
	pub(super) fn resolve(self) -> SearchOptions {
		let defaults = SearchOptions::default();
		let roots: Vec<PathBuf> = self
			.roots
			.unwrap_or_default()
			.iter()
			.map(|root| root.trim())
			.filter(|root| !root.is_empty())
			.map(expand_home)
			.collect();
		SearchOptions {
			roots: if roots.is_empty() { defaults.roots } else { roots },
			max_depth: self.max_depth,
			include_hidden: self.include_hidden.unwrap_or(defaults.include_hidden),
			follow_symlinks: self.follow_symlinks.unwrap_or(defaults.follow_symlinks),
		}
	}
}

/// `[autocomplete]`: path suggestion tuning.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct AutocompleteSection {
	pub(super) limit: Option<usize>,
	pub(super) debounce_ms: Option<u64>,
}

impl AutocompleteSection {
	pub(super) fn resolve(self) -> (AutocompleteOptions, Duration) {
		let mut options = AutocompleteOptions::default();
		if let Some(limit) = self.limit {
			options.limit = limit;
		}
		let debounce = Duration::from_millis(self.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS));
		(options, debounce)
	}
}

/// `[llm]`: the OpenAI-compatible endpoint behind free-form questions.
///
/// Unset keys fall back to `LLM_API_KEY`, `LLM_API_URL` and `LLM_MODEL`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LlmSection {
	pub(super) api_url: Option<String>,
	pub(super) api_key: Option<String>,
	pub(super) model: Option<String>,
	pub(super) provider: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

impl LlmSection {
	pub(super) fn resolve(self) -> LlmOptions {
		let defaults = LlmOptions::default();
		let pick = |value: Option<String>, env: &str| {
			value
				.filter(|value| !value.trim().is_empty())
				.or_else(|| non_empty_env(env))
		};
		LlmOptions {
			api_url: pick(self.api_url, "LLM_API_URL").unwrap_or(defaults.api_url),
			api_key: pick(self.api_key, "LLM_API_KEY"),
			model: pick(self.model, "LLM_MODEL").unwrap_or(defaults.model),
			provider: self.provider.filter(|provider| !provider.trim().is_empty()),
			timeout: self
				.timeout_secs
				.map_or(defaults.timeout, Duration::from_secs),
		}
	}
}

/// `[ocr]`: screen capture script and recognition language.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct OcrSection {
	pub(super) script: Option<String>,
	pub(super) language: Option<String>,
}

impl OcrSection {
	pub(super) fn resolve(self) -> OcrOptions {
		let defaults = OcrOptions::default();
		OcrOptions {
			script: match self.script {
				// An empty value disables the script and uses slurp/grim directly.
				Some(script) if script.trim().is_empty() => None,
				Some(script) => Some(expand_home(script.trim())),
				None => defaults.script,
			},
			language: self
				.language
				.filter(|language| !language.trim().is_empty())
				.unwrap_or(defaults.language),
		}
	}
}
