use std::path::PathBuf;
use std::time::Duration;

use aoiler::services::{AutocompleteOptions, LlmOptions, OcrOptions, SearchOptions};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) search: SearchOptions,
	pub(crate) autocomplete: AutocompleteOptions,
	pub(crate) debounce: Duration,
	pub(crate) llm: LlmOptions,
	pub(crate) ocr: OcrOptions,
	pub(crate) theme: String,
	pub(crate) initial_query: Option<String>,
	pub(crate) host_command: Option<String>,
	pub(crate) log_level: String,
	/// `None` means `<cache dir>/logs`.
	pub(crate) log_dir: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}
