use std::path::PathBuf;

use aoiler::services::expand_home;
use serde::Deserialize;

use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "slate";
const DEFAULT_LOG_LEVEL: &str = "info";

/// `[ui]`: chat UI appearance and the host it talks to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) host_command: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) theme: String,
	pub(super) initial_query: Option<String>,
	pub(super) host_command: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(command) = cli.host_command.clone() {
			self.host_command = Some(command);
		}
	}

	pub(super) fn resolve(self) -> UiResolution {
		UiResolution {
			theme: self
				.theme
				.map(|theme| theme.trim().to_ascii_lowercase())
				.unwrap_or_else(|| DEFAULT_THEME.to_string()),
			initial_query: self.initial_query.filter(|query| !query.is_empty()),
			host_command: self
				.host_command
				.filter(|command| !command.trim().is_empty()),
		}
	}
}

/// `[log]`: verbosity and where the UI writes its log file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
	pub(super) directory: Option<String>,
}

impl LogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
	}

	pub(super) fn level(&self) -> String {
		self.level
			.clone()
			.filter(|level| !level.trim().is_empty())
			.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
	}

	pub(super) fn directory(&self) -> Option<PathBuf> {
		self.directory
			.as_deref()
			.map(str::trim)
			.filter(|dir| !dir.is_empty())
			.map(expand_home)
	}
}
