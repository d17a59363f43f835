use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

mod services;
mod ui;

use services::{AutocompleteSection, LlmSection, OcrSection, SearchSection};
use ui::{LogSection, UiSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	search: SearchSection,
	autocomplete: AutocompleteSection,
	llm: LlmSection,
	ocr: OcrSection,
	ui: UiSection,
	log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.ui.apply_cli_overrides(cli);
		self.log.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			autocomplete_limit: detect_source(
				None,
				self.autocomplete.limit.is_some(),
				"AOILER__AUTOCOMPLETE__LIMIT",
				"autocomplete.limit",
			),
			search_max_depth: detect_source(
				None,
				self.search.max_depth.is_some(),
				"AOILER__SEARCH__MAX_DEPTH",
				"search.max_depth",
			),
			llm_timeout: detect_source(
				None,
				self.llm.timeout_secs.is_some(),
				"AOILER__LLM__TIMEOUT_SECS",
				"llm.timeout_secs",
			),
			ui_theme: detect_source(
				cli.theme.is_some().then_some("--theme"),
				self.ui.theme.is_some(),
				"AOILER__UI__THEME",
				"ui.theme",
			),
		};

		let ui = self.ui.resolve();
		let (autocomplete, debounce) = self.autocomplete.resolve();
		let config = ResolvedConfig {
			search: self.search.resolve(),
			autocomplete,
			debounce,
			llm: self.llm.resolve(),
			ocr: self.ocr.resolve(),
			theme: ui.theme,
			initial_query: ui.initial_query,
			host_command: ui.host_command,
			log_level: self.log.level(),
			log_dir: self.log.directory(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_flag: Option<&'static str>,
	value_present: bool,
	env_var: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if let Some(flag) = cli_flag {
		return Some(SettingSource::CliFlag(flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

/// Read a variable, treating an empty value as unset.
fn non_empty_env(name: &str) -> Option<String> {
	env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests;
