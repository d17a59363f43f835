use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) autocomplete_limit: Option<SettingSource>,
	pub(crate) search_max_depth: Option<SettingSource>,
	pub(crate) llm_timeout: Option<SettingSource>,
	pub(crate) ui_theme: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_limit(&self) -> SettingSource {
		self.autocomplete_limit
			.clone()
			.unwrap_or(SettingSource::ConfigKey("autocomplete.limit"))
	}

	pub(crate) fn source_for_max_depth(&self) -> SettingSource {
		self.search_max_depth
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.max_depth"))
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		self.llm_timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("llm.timeout_secs"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.ui_theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}
}
