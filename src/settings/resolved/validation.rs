use aoiler_tui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.autocomplete.limit == 0 {
		return Err(ConfigError::invalid(
			"autocomplete.limit",
			"0",
			sources.source_for_limit(),
			"must be greater than zero",
		));
	}

	if let Some(max_depth) = config.search.max_depth
		&& max_depth == 0
	{
		return Err(ConfigError::invalid(
			"search.max_depth",
			max_depth.to_string(),
			sources.source_for_max_depth(),
			"must be at least 1",
		));
	}

	if config.llm.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"llm.timeout_secs",
			"0",
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if theme::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("expected one of {}", theme::names().join(", ")),
		));
	}

	Ok(())
}
