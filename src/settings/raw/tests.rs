use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tempfile::tempdir;

use super::RawConfig;
use super::super::loader::load;
use super::super::resolved::{ConfigError, SettingSource};
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"aoiler",
		"--theme",
		"dawn",
		"-q",
		"find notes",
		"--host-command",
		"aoiler serve",
		"--log-level",
		"debug",
	]);

	let mut config = RawConfig::default();
	config.ui.theme = Some("slate".into());
	config.log.level = Some("warn".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.ui.theme.as_deref(), Some("dawn"));
	assert_eq!(config.ui.initial_query.as_deref(), Some("find notes"));
	assert_eq!(config.ui.host_command.as_deref(), Some("aoiler serve"));
	assert_eq!(config.log.level.as_deref(), Some("debug"));
}

#[test]
fn empty_config_resolves_to_defaults() {
	let cli = CliArgs::parse_from(["aoiler", "-n"]);
	let resolved = RawConfig::default().resolve(&cli).unwrap();

	assert_eq!(resolved.theme, "slate");
	assert_eq!(resolved.autocomplete.limit, 20);
	assert_eq!(resolved.debounce, Duration::from_millis(300));
	assert_eq!(resolved.search.max_depth, None);
	assert_eq!(resolved.log_level, "info");
	assert!(resolved.log_dir.is_none());
	assert!(resolved.host_command.is_none());
}

#[test]
fn zero_limit_names_the_key_and_origin() {
	let cli = CliArgs::parse_from(["aoiler", "-n"]);
	let mut raw = RawConfig::default();
	raw.autocomplete.limit = Some(0);

	let err = raw.resolve(&cli).unwrap_err();
	let config_err = err.downcast_ref::<ConfigError>().unwrap();
	assert_eq!(config_err.key, "autocomplete.limit");
	assert_eq!(
		config_err.origin,
		SettingSource::ConfigKey("autocomplete.limit")
	);
}

#[test]
fn unknown_theme_from_flag_blames_the_flag() {
	let cli = CliArgs::parse_from(["aoiler", "-n", "--theme", "neon"]);
	let mut raw = RawConfig::default();
	raw.apply_cli_overrides(&cli);

	let err = raw.resolve(&cli).unwrap_err();
	let config_err = err.downcast_ref::<ConfigError>().unwrap();
	assert_eq!(config_err.key, "ui.theme");
	assert_eq!(config_err.origin, SettingSource::CliFlag("--theme"));
	assert!(err.to_string().contains("slate"));
}

#[test]
fn blank_ocr_script_disables_it() {
	let cli = CliArgs::parse_from(["aoiler", "-n"]);
	let mut raw = RawConfig::default();
	raw.ocr.script = Some("  ".into());
	raw.ocr.language = Some("deu".into());

	let resolved = raw.resolve(&cli).unwrap();
	assert!(resolved.ocr.script.is_none());
	assert_eq!(resolved.ocr.language, "deu");
}

#[test]
fn loads_values_from_a_config_file() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("aoiler.toml");
	fs::write(
		&path,
		r#"
[search]
roots = ["/srv/projects", "/tmp"]
max_depth = 4

[autocomplete]
limit = 5
debounce_ms = 120

[llm]
model = "llama3"
timeout_secs = 15

[ui]
theme = "Monochrome"

[log]
level = "trace"
directory = "/var/log/aoiler"
"#,
	)
	.unwrap();

	let cli = CliArgs::parse_from(["aoiler", "-n", "-c", path.to_str().unwrap()]);
	let resolved = load(&cli).unwrap();

	assert_eq!(
		resolved.search.roots,
		vec![PathBuf::from("/srv/projects"), PathBuf::from("/tmp")]
	);
	assert_eq!(resolved.search.max_depth, Some(4));
	assert_eq!(resolved.autocomplete.limit, 5);
	assert_eq!(resolved.debounce, Duration::from_millis(120));
	assert_eq!(resolved.llm.model, "llama3");
	assert_eq!(resolved.llm.timeout, Duration::from_secs(15));
	assert_eq!(resolved.theme, "monochrome");
	assert_eq!(resolved.log_level, "trace");
	assert_eq!(resolved.log_dir, Some(PathBuf::from("/var/log/aoiler")));
}

#[test]
fn missing_explicit_config_file_is_an_error() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("absent.toml");
	let cli = CliArgs::parse_from(["aoiler", "-n", "-c", path.to_str().unwrap()]);
	assert!(load(&cli).is_err());
}
