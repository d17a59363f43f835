use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use aoiler::app_dirs;
use config::{Config, Environment, File};

use crate::cli::CliArgs;

/// Prefix of `AOILER__SECTION__KEY` overrides.
const ENV_PREFIX: &str = "aoiler";

/// Layer config files and environment overrides, later sources winning.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let files = config_files(cli)
		.into_iter()
		.map(|(path, required)| File::from(path).required(required));
	files
		.fold(Config::builder(), |builder, file| builder.add_source(file))
		.add_source(environment())
		.build()
		.context("failed to read configuration")
}

/// Files to merge in order, each paired with whether it must exist.
///
/// The default locations are optional; files passed with `-c` are not.
fn config_files(cli: &CliArgs) -> Vec<(PathBuf, bool)> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	defaults
		.into_iter()
		.map(|path| (path, false))
		.chain(cli.config.iter().cloned().map(|path| (path, true)))
		.collect()
}

fn environment() -> Environment {
	Environment::with_prefix(ENV_PREFIX)
		.separator("__")
		.try_parsing(true)
		.list_separator(",")
		.with_list_parse_key("search.roots")
}

/// The user config, then project-local overrides in the working directory.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir().map(|dir| dir.join("config.toml"));
	let local = env::current_dir()
		.map(|dir| vec![dir.join(".aoiler.toml"), dir.join("aoiler.toml")])
		.unwrap_or_default();
	user.into_iter().chain(local).collect()
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_project_local_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".aoiler.toml")));
		assert!(files.iter().any(|path| path.ends_with("aoiler.toml")));
	}

	#[test]
	fn no_config_keeps_only_explicit_files() {
		let cli = CliArgs::parse_from(["aoiler", "-n", "-c", "a.toml", "-c", "b.toml"]);
		assert_eq!(
			config_files(&cli),
			vec![(PathBuf::from("a.toml"), true), (PathBuf::from("b.toml"), true)]
		);
	}

	#[test]
	fn explicit_files_come_after_defaults() {
		let cli = CliArgs::parse_from(["aoiler", "-c", "extra.toml"]);
		let files = config_files(&cli);
		assert_eq!(files.last(), Some(&(PathBuf::from("extra.toml"), true)));
		assert!(files[..files.len() - 1].iter().all(|(_, required)| !required));
	}
}
