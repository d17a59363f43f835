//! Where `aoiler` keeps its `config.toml` and its log files.
//!
//! `AOILER_CONFIG_DIR` and `AOILER_CACHE_DIR` take precedence; otherwise the
//! platform locations from `directories` are used.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "aoiler";
const APPLICATION: &str = "aoiler";

pub const CONFIG_DIR_ENV: &str = "AOILER_CONFIG_DIR";
pub const CACHE_DIR_ENV: &str = "AOILER_CACHE_DIR";

const LOG_SUBDIR: &str = "logs";

/// Use `var` when it holds a non-empty path, else ask `directories`.
fn resolve(var: &str, platform: fn(&ProjectDirs) -> &Path) -> Result<PathBuf> {
    if let Some(dir) = env::var_os(var).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| anyhow!("no home directory, set {var} to choose a location"))?;
    Ok(platform(&dirs).to_path_buf())
}

/// Directory searched for `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
    resolve(CONFIG_DIR_ENV, ProjectDirs::config_dir)
}

/// Directory for disposable state.
pub fn get_cache_dir() -> Result<PathBuf> {
    resolve(CACHE_DIR_ENV, ProjectDirs::cache_dir)
}

/// Default home of the chat UI's rolling log files.
pub fn get_log_dir() -> Result<PathBuf> {
    Ok(log_dir_under(&get_cache_dir()?))
}

fn log_dir_under(cache_dir: &Path) -> PathBuf {
    cache_dir.join(LOG_SUBDIR)
}
