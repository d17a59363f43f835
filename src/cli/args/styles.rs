use std::fmt::Write;
use std::path::PathBuf;

use aoiler::app_dirs;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

fn describe(dir: anyhow::Result<PathBuf>) -> String {
	dir.map_or_else(
		|err| format!("unavailable ({err})"),
		|path| path.display().to_string(),
	)
}

/// `--version` text: the version followed by the directories aoiler reads
/// and writes.
pub(super) fn long_version() -> &'static str {
	let mut details = format!("aoiler {}\n", env!("CARGO_PKG_VERSION"));
	for (label, dir) in [
		("config", app_dirs::get_config_dir()),
		("logs", app_dirs::get_log_dir()),
	] {
		let _ = writeln!(details, "{label}: {}", describe(dir));
	}
	Box::leak(details.into_boxed_str())
}

pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
