//! Dimmed `(default: ...)`, `[env: ...]` and possible-value notes in `--help`.

use clap::Arg;
use clap::builder::StyledStr;
use clap::builder::styling::{AnsiColor, Color, Style};

fn muted() -> Style {
	Style::new()
		.fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)))
		.dimmed()
}

/// Move clap's generated annotations into the help text, styled muted.
pub(crate) fn dim_cli_annotations(mut arg: Arg) -> Arg {
	let help = arg.get_help().map(ToString::to_string).unwrap_or_default();
	let (plain, inline_default) = split_default(&help);

	let mut notes = Vec::new();
	if let Some(values) = possible_values(&arg) {
		arg = arg.hide_possible_values(true);
		notes.push(values);
	}
	match inline_default {
		Some(default) => notes.push(default.to_string()),
		None => {
			if let Some(default) = default_values(&arg) {
				arg = arg.hide_default_value(true);
				notes.push(default);
			}
		}
	}
	if let Some(env) = arg.get_env().map(|env| env.to_string_lossy().into_owned())
		&& !env.trim().is_empty()
	{
		arg = arg.hide_env(true);
		notes.push(format!("[env: {env}=]"));
	}

	if plain.is_empty() && notes.is_empty() {
		return arg;
	}
	let mut styled = StyledStr::new();
	styled.push_str(plain);
	let style = muted();
	for note in notes {
		if !styled.to_string().is_empty() {
			styled.push_str(" ");
		}
		let _ = std::fmt::write(&mut styled, format_args!("{style}{note}{style:#}"));
	}
	arg.help(styled)
}

/// Split a trailing `(default: ...)` written into the help text itself.
fn split_default(help: &str) -> (&str, Option<&str>) {
	match help.rfind("(default:") {
		Some(start) if help.ends_with(')') => (help[..start].trim_end(), Some(&help[start..])),
		_ => (help, None),
	}
}

fn possible_values(arg: &Arg) -> Option<String> {
	if !arg.get_action().takes_values() {
		return None;
	}
	let names: Vec<String> = arg
		.get_possible_values()
		.iter()
		.filter(|value| !value.is_hide_set())
		.map(|value| value.get_name().to_string())
		.collect();
	(!names.is_empty()).then(|| format!("[possible values: {}]", names.join(", ")))
}

fn default_values(arg: &Arg) -> Option<String> {
	let values: Vec<String> = arg
		.get_default_values()
		.iter()
		.map(|value| value.to_string_lossy().into_owned())
		.filter(|value| !value.trim().is_empty())
		.collect();
	(!values.is_empty()).then(|| format!("(default: {})", values.join(", ")))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn inline_defaults_are_split_off() {
		assert_eq!(
			split_default("Skip loading files (default: disabled)"),
			("Skip loading files", Some("(default: disabled)"))
		);
		assert_eq!(split_default("No default here"), ("No default here", None));
	}

	#[test]
	fn annotations_are_appended_in_order() {
		let arg = Arg::new("output")
			.help("Choose how to print")
			.value_parser(["plain", "json"])
			.default_value("plain")
			.env("AOILER_OUTPUT");
		let styled = dim_cli_annotations(arg).get_help().unwrap().to_string();
		assert_eq!(
			styled,
			"Choose how to print [possible values: plain, json] (default: plain) [env: AOILER_OUTPUT=]"
		);
	}

	#[test]
	fn blank_defaults_are_ignored() {
		let arg = Arg::new("text").default_value("");
		assert_eq!(default_values(&arg), None);
	}
}
