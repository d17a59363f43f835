use clap::{CommandFactory, FromArgMatches};

use super::definitions::CliArgs;
use crate::cli::annotations::dim_cli_annotations;

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = tinted_cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

/// The clap command with dimmed help annotations on every argument,
/// subcommands included.
pub(super) fn tinted_cli_command() -> clap::Command {
	let command = CliArgs::command().mut_args(dim_cli_annotations);
	let names: Vec<String> = command
		.get_subcommands()
		.map(|sub| sub.get_name().to_string())
		.collect();
	names.into_iter().fold(command, |command, name| {
		command.mut_subcommand(name, |sub| sub.mut_args(dim_cli_annotations))
	})
}
