use clap::{CommandFactory, FromArgMatches, Parser};

use super::command::tinted_cli_command;
use super::{CliArgs, Command, OutputFormat, ServiceArg};

fn parse(args: &[&str]) -> CliArgs {
	let mut matches = tinted_cli_command()
		.try_get_matches_from(args)
		.expect("arguments parse");
	CliArgs::from_arg_matches_mut(&mut matches).expect("matches convert")
}

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
	assert!(tinted_cli_command().get_about().is_some());
}

#[test]
fn bare_invocation_opens_the_ui() {
	let cli = parse(&["aoiler"]);
	assert_eq!(cli.selected_command(), Command::Tui { args: Vec::new() });
}

#[test]
fn positional_args_become_startup_args() {
	let cli = parse(&["aoiler", "organizer", "~/Downloads"]);
	assert_eq!(
		cli.selected_command(),
		Command::Tui {
			args: vec!["organizer".into(), "~/Downloads".into()]
		}
	);
}

#[test]
fn query_joins_words_and_reads_format() {
	let cli = parse(&["aoiler", "query", "Format", "main.py", "-o", "json"]);
	assert_eq!(
		cli.selected_command(),
		Command::Query {
			text: vec!["Format".into(), "main.py".into()],
			output: OutputFormat::Json,
		}
	);
}

#[test]
fn complete_accepts_service_aliases() {
	let cli = parse(&["aoiler", "complete", "./s", "--service", "format"]);
	assert_eq!(
		cli.selected_command(),
		Command::Complete {
			text: "./s".into(),
			service: Some(ServiceArg::Linter),
			output: OutputFormat::Plain,
		}
	);
}

#[test]
fn global_flags_follow_subcommands() {
	let cli = CliArgs::parse_from(["aoiler", "serve", "--no-config", "--host-command", "ssh box aoiler serve"]);
	assert!(cli.no_config);
	assert_eq!(cli.host_command.as_deref(), Some("ssh box aoiler serve"));
	assert_eq!(cli.selected_command(), Command::Serve { args: Vec::new() });
}
