use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, Subcommand};

use super::options::{OutputFormat, ServiceArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `aoiler` binary.
#[derive(Parser, Debug)]
#[command(
	name = "aoiler",
	version,
	long_version = long_version(),
	about = "Ask for everyday file chores in plain language",
	color = ColorChoice::Auto,
	styles = cli_styles(),
	args_conflicts_with_subcommands = true
)]
pub(crate) struct CliArgs {
	#[command(subcommand)]
	pub(crate) command: Option<Command>,
	/// Startup arguments for the chat UI when no subcommand is given.
	#[arg(value_name = "ARGS")]
	pub(crate) args: Vec<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "AOILER_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		global = true,
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long,
		value_name = "THEME",
		global = true,
		help = "Select a colour theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		global = true,
		help = "Text placed in the input box on start (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long = "host-command",
		value_name = "CMD",
		env = "AOILER_HOST_COMMAND",
		global = true,
		help = "Run services in a separate host process spoken to over stdio (default: in-process)"
	)]
	pub(crate) host_command: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		global = true,
		help = "Minimum level written to the log (default: info)"
	)]
	pub(crate) log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
	/// Open the interactive chat UI
	Tui {
		/// Startup arguments; a leading service name focuses that service
		#[arg(value_name = "ARGS", trailing_var_arg = true)]
		args: Vec<String>,
	},
	/// Dispatch one query and print the result
	Query {
		#[arg(value_name = "TEXT", required = true, num_args = 1..)]
		text: Vec<String>,
		#[arg(
			short = 'o',
			long = "output",
			value_enum,
			default_value_t = OutputFormat::Plain,
			help = "Choose how to print the result"
		)]
		output: OutputFormat,
	},
	/// Print path suggestions for partial input
	Complete {
		#[arg(value_name = "TEXT", default_value = "")]
		text: String,
		#[arg(
			short = 's',
			long,
			value_enum,
			help = "Narrow suggestions to files this service accepts (default: any path)"
		)]
		service: Option<ServiceArg>,
		#[arg(
			short = 'o',
			long = "output",
			value_enum,
			default_value_t = OutputFormat::Plain,
			help = "Choose how to print the result"
		)]
		output: OutputFormat,
	},
	/// Answer newline-delimited JSON requests on stdin
	Serve {
		/// Arguments reported to frontends through GetStartupArgs
		#[arg(value_name = "ARGS", trailing_var_arg = true)]
		args: Vec<String>,
	},
}

impl CliArgs {
	/// The subcommand to run, defaulting to the chat UI.
	pub(crate) fn selected_command(&self) -> Command {
		self.command.clone().unwrap_or_else(|| Command::Tui {
			args: self.args.clone(),
		})
	}
}
