mod annotations;
mod args;
mod output;

pub(crate) use args::{CliArgs, Command, OutputFormat, ServiceArg, parse_cli};
pub(crate) use output::{print_response, print_suggestions};
