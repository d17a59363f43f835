mod command;
mod definitions;
mod options;
mod styles;

pub(crate) use command::parse_cli;
pub(crate) use definitions::{CliArgs, Command};
pub(crate) use options::{OutputFormat, ServiceArg};

#[cfg(test)]
mod tests;
