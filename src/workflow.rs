use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use aoiler::app_dirs;
use aoiler::host::{Host, HostOptions, RemoteBackend, serve};
use aoiler::logging;
use aoiler_protocol::{Backend, QueryRequest, ServiceKind};
use aoiler_tui::{Theme, TuiConfig, theme};
use tracing::info;

use crate::cli::{Command, OutputFormat, ServiceArg, print_response, print_suggestions};
use crate::settings::ResolvedConfig;

/// Runs one subcommand against either the in-process host or a child host.
pub(crate) struct Workflow {
	config: ResolvedConfig,
}

impl Workflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self { config }
	}

	pub(crate) fn run(self, command: Command) -> Result<ExitCode> {
		match command {
			Command::Tui { args } => self.run_tui(args),
			Command::Query { text, output } => self.run_query(&text.join(" "), output),
			Command::Complete {
				text,
				service,
				output,
			} => self.run_complete(&text, service, output),
			Command::Serve { args } => self.run_serve(args),
		}
	}

	fn run_tui(self, args: Vec<String>) -> Result<ExitCode> {
		let log_dir = match self.config.log_dir.clone() {
			Some(dir) => dir,
			None => app_dirs::get_log_dir()?,
		};
		let _guard = logging::init_for_tui(&log_dir, &self.config.log_level)?;

		let theme = theme::by_name(&self.config.theme).unwrap_or_else(Theme::default);
		let tui_config = TuiConfig {
			theme,
			initial_query: self.config.initial_query.clone(),
			debounce: self.config.debounce,
		};
		let backend = self.open_backend(args)?;
		info!("starting chat UI");
		aoiler_tui::run(backend, tui_config)?;
		Ok(ExitCode::SUCCESS)
	}

	fn run_query(self, text: &str, format: OutputFormat) -> Result<ExitCode> {
		logging::init_for_stderr(&self.config.log_level)?;
		let mut backend = self.open_backend(Vec::new())?;
		let response = backend.process_query(&QueryRequest::new(text))?;

		let mut stdout = io::stdout().lock();
		print_response(&mut stdout, &response, format)?;
		stdout.flush()?;

		Ok(if response.success {
			ExitCode::SUCCESS
		} else {
			ExitCode::FAILURE
		})
	}

	fn run_complete(
		self,
		text: &str,
		service: Option<ServiceArg>,
		format: OutputFormat,
	) -> Result<ExitCode> {
		logging::init_for_stderr(&self.config.log_level)?;
		let mut backend = self.open_backend(Vec::new())?;
		let result = match service.map(ServiceKind::from) {
			Some(service) => backend.service_path_suggestions(service, text)?,
			None => backend.path_suggestions(text)?,
		};

		let mut stdout = io::stdout().lock();
		print_suggestions(&mut stdout, &result, format)?;
		stdout.flush()?;
		Ok(ExitCode::SUCCESS)
	}

	fn run_serve(self, args: Vec<String>) -> Result<ExitCode> {
		logging::init_for_stderr(&self.config.log_level)?;
		let mut host = Host::new(self.host_options(args));
		info!("serving requests on stdio");
		serve(&mut host, io::stdin().lock(), io::stdout().lock())
			.context("stdio transport failed")?;
		Ok(ExitCode::SUCCESS)
	}

	/// The configured child host, or an in-process one.
	///
	/// `args` reach the host as its startup arguments either way.
	fn open_backend(&self, args: Vec<String>) -> Result<Box<dyn Backend>> {
		match &self.config.host_command {
			Some(command) => {
				let command_line = if args.is_empty() {
					command.clone()
				} else {
					format!("{command} {}", shell_words::join(&args))
				};
				let backend = RemoteBackend::spawn(&command_line)
					.map_err(|err| anyhow!("failed to start host `{command_line}`: {err}"))?;
				Ok(Box::new(backend))
			}
			None => Ok(Box::new(Host::new(self.host_options(args)))),
		}
	}

	fn host_options(&self, startup_args: Vec<String>) -> HostOptions {
		HostOptions {
			search: self.config.search.clone(),
			autocomplete: self.config.autocomplete.clone(),
			llm: self.config.llm.clone(),
			ocr: self.config.ocr.clone(),
			startup_args,
		}
	}
}
