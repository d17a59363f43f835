use aoiler_protocol::ServiceKind;
use clap::ValueEnum;

/// How one-shot results are printed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Services selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ServiceArg {
	#[value(alias = "search")]
	Filesearch,
	#[value(alias = "organize")]
	Organizer,
	#[value(alias = "format")]
	Linter,
	Ocr,
	#[value(alias = "convert")]
	Converter,
	#[value(alias = "ask")]
	Llm,
}

impl From<ServiceArg> for ServiceKind {
	fn from(value: ServiceArg) -> Self {
		match value {
			ServiceArg::Filesearch => ServiceKind::FileSearch,
			ServiceArg::Organizer => ServiceKind::Organizer,
			ServiceArg::Linter => ServiceKind::Linter,
			ServiceArg::Ocr => ServiceKind::Ocr,
			ServiceArg::Converter => ServiceKind::Converter,
			ServiceArg::Llm => ServiceKind::Llm,
		}
	}
}
