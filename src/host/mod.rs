//! The in-process backend: classification, service dispatch and path
//! completion behind the [`Backend`] trait.

mod classify;
pub mod remote;
pub mod serve;

use aoiler_protocol::{
	AutoCompleteResult, Backend, BackendError, QueryRequest, QueryResponse, ServiceKind,
	ServiceResult,
};
use tracing::{info, warn};

use crate::services::{
	AutocompleteOptions, FileSearch, Llm, LlmOptions, Ocr, OcrOptions, PathCompleter,
	SearchOptions, ServiceError, converter, linter, organizer,
};

pub use classify::classify;
pub use remote::RemoteBackend;
pub use serve::serve;

/// Everything needed to construct a [`Host`].
#[derive(Debug, Clone, Default)]
pub struct HostOptions {
	pub search: SearchOptions,
	pub autocomplete: AutocompleteOptions,
	pub llm: LlmOptions,
	pub ocr: OcrOptions,
	/// Arguments the frontend was launched with, returned by `GetStartupArgs`.
	pub startup_args: Vec<String>,
}

/// Backend that runs every service in the current process.
#[derive(Debug, Clone)]
pub struct Host {
	file_search: FileSearch,
	completer: PathCompleter,
	llm: Llm,
	ocr: Ocr,
	startup_args: Vec<String>,
}

impl Host {
	pub fn new(options: HostOptions) -> Self {
		Self {
			file_search: FileSearch::new(options.search),
			completer: PathCompleter::new(options.autocomplete),
			llm: Llm::new(options.llm),
			ocr: Ocr::new(options.ocr),
			startup_args: options.startup_args,
		}
	}

	/// Classify and run `request`; never fails at the transport level.
	pub fn dispatch(&self, request: &QueryRequest) -> QueryResponse {
		if request.is_blank() {
			return QueryResponse::failure(None, "query is empty");
		}
		let query = request.query.trim();
		let service = classify(query);
		info!(%service, "dispatching query");

		let response = self
			.run(service, query)
			.and_then(|result| QueryResponse::success(result).map_err(ServiceError::from));
		match response {
			Ok(response) => response,
			Err(err) => {
				warn!(%service, error = %err, "service failed");
				QueryResponse::failure(Some(service), err.to_string())
			}
		}
	}

	fn run(&self, service: ServiceKind, query: &str) -> Result<ServiceResult, ServiceError> {
		let result = match service {
			ServiceKind::FileSearch => ServiceResult::FileSearch(self.file_search.search(query)),
			ServiceKind::Organizer => ServiceResult::Organizer(organizer::organize(query)?),
			ServiceKind::Linter => ServiceResult::Linter(linter::format(query)?),
			ServiceKind::Ocr => ServiceResult::Ocr(self.ocr.extract(query)?),
			ServiceKind::Converter => ServiceResult::Converter(converter::convert(query)?),
			ServiceKind::Llm => ServiceResult::Llm(self.llm.ask(query)?),
		};
		Ok(result)
	}
}

impl Backend for Host {
	fn process_query(&mut self, request: &QueryRequest) -> Result<QueryResponse, BackendError> {
		Ok(self.dispatch(request))
	}

	fn path_suggestions(&mut self, partial: &str) -> Result<AutoCompleteResult, BackendError> {
		self.completer
			.suggest(partial)
			.map_err(|err| BackendError::Remote(format!("path completion failed: {err}")))
	}

	fn service_path_suggestions(
		&mut self,
		service: ServiceKind,
		partial: &str,
	) -> Result<AutoCompleteResult, BackendError> {
		self.completer
			.suggest_for(service, partial)
			.map_err(|err| BackendError::Remote(format!("path completion failed: {err}")))
	}

	fn startup_args(&mut self) -> Result<Vec<String>, BackendError> {
		Ok(self.startup_args.clone())
	}
}
