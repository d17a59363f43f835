use crate::error::BackendError;
use crate::query::{QueryRequest, QueryResponse};
use crate::service::ServiceKind;
use crate::suggest::AutoCompleteResult;

/// The set of remote procedures a host exposes to frontends.
///
/// `Err` always means the call did not complete (transport failure).
/// Application failures come back as `Ok` responses with `success: false`.
pub trait Backend: Send {
	/// `ProcessQuery`: classify and run a free-text query.
	fn process_query(&mut self, request: &QueryRequest) -> Result<QueryResponse, BackendError>;

	/// `GetPathSuggestions`: complete the path-like part of partial input.
	fn path_suggestions(&mut self, partial: &str) -> Result<AutoCompleteResult, BackendError>;

	/// `GetServicePathSuggestions`: like [`Backend::path_suggestions`] but
	/// always in path mode and narrowed to the files `service` accepts.
	fn service_path_suggestions(
		&mut self,
		service: ServiceKind,
		partial: &str,
	) -> Result<AutoCompleteResult, BackendError>;

	/// `GetStartupArgs`: arguments the host was launched with.
	fn startup_args(&mut self) -> Result<Vec<String>, BackendError>;
}

impl<B: Backend + ?Sized> Backend for Box<B> {
	fn process_query(&mut self, request: &QueryRequest) -> Result<QueryResponse, BackendError> {
		(**self).process_query(request)
	}

	fn path_suggestions(&mut self, partial: &str) -> Result<AutoCompleteResult, BackendError> {
		(**self).path_suggestions(partial)
	}

	fn service_path_suggestions(
		&mut self,
		service: ServiceKind,
		partial: &str,
	) -> Result<AutoCompleteResult, BackendError> {
		(**self).service_path_suggestions(service, partial)
	}

	fn startup_args(&mut self) -> Result<Vec<String>, BackendError> {
		(**self).startup_args()
	}
}
