use thiserror::Error;

use crate::service::ServiceKind;

/// Errors raised while encoding or decoding wire values.
#[derive(Debug, Error)]
pub enum ProtocolError {
	/// A response claimed success without naming the service that produced it.
	#[error("successful response is missing its service tag")]
	MissingService,

	/// The payload attached to a known service tag did not match that tag's shape.
	#[error("malformed {service} result: {source}")]
	MalformedResult {
		service: ServiceKind,
		#[source]
		source: serde_json::Error,
	},

	/// A service name that is neither a tag nor a known alias.
	#[error("unknown service '{0}'")]
	UnknownService(String),

	/// An RPC request named a method the host does not implement.
	#[error("unknown method '{0}'")]
	UnknownMethod(String),

	/// The parameters of an RPC request did not match the method.
	#[error("invalid parameters for {method}: {source}")]
	InvalidParams {
		method: &'static str,
		#[source]
		source: serde_json::Error,
	},

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

/// Transport-level failures: the call itself did not complete.
///
/// These are distinct from `success: false` responses, which are ordinary
/// application results carried inside a [`QueryResponse`](crate::QueryResponse).
#[derive(Debug, Error)]
pub enum BackendError {
	#[error("host i/o failed: {0}")]
	Io(#[from] std::io::Error),

	#[error("host closed the connection")]
	Closed,

	#[error("invalid reply from host: {0}")]
	Protocol(#[from] ProtocolError),

	#[error("reply id {got} does not match request id {expected}")]
	IdMismatch { expected: u64, got: u64 },

	#[error("host reported an error: {0}")]
	Remote(String),

	#[error("dispatch worker is no longer running")]
	WorkerGone,
}
