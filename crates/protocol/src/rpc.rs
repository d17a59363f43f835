//! Newline-delimited JSON envelopes for talking to an out-of-process host.
//!
//! Each request is one line `{"id": 7, "method": "ProcessQuery", "params": {...}}`
//! and each reply is one line `{"id": 7, "result": ...}` or
//! `{"id": 7, "error": "..."}`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{BackendError, ProtocolError};
use crate::query::QueryRequest;
use crate::service::ServiceKind;

pub const PROCESS_QUERY: &str = "ProcessQuery";
pub const GET_PATH_SUGGESTIONS: &str = "GetPathSuggestions";
pub const GET_SERVICE_PATH_SUGGESTIONS: &str = "GetServicePathSuggestions";
pub const GET_STARTUP_ARGS: &str = "GetStartupArgs";

/// A decoded remote procedure call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcCall {
	ProcessQuery(QueryRequest),
	GetPathSuggestions(String),
	GetServicePathSuggestions { service: ServiceKind, partial: String },
	GetStartupArgs,
}

#[derive(Deserialize)]
struct ServicePartialParams {
	service: ServiceKind,
	partial: String,
}

impl RpcCall {
	#[must_use]
	pub fn method(&self) -> &'static str {
		match self {
			RpcCall::ProcessQuery(_) => PROCESS_QUERY,
			RpcCall::GetPathSuggestions(_) => GET_PATH_SUGGESTIONS,
			RpcCall::GetServicePathSuggestions { .. } => GET_SERVICE_PATH_SUGGESTIONS,
			RpcCall::GetStartupArgs => GET_STARTUP_ARGS,
		}
	}

	/// Wrap the call in an envelope carrying `id`.
	pub fn into_request(self, id: u64) -> Result<RpcRequest, ProtocolError> {
		let method = self.method().to_string();
		let params = match self {
			RpcCall::ProcessQuery(request) => serde_json::to_value(request)?,
			RpcCall::GetPathSuggestions(partial) => Value::String(partial),
			RpcCall::GetServicePathSuggestions { service, partial } => {
				json!({ "service": service, "partial": partial })
			}
			RpcCall::GetStartupArgs => Value::Null,
		};
		Ok(RpcRequest { id, method, params })
	}

	/// Decode the call carried by an envelope.
	pub fn from_request(request: &RpcRequest) -> Result<Self, ProtocolError> {
		let call = match request.method.as_str() {
			PROCESS_QUERY => RpcCall::ProcessQuery(params(PROCESS_QUERY, &request.params)?),
			GET_PATH_SUGGESTIONS => {
				RpcCall::GetPathSuggestions(params(GET_PATH_SUGGESTIONS, &request.params)?)
			}
			GET_SERVICE_PATH_SUGGESTIONS => {
				let ServicePartialParams { service, partial } =
					params(GET_SERVICE_PATH_SUGGESTIONS, &request.params)?;
				RpcCall::GetServicePathSuggestions { service, partial }
			}
			GET_STARTUP_ARGS => RpcCall::GetStartupArgs,
			other => return Err(ProtocolError::UnknownMethod(other.to_string())),
		};
		Ok(call)
	}
}

fn params<T: DeserializeOwned>(method: &'static str, value: &Value) -> Result<T, ProtocolError> {
	serde_json::from_value(value.clone())
		.map_err(|source| ProtocolError::InvalidParams { method, source })
}

/// Request envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
	pub id: u64,
	pub method: String,
	#[serde(default, skip_serializing_if = "Value::is_null")]
	pub params: Value,
}

/// Reply envelope. Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcReply {
	pub id: u64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub result: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl RpcReply {
	pub fn ok<T: Serialize>(id: u64, value: &T) -> Result<Self, ProtocolError> {
		Ok(Self {
			id,
			result: Some(serde_json::to_value(value)?),
			error: None,
		})
	}

	pub fn err(id: u64, message: impl Into<String>) -> Self {
		Self {
			id,
			result: None,
			error: Some(message.into()),
		}
	}

	/// Check the reply against the request it answers and decode the result.
	pub fn into_result<T: DeserializeOwned>(self, expected_id: u64) -> Result<T, BackendError> {
		if let Some(message) = self.error {
			return Err(BackendError::Remote(message));
		}
		if self.id != expected_id {
			return Err(BackendError::IdMismatch {
				expected: expected_id,
				got: self.id,
			});
		}
		let value = self.result.unwrap_or(Value::Null);
		serde_json::from_value(value).map_err(|err| BackendError::Protocol(err.into()))
	}
}
