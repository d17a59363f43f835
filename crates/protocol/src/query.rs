use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;
use crate::service::{
	ConverterResult, FileSearchResult, LinterResult, LlmResult, OcrResult, OrganizerResult,
	ServiceKind,
};

/// Free-text request sent to `ProcessQuery`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
	pub query: String,
}

impl QueryRequest {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
		}
	}

	/// Whether the query carries anything besides whitespace.
	#[must_use]
	pub fn is_blank(&self) -> bool {
		self.query.trim().is_empty()
	}
}

/// Wire shape of a `ProcessQuery` reply.
///
/// `result` is deliberately untyped here; use [`QueryResponse::outcome`] to
/// decode it according to `service`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
	pub success: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub service: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub result: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl QueryResponse {
	/// Build a successful response carrying `result` under its service tag.
	pub fn success(result: ServiceResult) -> Result<Self, ProtocolError> {
		let service = result.tag().to_string();
		let payload = result.into_payload()?;
		Ok(Self {
			success: true,
			service: Some(service),
			result: Some(payload),
			error: None,
		})
	}

	/// Build an application-level failure.
	pub fn failure(service: Option<ServiceKind>, error: impl Into<String>) -> Self {
		Self {
			success: false,
			service: service.map(|kind| kind.tag().to_string()),
			result: None,
			error: Some(error.into()),
		}
	}

	/// The service tag as a known [`ServiceKind`], if it is one.
	#[must_use]
	pub fn service_kind(&self) -> Option<ServiceKind> {
		self.service.as_deref().and_then(ServiceKind::from_tag)
	}

	/// Decode the response into a typed [`Outcome`].
	///
	/// Failures never look at `result`. Successes decode `result` strictly
	/// by the `service` tag; unrecognised tags are preserved as
	/// [`ServiceResult::Unknown`].
	pub fn outcome(&self) -> Result<Outcome, ProtocolError> {
		if !self.success {
			return Ok(Outcome::Failure {
				service: self.service.clone(),
				error: self.error.clone(),
			});
		}

		let tag = self.service.as_deref().ok_or(ProtocolError::MissingService)?;
		let payload = self.result.clone().unwrap_or(Value::Null);
		let Some(kind) = ServiceKind::from_tag(tag) else {
			return Ok(Outcome::Success(ServiceResult::Unknown {
				service: tag.to_string(),
				result: payload,
			}));
		};

		ServiceResult::decode(kind, payload).map(Outcome::Success)
	}
}

/// Typed view of a [`QueryResponse`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
	Success(ServiceResult),
	Failure {
		service: Option<String>,
		error: Option<String>,
	},
}

/// Service payloads keyed by their tag.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResult {
	FileSearch(FileSearchResult),
	Organizer(OrganizerResult),
	Linter(LinterResult),
	Ocr(OcrResult),
	Converter(ConverterResult),
	Llm(LlmResult),
	/// A tag this build does not know; the payload is kept verbatim.
	Unknown { service: String, result: Value },
}

impl ServiceResult {
	fn decode(kind: ServiceKind, payload: Value) -> Result<Self, ProtocolError> {
		let malformed = |source| ProtocolError::MalformedResult {
			service: kind,
			source,
		};
		let result = match kind {
			ServiceKind::FileSearch => {
				ServiceResult::FileSearch(serde_json::from_value(payload).map_err(malformed)?)
			}
			ServiceKind::Organizer => {
				ServiceResult::Organizer(serde_json::from_value(payload).map_err(malformed)?)
			}
			ServiceKind::Linter => {
				ServiceResult::Linter(serde_json::from_value(payload).map_err(malformed)?)
			}
			ServiceKind::Ocr => ServiceResult::Ocr(serde_json::from_value(payload).map_err(malformed)?),
			ServiceKind::Converter => {
				ServiceResult::Converter(serde_json::from_value(payload).map_err(malformed)?)
			}
			ServiceKind::Llm => ServiceResult::Llm(serde_json::from_value(payload).map_err(malformed)?),
		};
		Ok(result)
	}

	/// The known service kind, `None` for [`ServiceResult::Unknown`].
	#[must_use]
	pub fn kind(&self) -> Option<ServiceKind> {
		match self {
			ServiceResult::FileSearch(_) => Some(ServiceKind::FileSearch),
			ServiceResult::Organizer(_) => Some(ServiceKind::Organizer),
			ServiceResult::Linter(_) => Some(ServiceKind::Linter),
			ServiceResult::Ocr(_) => Some(ServiceKind::Ocr),
			ServiceResult::Converter(_) => Some(ServiceKind::Converter),
			ServiceResult::Llm(_) => Some(ServiceKind::Llm),
			ServiceResult::Unknown { .. } => None,
		}
	}

	#[must_use]
	pub fn tag(&self) -> &str {
		match self {
			ServiceResult::Unknown { service, .. } => service,
			known => known.kind().map(ServiceKind::tag).unwrap_or_default(),
		}
	}

	fn into_payload(self) -> Result<Value, ProtocolError> {
		let value = match self {
			ServiceResult::FileSearch(result) => serde_json::to_value(result)?,
			ServiceResult::Organizer(result) => serde_json::to_value(result)?,
			ServiceResult::Linter(result) => serde_json::to_value(result)?,
			ServiceResult::Ocr(result) => serde_json::to_value(result)?,
			ServiceResult::Converter(result) => serde_json::to_value(result)?,
			ServiceResult::Llm(result) => serde_json::to_value(result)?,
			ServiceResult::Unknown { result, .. } => result,
		};
		Ok(value)
	}
}
