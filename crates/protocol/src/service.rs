//! Service tags and the payload each one returns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// A backend capability selected per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
	FileSearch,
	Organizer,
	Linter,
	Ocr,
	Converter,
	Llm,
}

impl ServiceKind {
	/// Every service, in the order the frontend lists them.
	pub const ALL: [ServiceKind; 6] = [
		ServiceKind::FileSearch,
		ServiceKind::Organizer,
		ServiceKind::Linter,
		ServiceKind::Ocr,
		ServiceKind::Converter,
		ServiceKind::Llm,
	];

	/// The wire tag carried in `QueryResponse::service`.
	#[must_use]
	pub const fn tag(self) -> &'static str {
		match self {
			ServiceKind::FileSearch => "filesearch",
			ServiceKind::Organizer => "organizer",
			ServiceKind::Linter => "linter",
			ServiceKind::Ocr => "ocr",
			ServiceKind::Converter => "converter",
			ServiceKind::Llm => "llm",
		}
	}

	/// Human readable name used in headers and summaries.
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			ServiceKind::FileSearch => "File search",
			ServiceKind::Organizer => "Organizer",
			ServiceKind::Linter => "Formatter",
			ServiceKind::Ocr => "OCR",
			ServiceKind::Converter => "Converter",
			ServiceKind::Llm => "Assistant",
		}
	}

	/// Resolve an exact wire tag.
	#[must_use]
	pub fn from_tag(tag: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.tag() == tag)
	}
}

impl fmt::Display for ServiceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag())
	}
}

impl FromStr for ServiceKind {
	type Err = ProtocolError;

	/// Accepts the wire tag or a loose alias such as `lint` or `convert`.
	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase();
		if let Some(kind) = Self::from_tag(&normalized) {
			return Ok(kind);
		}
		let kind = match normalized.as_str() {
			"search" | "find" | "files" | "file-search" | "file_search" => ServiceKind::FileSearch,
			"organize" | "organise" | "organiser" | "tidy" => ServiceKind::Organizer,
			"lint" | "format" | "formatter" | "fmt" => ServiceKind::Linter,
			"text" | "screen" | "capture" => ServiceKind::Ocr,
			"convert" | "conversion" | "ffmpeg" => ServiceKind::Converter,
			"ask" | "chat" | "assistant" | "ai" => ServiceKind::Llm,
			_ => return Err(ProtocolError::UnknownService(value.to_string())),
		};
		Ok(kind)
	}
}

/// Whether a search hit is a regular file or a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
	File,
	Directory,
	#[default]
	#[serde(other)]
	Unknown,
}

impl EntryKind {
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			EntryKind::File => "file",
			EntryKind::Directory => "directory",
			EntryKind::Unknown => "unknown",
		}
	}
}

/// Payload of the `filesearch` service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSearchResult {
	pub found: bool,
	#[serde(default)]
	pub path: String,
	#[serde(rename = "type", default)]
	pub kind: EntryKind,
}

impl FileSearchResult {
	#[must_use]
	pub fn found(path: impl Into<String>, kind: EntryKind) -> Self {
		Self {
			found: true,
			path: path.into(),
			kind,
		}
	}

	#[must_use]
	pub fn not_found() -> Self {
		Self::default()
	}
}

/// Payload of the `organizer` service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizerResult {
	pub output: String,
}

/// Payload of the `linter` service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinterResult {
	pub fixed: bool,
	pub file_path: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub output: Option<String>,
}

/// Payload of the `ocr` service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrResult {
	pub text: String,
}

/// Payload of the `converter` service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverterResult {
	pub output_path: String,
}

/// Payload of the `llm` service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmResult {
	pub response: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub provider: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tags_round_trip_through_serde() {
		for kind in ServiceKind::ALL {
			let encoded = serde_json::to_value(kind).unwrap();
			assert_eq!(encoded, serde_json::Value::String(kind.tag().into()));
			assert_eq!(ServiceKind::from_tag(kind.tag()), Some(kind));
		}
	}

	#[test]
	fn aliases_resolve_to_services() {
		assert_eq!("lint".parse::<ServiceKind>().unwrap(), ServiceKind::Linter);
		assert_eq!(" Convert ".parse::<ServiceKind>().unwrap(), ServiceKind::Converter);
		assert_eq!("ocr".parse::<ServiceKind>().unwrap(), ServiceKind::Ocr);
		assert!(matches!(
			"weather".parse::<ServiceKind>(),
			Err(ProtocolError::UnknownService(name)) if name == "weather"
		));
	}

	#[test]
	fn file_search_uses_type_key() {
		let value = serde_json::to_value(FileSearchResult::found(
			"/home/me/.config/waybar",
			EntryKind::Directory,
		))
		.unwrap();
		assert_eq!(value["type"], "directory");
		assert_eq!(value["found"], true);
	}

	#[test]
	fn empty_entry_type_decodes_as_unknown() {
		let result: FileSearchResult =
			serde_json::from_str(r#"{"found":false,"path":"","type":""}"#).unwrap();
		assert_eq!(result.kind, EntryKind::Unknown);
		assert!(!result.found);
	}

	#[test]
	fn linter_payload_uses_camel_case_and_optional_output() {
		let result: LinterResult =
			serde_json::from_str(r#"{"fixed":true,"filePath":"main.py"}"#).unwrap();
		assert_eq!(result.file_path, "main.py");
		assert_eq!(result.output, None);
	}
}
