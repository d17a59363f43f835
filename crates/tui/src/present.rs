//! Turning query outcomes into chat text and result cards.

use aoiler_protocol::{
	BackendError, EntryKind, Outcome, QueryResponse, ServiceKind, ServiceResult,
};

/// Colour family a card is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
	Success,
	Warning,
	Error,
	Neutral,
}

/// Structured details shown under an assistant message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
	pub title: String,
	pub tone: Tone,
	pub fields: Vec<(&'static str, String)>,
	pub body: Option<String>,
}

impl ResultCard {
	fn new(title: impl Into<String>, tone: Tone) -> Self {
		Self {
			title: title.into(),
			tone,
			fields: Vec::new(),
			body: None,
		}
	}

	fn field(mut self, label: &'static str, value: impl Into<String>) -> Self {
		self.fields.push((label, value.into()));
		self
	}

	fn body(mut self, body: impl Into<String>) -> Self {
		let body = body.into();
		if !body.trim().is_empty() {
			self.body = Some(body);
		}
		self
	}

	/// Plain-text rendering: title, `Label: value` rows, then the body.
	#[must_use]
	pub fn lines(&self) -> Vec<String> {
		let mut lines = vec![self.title.clone()];
		lines.extend(
			self.fields
				.iter()
				.map(|(label, value)| format!("{label}: {value}")),
		);
		if let Some(body) = &self.body {
			lines.extend(body.lines().map(str::to_string));
		}
		lines
	}
}

/// Everything needed to show one assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
	pub headline: String,
	pub service: Option<ServiceKind>,
	pub card: Option<ResultCard>,
}

const GENERIC_FAILURE: &str = "An error occurred while processing your request.";

/// Present the result of a `ProcessQuery` call, transport errors included.
#[must_use]
pub fn present(result: &Result<QueryResponse, BackendError>) -> Presentation {
	match result {
		Ok(response) => present_response(response),
		Err(err) => transport_failure(err.to_string()),
	}
}

/// Present a response the host delivered.
#[must_use]
pub fn present_response(response: &QueryResponse) -> Presentation {
	match response.outcome() {
		Ok(Outcome::Success(result)) => present_success(result),
		Ok(Outcome::Failure { service, error }) => {
			let message = error
				.filter(|error| !error.trim().is_empty())
				.unwrap_or_else(|| GENERIC_FAILURE.to_string());
			Presentation {
				headline: message.clone(),
				service: service.as_deref().and_then(ServiceKind::from_tag),
				card: Some(ResultCard::new("Error", Tone::Error).body(message)),
			}
		}
		Err(err) => transport_failure(err.to_string()),
	}
}

fn transport_failure(message: String) -> Presentation {
	Presentation {
		headline: format!("An error occurred: {message}"),
		service: None,
		card: Some(ResultCard::new("Error", Tone::Error).body(message)),
	}
}

fn present_success(result: ServiceResult) -> Presentation {
	let service = result.kind();
	let (headline, card) = match result {
		ServiceResult::FileSearch(found) if found.found => (
			"Found the file you're looking for.".to_string(),
			ResultCard::new("File Found", Tone::Success)
				.field("Path", found.path)
				.field("Type", entry_label(found.kind)),
		),
		ServiceResult::FileSearch(_) => (
			"Could not find the file.".to_string(),
			ResultCard::new("File not found", Tone::Warning),
		),
		ServiceResult::Organizer(organized) => (
			"Files have been organized.".to_string(),
			ResultCard::new("Organization Complete", Tone::Success).body(organized.output),
		),
		ServiceResult::Linter(linted) => {
			let (headline, card) = if linted.fixed {
				(
					"File has been formatted successfully.",
					ResultCard::new("Formatting Complete", Tone::Success),
				)
			} else {
				(
					"Could not format the file.",
					ResultCard::new("Formatting Failed", Tone::Warning),
				)
			};
			(
				headline.to_string(),
				card.field("File", linted.file_path)
					.body(linted.output.unwrap_or_default()),
			)
		}
		ServiceResult::Ocr(ocr) => (
			"Text extracted from image.".to_string(),
			ResultCard::new("Extracted Text", Tone::Success).body(ocr.text),
		),
		ServiceResult::Converter(converted) => (
			"File conversion completed.".to_string(),
			ResultCard::new("Conversion Complete", Tone::Success)
				.field("Output", converted.output_path),
		),
		ServiceResult::Llm(reply) => {
			let headline = if reply.response.trim().is_empty() {
				"LLM response received.".to_string()
			} else {
				reply.response.clone()
			};
			let mut card = ResultCard::new("LLM Response", Tone::Neutral);
			if let Some(provider) = reply.provider {
				card = card.field("Provider", provider);
			}
			(headline, card.body(reply.response))
		}
		ServiceResult::Unknown { service, result } => {
			let pretty =
				serde_json::to_string_pretty(&result).unwrap_or_else(|_| result.to_string());
			(
				"Request processed.".to_string(),
				ResultCard::new(format!("Service: {service}"), Tone::Neutral).body(pretty),
			)
		}
	};
	Presentation {
		headline,
		service,
		card: Some(card),
	}
}

fn entry_label(kind: EntryKind) -> &'static str {
	match kind {
		EntryKind::File => "File",
		EntryKind::Directory => "Directory",
		EntryKind::Unknown => "Unknown",
	}
}

#[cfg(test)]
mod tests {
	use aoiler_protocol::{
		ConverterResult, FileSearchResult, LinterResult, LlmResult, OcrResult, OrganizerResult,
	};
	use insta::assert_snapshot;
	use serde_json::json;

	use super::*;

	fn success(result: ServiceResult) -> Presentation {
		present_response(&QueryResponse::success(result).unwrap())
	}

	fn card_text(presentation: &Presentation) -> String {
		presentation.card.as_ref().unwrap().lines().join("\n")
	}

	#[test]
	fn every_service_success_has_text() {
		let results = [
			ServiceResult::FileSearch(FileSearchResult::found("/a", EntryKind::File)),
			ServiceResult::Organizer(OrganizerResult {
				output: String::new(),
			}),
			ServiceResult::Linter(LinterResult {
				fixed: true,
				file_path: "main.py".into(),
				output: None,
			}),
			ServiceResult::Ocr(OcrResult { text: "hi".into() }),
			ServiceResult::Converter(ConverterResult {
				output_path: "a.webm".into(),
			}),
			ServiceResult::Llm(LlmResult {
				response: String::new(),
				provider: None,
			}),
		];
		for result in results {
			let presentation = success(result);
			assert!(!presentation.headline.is_empty());
			assert!(!card_text(&presentation).is_empty());
			assert!(presentation.service.is_some());
		}
	}

	#[test]
	fn file_search_cards() {
		let found = success(ServiceResult::FileSearch(FileSearchResult::found(
			"/home/me/.config/waybar/config.jsonc",
			EntryKind::File,
		)));
		assert_eq!(found.headline, "Found the file you're looking for.");
		assert_snapshot!(card_text(&found), @r"
		File Found
		Path: /home/me/.config/waybar/config.jsonc
		Type: File
		");

		let missing = success(ServiceResult::FileSearch(FileSearchResult::not_found()));
		assert_eq!(missing.headline, "Could not find the file.");
		assert_eq!(missing.card.unwrap().tone, Tone::Warning);
	}

	#[test]
	fn linter_card_carries_formatter_output() {
		let presentation = success(ServiceResult::Linter(LinterResult {
			fixed: false,
			file_path: "main.py".into(),
			output: Some("error: cannot format main.py".into()),
		}));
		assert_eq!(presentation.headline, "Could not format the file.");
		assert_snapshot!(card_text(&presentation), @r"
		Formatting Failed
		File: main.py
		error: cannot format main.py
		");
	}

	#[test]
	fn llm_headline_is_the_response() {
		let presentation = success(ServiceResult::Llm(LlmResult {
			response: "Rayleigh scattering.".into(),
			provider: Some("api.openai.com".into()),
		}));
		assert_eq!(presentation.headline, "Rayleigh scattering.");
		assert_snapshot!(card_text(&presentation), @r"
		LLM Response
		Provider: api.openai.com
		Rayleigh scattering.
		");
	}

	#[test]
	fn failures_ignore_the_result_payload() {
		let response: QueryResponse = serde_json::from_value(json!({
			"success": false,
			"service": "converter",
			"result": 42,
			"error": "no target format found in query"
		}))
		.unwrap();
		let presentation = present_response(&response);
		assert_eq!(presentation.headline, "no target format found in query");
		assert_eq!(presentation.service, Some(ServiceKind::Converter));
		assert_eq!(presentation.card.unwrap().tone, Tone::Error);

		let bare = present_response(&QueryResponse::failure(None, ""));
		assert_eq!(bare.headline, GENERIC_FAILURE);
	}

	#[test]
	fn unknown_services_show_their_payload() {
		let response: QueryResponse = serde_json::from_value(json!({
			"success": true,
			"service": "weather",
			"result": {"forecast": "rain"}
		}))
		.unwrap();
		let presentation = present_response(&response);
		assert_eq!(presentation.headline, "Request processed.");
		assert_snapshot!(card_text(&presentation), @r#"
		Service: weather
		{
		  "forecast": "rain"
		}
		"#);
	}

	#[test]
	fn transport_errors_are_prefixed() {
		let presentation = present(&Err(BackendError::Closed));
		assert_eq!(
			presentation.headline,
			"An error occurred: host closed the connection"
		);
		assert_eq!(presentation.service, None);
	}
}
