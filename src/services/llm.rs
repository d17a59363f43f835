use std::time::Duration;

use aoiler_protocol::LlmResult;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ServiceError;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const SYSTEM_PROMPT: &str = "You are a concise assistant embedded in a Linux desktop launcher. \
	Answer in a few sentences of plain text.";

/// Chat completion endpoint settings.
#[derive(Debug, Clone)]
pub struct LlmOptions {
	pub api_url: String,
	pub api_key: Option<String>,
	pub model: String,
	/// Name reported back to the frontend; defaults to the endpoint host.
	pub provider: Option<String>,
	pub timeout: Duration,
}

impl Default for LlmOptions {
	fn default() -> Self {
		Self {
			api_url: DEFAULT_API_URL.to_string(),
			api_key: None,
			model: DEFAULT_MODEL.to_string(),
			provider: None,
			timeout: Duration::from_secs(60),
		}
	}
}

#[derive(Serialize)]
struct ChatRequest<'a> {
	model: &'a str,
	messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
	role: &'a str,
	content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
	#[serde(default)]
	choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
	message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
	#[serde(default)]
	content: Option<String>,
}

/// Answers free-form questions through an OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct Llm {
	options: LlmOptions,
}

impl Llm {
	pub fn new(options: LlmOptions) -> Self {
		Self { options }
	}

	/// Whether an API key is available.
	#[must_use]
	pub fn is_configured(&self) -> bool {
		self.api_key().is_some()
	}

	fn api_key(&self) -> Option<&str> {
		self.options
			.api_key
			.as_deref()
			.map(str::trim)
			.filter(|key| !key.is_empty())
	}

	/// Provider name reported with each response.
	#[must_use]
	pub fn provider(&self) -> Option<String> {
		self.options
			.provider
			.clone()
			.or_else(|| host_of(&self.options.api_url))
	}

	pub fn ask(&self, query: &str) -> Result<LlmResult, ServiceError> {
		let key = self.api_key().ok_or(ServiceError::LlmNotConfigured)?;
		let client = Client::builder().timeout(self.options.timeout).build()?;

		let request = ChatRequest {
			model: &self.options.model,
			messages: [
				ChatMessage {
					role: "system",
					content: SYSTEM_PROMPT,
				},
				ChatMessage {
					role: "user",
					content: query,
				},
			],
		};

		debug!(url = %self.options.api_url, model = %self.options.model, "sending chat completion");
		let response: ChatResponse = client
			.post(&self.options.api_url)
			.bearer_auth(key)
			.json(&request)
			.send()?
			.error_for_status()?
			.json()?;

		let content = response
			.choices
			.into_iter()
			.next()
			.and_then(|choice| choice.message.content)
			.map(|content| content.trim().to_string())
			.filter(|content| !content.is_empty())
			.ok_or_else(|| ServiceError::LlmResponse("no message content in reply".into()))?;

		info!(chars = content.len(), "chat completion received");
		Ok(LlmResult {
			response: content,
			provider: self.provider(),
		})
	}
}

/// Host part of an http(s) URL.
fn host_of(url: &str) -> Option<String> {
	reqwest::Url::parse(url.trim())
		.ok()?
		.host_str()
		.map(str::to_string)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_key_is_reported_before_any_request() {
		let llm = Llm::new(LlmOptions {
			api_key: Some("   ".into()),
			..LlmOptions::default()
		});
		assert!(!llm.is_configured());
		let err = llm.ask("what is a compositor?").unwrap_err();
		assert_eq!(
			err.to_string(),
			"LLM API key not configured. Please set LLM_API_KEY environment variable."
		);
	}

	#[test]
	fn provider_defaults_to_endpoint_host() {
		let llm = Llm::new(LlmOptions::default());
		assert_eq!(llm.provider().as_deref(), Some("api.openai.com"));

		let named = Llm::new(LlmOptions {
			provider: Some("ollama".into()),
			..LlmOptions::default()
		});
		assert_eq!(named.provider().as_deref(), Some("ollama"));
	}

	#[test]
	fn hosts_are_parsed_from_urls() {
		assert_eq!(host_of("http://localhost:11434/v1/chat").as_deref(), Some("localhost"));
		assert_eq!(host_of("https://user@example.com?x=1").as_deref(), Some("example.com"));
		assert_eq!(host_of("http://[::1]:11434/v1").as_deref(), Some("[::1]"));
		assert_eq!(host_of("not a url"), None);
		assert_eq!(host_of(""), None);
	}
}
