//! Conversation state owned by the UI thread.

use std::time::{Duration, Instant};

use aoiler_protocol::{
	AutoCompleteResult, BackendError, QueryRequest, QueryResponse, ServiceKind,
};
use chrono::{DateTime, Local};
use tracing::warn;

use crate::debounce::{Debouncer, Fired};
use crate::present::{ResultCard, present};
use crate::suggest::{Suggestions, apply_suggestion};

/// Canned queries offered on the empty screen.
pub const EXAMPLE_QUERIES: [&str; 5] = [
	"Where is my waybar layout file?",
	"Organize ~/Downloads by category",
	"Format main.py",
	"Extract text from screen",
	"Convert video.mp4 to webm",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
	User,
	Assistant,
}

/// One entry of the append-only conversation log.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
	pub id: u64,
	pub role: Role,
	pub content: String,
	pub service: Option<ServiceKind>,
	pub card: Option<ResultCard>,
	pub timestamp: DateTime<Local>,
}

/// A suggestion lookup the debouncer released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestRequest {
	pub generation: u64,
	pub text: String,
	pub service: Option<ServiceKind>,
}

#[derive(Debug, Default)]
pub struct Session {
	messages: Vec<Message>,
	input: String,
	loading: bool,
	suggestions: Suggestions,
	autocomplete: Debouncer,
	focus: Option<ServiceKind>,
	next_id: u64,
}

impl Session {
	#[must_use]
	pub fn new(debounce: Duration) -> Self {
		Self {
			autocomplete: Debouncer::new(debounce),
			..Self::default()
		}
	}

	#[must_use]
	pub fn messages(&self) -> &[Message] {
		&self.messages
	}

	#[must_use]
	pub fn input(&self) -> &str {
		&self.input
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	#[must_use]
	pub fn suggestions(&self) -> &Suggestions {
		&self.suggestions
	}

	pub fn suggestions_mut(&mut self) -> &mut Suggestions {
		&mut self.suggestions
	}

	#[must_use]
	pub fn focus(&self) -> Option<ServiceKind> {
		self.focus
	}

	pub fn set_focus(&mut self, focus: Option<ServiceKind>) {
		self.focus = focus;
	}

	/// Replace the input and schedule a suggestion lookup for it.
	///
	/// Clearing the input hides suggestions right away.
	pub fn set_input(&mut self, text: impl Into<String>, now: Instant) {
		self.input = text.into();
		if self.input.is_empty() {
			self.autocomplete.cancel();
			self.suggestions.hide();
		} else {
			self.autocomplete.schedule(self.input.clone(), now);
		}
	}

	/// Release the pending lookup once input has been quiet long enough.
	pub fn poll_autocomplete(&mut self, now: Instant) -> Option<SuggestRequest> {
		self.autocomplete
			.poll(now)
			.map(|Fired { generation, text }| SuggestRequest {
				generation,
				text,
				service: self.focus,
			})
	}

	/// Apply a lookup reply unless newer input superseded it.
	pub fn receive_suggestions(
		&mut self,
		generation: u64,
		result: Result<AutoCompleteResult, BackendError>,
	) {
		if !self.autocomplete.is_current(generation) {
			return;
		}
		match result {
			Ok(result) if result.is_displayable() => self.suggestions.show(result.suggestions),
			Ok(_) => self.suggestions.hide(),
			Err(err) => {
				warn!(error = %err, "path suggestions failed");
				self.suggestions.hide();
			}
		}
	}

	/// Put the highlighted suggestion into the input.
	///
	/// Returns `false` when no suggestion is shown.
	pub fn accept_suggestion(&mut self, now: Instant) -> bool {
		let Some(selected) = self.suggestions.selected_item() else {
			return false;
		};
		self.input = apply_suggestion(&self.input, selected);
		self.suggestions.hide();
		self.autocomplete.schedule(self.input.clone(), now);
		true
	}

	/// Fill the input with one of [`EXAMPLE_QUERIES`].
	pub fn use_example(&mut self, index: usize, now: Instant) -> bool {
		let Some(example) = EXAMPLE_QUERIES.get(index) else {
			return false;
		};
		self.input = (*example).to_string();
		self.suggestions.hide();
		self.autocomplete.schedule(self.input.clone(), now);
		true
	}

	/// Turn the current input into a request.
	///
	/// Nothing happens while a query is in flight or when the input is blank.
	pub fn submit(&mut self) -> Option<QueryRequest> {
		if self.loading || self.input.trim().is_empty() {
			return None;
		}
		let query = std::mem::take(&mut self.input);
		self.push(Role::User, query.clone(), None, None);
		self.loading = true;
		self.autocomplete.cancel();
		self.suggestions.hide();
		Some(QueryRequest::new(query))
	}

	/// Append the assistant reply for a finished query.
	pub fn finish(&mut self, result: &Result<QueryResponse, BackendError>) {
		let presentation = present(result);
		self.push(
			Role::Assistant,
			presentation.headline,
			presentation.service,
			presentation.card,
		);
		self.loading = false;
	}

	fn push(
		&mut self,
		role: Role,
		content: String,
		service: Option<ServiceKind>,
		card: Option<ResultCard>,
	) {
		self.next_id += 1;
		self.messages.push(Message {
			id: self.next_id,
			role,
			content,
			service,
			card,
			timestamp: Local::now(),
		});
	}
}
