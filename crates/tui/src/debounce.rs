//! Trailing-edge debouncing for autocomplete lookups.

use std::time::{Duration, Instant};

/// Delay between the last keystroke and the suggestion lookup.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// A lookup that is due to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired {
	pub generation: u64,
	pub text: String,
}

#[derive(Debug, Clone)]
struct Pending {
	deadline: Instant,
	text: String,
}

/// Collapses bursts of input into a single lookup for the final text.
///
/// Every [`Debouncer::schedule`] or [`Debouncer::cancel`] bumps a generation
/// counter; replies tagged with an older generation are stale.
#[derive(Debug, Clone)]
pub struct Debouncer {
	delay: Duration,
	generation: u64,
	pending: Option<Pending>,
}

impl Default for Debouncer {
	fn default() -> Self {
		Self::new(DEFAULT_DELAY)
	}
}

impl Debouncer {
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			generation: 0,
			pending: None,
		}
	}

	/// Restart the timer for `text`, superseding anything still pending.
	pub fn schedule(&mut self, text: impl Into<String>, now: Instant) -> u64 {
		self.generation = self.generation.wrapping_add(1);
		self.pending = Some(Pending {
			deadline: now + self.delay,
			text: text.into(),
		});
		self.generation
	}

	/// Drop the pending lookup and invalidate any reply already in flight.
	pub fn cancel(&mut self) {
		self.generation = self.generation.wrapping_add(1);
		self.pending = None;
	}

	/// Take the pending lookup once its deadline has passed.
	pub fn poll(&mut self, now: Instant) -> Option<Fired> {
		let due = self
			.pending
			.as_ref()
			.is_some_and(|pending| now >= pending.deadline);
		if !due {
			return None;
		}
		self.pending.take().map(|pending| Fired {
			generation: self.generation,
			text: pending.text,
		})
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Whether a reply for `generation` still matches the latest input.
	#[must_use]
	pub fn is_current(&self, generation: u64) -> bool {
		generation == self.generation
	}
}
