use std::time::Instant;

use aoiler_protocol::{Backend, BackendError, ServiceKind};
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, info, warn};
use tui_textarea::TextArea;

use crate::components::input::new_input;
use crate::config::TuiConfig;
use crate::session::Session;
use crate::theme::Theme;
use crate::worker::{self, DispatchCommand, DispatchEvent, Dispatcher};

/// Chat screen state: the session plus everything needed to draw it.
pub struct App<'a> {
	pub(crate) session: Session,
	pub(crate) input: TextArea<'a>,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	/// Rows scrolled up from the bottom of the message log.
	pub(crate) scroll_back: u16,
	dispatcher: Option<Dispatcher>,
	next_query_id: u64,
}

impl<'a> App<'a> {
	/// Start a dispatch worker for `backend` and ask it for startup args.
	pub fn new<B: Backend + 'static>(backend: B, config: TuiConfig) -> Self {
		let mut app = Self {
			session: Session::new(config.debounce),
			input: new_input("", &config.theme),
			theme: config.theme,
			throbber_state: ThrobberState::default(),
			scroll_back: 0,
			dispatcher: Some(worker::spawn(backend)),
			next_query_id: 0,
		};
		if let Some(query) = config.initial_query.filter(|query| !query.is_empty()) {
			app.session.set_input(query, Instant::now());
			app.sync_input();
		}
		if let Err(err) = app.dispatch(DispatchCommand::StartupArgs) {
			warn!(error = %err, "could not request startup arguments");
		}
		app
	}

	#[must_use]
	pub fn session(&self) -> &Session {
		&self.session
	}

	/// Rebuild the input widget after the session rewrote the text.
	pub(crate) fn sync_input(&mut self) {
		self.input = new_input(self.session.input(), &self.theme);
	}

	pub(crate) fn input_text(&self) -> String {
		self.input.lines().join(" ")
	}

	fn dispatch(&mut self, command: DispatchCommand) -> Result<(), BackendError> {
		match &self.dispatcher {
			Some(dispatcher) => dispatcher.send(command),
			None => Err(BackendError::WorkerGone),
		}
	}

	/// Send the current input as a query.
	pub(crate) fn submit(&mut self) {
		let Some(request) = self.session.submit() else {
			return;
		};
		self.sync_input();
		self.scroll_back = 0;
		self.next_query_id += 1;
		let id = self.next_query_id;
		info!(id, "submitting query");
		if let Err(err) = self.dispatch(DispatchCommand::Query { id, request }) {
			self.session.finish(&Err(err));
		}
	}

	/// Drain finished work from the dispatch worker.
	pub(crate) fn pump_dispatch_events(&mut self) {
		loop {
			let received = match &self.dispatcher {
				Some(dispatcher) => dispatcher.try_recv(),
				None => return,
			};
			match received {
				Ok(Some(DispatchEvent::Response { id, result })) => {
					debug!(id, ok = result.is_ok(), "query finished");
					self.session.finish(&result);
					self.scroll_back = 0;
				}
				Ok(Some(DispatchEvent::Suggestions { generation, result })) => {
					self.session.receive_suggestions(generation, result);
				}
				Ok(Some(DispatchEvent::StartupArgs(Ok(args)))) => self.apply_startup_args(&args),
				Ok(Some(DispatchEvent::StartupArgs(Err(err)))) => {
					warn!(error = %err, "startup arguments unavailable");
				}
				Ok(None) => return,
				Err(err) => {
					warn!("dispatch worker exited");
					self.dispatcher = None;
					if self.session.is_loading() {
						self.session.finish(&Err(err));
					}
					return;
				}
			}
		}
	}

	/// Send the debounced suggestion lookup once it is due.
	pub(crate) fn pump_autocomplete(&mut self, now: Instant) {
		let Some(request) = self.session.poll_autocomplete(now) else {
			return;
		};
		let command = DispatchCommand::Suggest {
			generation: request.generation,
			text: request.text,
			service: request.service,
		};
		if let Err(err) = self.dispatch(command) {
			warn!(error = %err, "could not request path suggestions");
		}
	}

	/// A first argument naming a service narrows suggestions to it.
	fn apply_startup_args(&mut self, args: &[String]) {
		let Some(first) = args.first() else {
			return;
		};
		match first.parse::<ServiceKind>() {
			Ok(service) => {
				info!(%service, "focusing service from startup arguments");
				self.session.set_focus(Some(service));
			}
			Err(_) => debug!(arg = %first, "first startup argument is not a service"),
		}
	}

	/// Stop the worker unless it is still busy with a query.
	pub(crate) fn stop_worker(&mut self) {
		let Some(dispatcher) = self.dispatcher.take() else {
			return;
		};
		if self.session.is_loading() {
			debug!("leaving in-flight query to finish in the background");
			drop(dispatcher);
		} else {
			dispatcher.shutdown();
		}
	}
}

#[cfg(test)]
mod tests;
