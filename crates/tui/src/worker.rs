//! Background thread that owns the backend and answers UI requests.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use aoiler_protocol::{
	AutoCompleteResult, Backend, BackendError, QueryRequest, QueryResponse, ServiceKind,
};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchCommand {
	Query {
		id: u64,
		request: QueryRequest,
	},
	Suggest {
		generation: u64,
		text: String,
		service: Option<ServiceKind>,
	},
	StartupArgs,
	Shutdown,
}

#[derive(Debug)]
pub enum DispatchEvent {
	Response {
		id: u64,
		result: Result<QueryResponse, BackendError>,
	},
	Suggestions {
		generation: u64,
		result: Result<AutoCompleteResult, BackendError>,
	},
	StartupArgs(Result<Vec<String>, BackendError>),
}

/// Handle to the dispatch worker.
#[derive(Debug)]
pub struct Dispatcher {
	commands: Sender<DispatchCommand>,
	events: Receiver<DispatchEvent>,
	latest_generation: Arc<AtomicU64>,
	handle: Option<JoinHandle<()>>,
}

/// Move `backend` onto a worker thread.
pub fn spawn<B: Backend + 'static>(backend: B) -> Dispatcher {
	let (command_tx, command_rx) = mpsc::channel();
	let (event_tx, event_rx) = mpsc::channel();
	let latest_generation = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_generation);

	let handle = thread::spawn(move || worker_loop(backend, command_rx, event_tx, thread_latest));

	Dispatcher {
		commands: command_tx,
		events: event_rx,
		latest_generation,
		handle: Some(handle),
	}
}

fn worker_loop<B: Backend>(
	mut backend: B,
	commands: Receiver<DispatchCommand>,
	events: Sender<DispatchEvent>,
	latest_generation: Arc<AtomicU64>,
) {
	while let Ok(command) = commands.recv() {
		let event = match command {
			DispatchCommand::Query { id, request } => DispatchEvent::Response {
				id,
				result: backend.process_query(&request),
			},
			DispatchCommand::Suggest {
				generation,
				text,
				service,
			} => {
				// Lookups queued behind a slow query are superseded by newer input.
				if generation < latest_generation.load(Ordering::Acquire) {
					debug!(generation, "skipping superseded suggestion lookup");
					continue;
				}
				let result = match service {
					Some(service) => backend.service_path_suggestions(service, &text),
					None => backend.path_suggestions(&text),
				};
				DispatchEvent::Suggestions { generation, result }
			}
			DispatchCommand::StartupArgs => DispatchEvent::StartupArgs(backend.startup_args()),
			DispatchCommand::Shutdown => break,
		};
		if events.send(event).is_err() {
			break;
		}
	}
	debug!("dispatch worker stopped");
}

impl Dispatcher {
	/// Queue `command`; fails once the worker has exited.
	pub fn send(&self, command: DispatchCommand) -> Result<(), BackendError> {
		if let DispatchCommand::Suggest { generation, .. } = &command {
			self.latest_generation
				.fetch_max(*generation, Ordering::AcqRel);
		}
		self.commands
			.send(command)
			.map_err(|_| BackendError::WorkerGone)
	}

	/// Next finished reply, if any. `Err` means the worker is gone.
	pub fn try_recv(&self) -> Result<Option<DispatchEvent>, BackendError> {
		match self.events.try_recv() {
			Ok(event) => Ok(Some(event)),
			Err(TryRecvError::Empty) => Ok(None),
			Err(TryRecvError::Disconnected) => Err(BackendError::WorkerGone),
		}
	}

	/// Ask the worker to stop and wait for it to finish its current call.
	pub fn shutdown(mut self) {
		let _ = self.commands.send(DispatchCommand::Shutdown);
		if let Some(handle) = self.handle.take()
			&& handle.join().is_err()
		{
			tracing::warn!("dispatch worker panicked");
		}
	}
}

#[cfg(test)]
mod tests {
	use std::time::{Duration, Instant};

	use super::*;

	struct Scripted;

	impl Backend for Scripted {
		fn process_query(&mut self, request: &QueryRequest) -> Result<QueryResponse, BackendError> {
			Ok(QueryResponse::failure(None, request.query.clone()))
		}

		fn path_suggestions(&mut self, partial: &str) -> Result<AutoCompleteResult, BackendError> {
			Ok(AutoCompleteResult::paths(vec![format!("{partial}/")]))
		}

		fn service_path_suggestions(
			&mut self,
			service: ServiceKind,
			_partial: &str,
		) -> Result<AutoCompleteResult, BackendError> {
			Ok(AutoCompleteResult::paths(vec![service.tag().to_string()]))
		}

		fn startup_args(&mut self) -> Result<Vec<String>, BackendError> {
			Err(BackendError::Closed)
		}
	}

	fn next_event(dispatcher: &Dispatcher) -> DispatchEvent {
		let deadline = Instant::now() + Duration::from_secs(5);
		loop {
			if let Some(event) = dispatcher.try_recv().unwrap() {
				return event;
			}
			assert!(Instant::now() < deadline, "worker did not answer");
			thread::sleep(Duration::from_millis(5));
		}
	}

	#[test]
	fn answers_commands_in_order() {
		let dispatcher = spawn(Scripted);
		dispatcher
			.send(DispatchCommand::Query {
				id: 7,
				request: QueryRequest::new("hi"),
			})
			.unwrap();
		dispatcher
			.send(DispatchCommand::Suggest {
				generation: 1,
				text: "~".into(),
				service: Some(ServiceKind::Ocr),
			})
			.unwrap();
		dispatcher.send(DispatchCommand::StartupArgs).unwrap();

		match next_event(&dispatcher) {
			DispatchEvent::Response { id, result } => {
				assert_eq!(id, 7);
				assert_eq!(result.unwrap().error.as_deref(), Some("hi"));
			}
			other => panic!("unexpected event: {other:?}"),
		}
		match next_event(&dispatcher) {
			DispatchEvent::Suggestions { generation, result } => {
				assert_eq!(generation, 1);
				assert_eq!(result.unwrap().suggestions, vec!["ocr".to_string()]);
			}
			other => panic!("unexpected event: {other:?}"),
		}
		assert!(matches!(
			next_event(&dispatcher),
			DispatchEvent::StartupArgs(Err(BackendError::Closed))
		));
		dispatcher.shutdown();
	}

	#[test]
	fn stopped_worker_reports_worker_gone() {
		let dispatcher = spawn(Scripted);
		dispatcher.send(DispatchCommand::Shutdown).unwrap();

		let deadline = Instant::now() + Duration::from_secs(5);
		loop {
			match dispatcher.try_recv() {
				Err(BackendError::WorkerGone) => break,
				Ok(_) => {
					assert!(Instant::now() < deadline, "worker did not stop");
					thread::sleep(Duration::from_millis(5));
				}
				Err(other) => panic!("unexpected error: {other}"),
			}
		}
		assert!(matches!(
			dispatcher.send(DispatchCommand::StartupArgs),
			Err(BackendError::WorkerGone)
		));
	}
}
