use std::thread;
use std::time::{Duration, Instant};

use aoiler_protocol::{
	AutoCompleteResult, BackendError, LinterResult, QueryRequest, QueryResponse, ServiceResult,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

struct Fake {
	startup_args: Vec<String>,
}

impl Backend for Fake {
	fn process_query(&mut self, request: &QueryRequest) -> Result<QueryResponse, BackendError> {
		let file_path = request.query.trim_start_matches("Format ").to_string();
		QueryResponse::success(ServiceResult::Linter(LinterResult {
			fixed: true,
			file_path,
			output: None,
		}))
		.map_err(BackendError::from)
	}

	fn path_suggestions(&mut self, _partial: &str) -> Result<AutoCompleteResult, BackendError> {
		Ok(AutoCompleteResult::not_a_path())
	}

	fn service_path_suggestions(
		&mut self,
		_service: ServiceKind,
		_partial: &str,
	) -> Result<AutoCompleteResult, BackendError> {
		Ok(AutoCompleteResult::not_a_path())
	}

	fn startup_args(&mut self) -> Result<Vec<String>, BackendError> {
		Ok(self.startup_args.clone())
	}
}

fn app(startup_args: &[&str]) -> App<'static> {
	let backend = Fake {
		startup_args: startup_args.iter().map(ToString::to_string).collect(),
	};
	App::new(backend, TuiConfig::default())
}

fn press(app: &mut App<'_>, code: KeyCode) -> bool {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn pump_until(app: &mut App<'_>, done: impl Fn(&App<'_>) -> bool) {
	let deadline = Instant::now() + Duration::from_secs(5);
	while !done(app) {
		assert!(Instant::now() < deadline, "worker did not answer in time");
		app.pump_dispatch_events();
		thread::sleep(Duration::from_millis(5));
	}
}

fn draw(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_string());
	}
	lines.join("\n")
}

#[test]
fn empty_session_shows_the_welcome_screen() {
	let mut app = app(&[]);
	let screen = draw(&mut app);
	assert!(screen.contains("Aoiler  intelligent command center"));
	assert!(screen.contains("How can I help you today?"));
	assert!(screen.contains("alt+3  Format main.py"));
	assert!(screen.contains("Ask me anything..."));
}

#[test]
fn startup_args_focus_a_service() {
	let mut app = app(&["lint", "main.py"]);
	pump_until(&mut app, |app| app.session().focus().is_some());
	assert_eq!(app.session().focus(), Some(ServiceKind::Linter));
	assert!(draw(&mut app).contains("· Formatter"));
}

#[test]
fn unknown_first_arg_leaves_focus_unset() {
	let mut app = app(&["hello"]);
	app.dispatch(DispatchCommand::StartupArgs).unwrap();
	thread::sleep(Duration::from_millis(50));
	app.pump_dispatch_events();
	assert_eq!(app.session().focus(), None);
}

#[test]
fn submitting_renders_the_result_card() {
	let mut app = app(&[]);
	type_text(&mut app, "Format main.py");
	assert_eq!(app.session().input(), "Format main.py");

	assert!(!press(&mut app, KeyCode::Enter));
	assert!(app.session().is_loading());
	assert_eq!(app.input_text(), "");

	pump_until(&mut app, |app| !app.session().is_loading());
	let screen = draw(&mut app);
	assert!(screen.contains("Format main.py"));
	assert!(screen.contains("File has been formatted successfully."));
	assert!(screen.contains("┃ Formatting Complete"));
	assert!(screen.contains("┃ File: main.py"));
}

#[test]
fn keys_drive_the_suggestion_list() {
	let mut app = app(&[]);
	type_text(&mut app, "open ~/Do");
	app.session
		.suggestions_mut()
		.show(vec!["~/Documents/".into(), "~/Downloads/".into()]);
	assert!(draw(&mut app).contains("~/Downloads/"));

	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.input_text(), "open ~/Downloads/");
	assert_eq!(app.session().input(), "open ~/Downloads/");
	assert!(app.session().messages().is_empty());

	app.session.suggestions_mut().show(vec!["~/Downloads/a".into()]);
	assert!(!press(&mut app, KeyCode::Esc));
	assert!(!app.session().suggestions().is_visible());
	assert!(press(&mut app, KeyCode::Esc));
}

#[test]
fn alt_digits_fill_examples() {
	let mut app = app(&[]);
	app.handle_key(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::ALT));
	assert_eq!(app.input_text(), "Convert video.mp4 to webm");
}

#[test]
fn lost_worker_fails_the_pending_query() {
	let mut app = app(&[]);
	type_text(&mut app, "Format main.py");
	if let Some(dispatcher) = app.dispatcher.take() {
		dispatcher.shutdown();
	}
	press(&mut app, KeyCode::Enter);

	assert!(!app.session().is_loading());
	assert_eq!(
		app.session().messages()[1].content,
		"An error occurred: dispatch worker is no longer running"
	);
}
