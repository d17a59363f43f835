//! Drives `aoiler serve` as a child process over its stdio transport.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

use aoiler::host::RemoteBackend;
use aoiler_protocol::{Backend, QueryRequest, RpcReply, ServiceKind};
use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_aoiler");

fn spawn_host(extra: &[&str]) -> RemoteBackend {
	let mut words = vec![BIN, "serve", "--no-config"];
	words.extend_from_slice(extra);
	RemoteBackend::spawn(&shell_words::join(words)).unwrap()
}

#[test]
fn startup_args_come_from_the_serve_command_line() {
	let mut backend = spawn_host(&["organizer", "~/Downloads"]);
	assert_eq!(
		backend.startup_args().unwrap(),
		vec!["organizer".to_string(), "~/Downloads".to_string()]
	);
}

#[test]
fn application_failures_travel_as_responses() {
	let mut backend = spawn_host(&[]);

	let response = backend
		.process_query(&QueryRequest::new("Format notes.md"))
		.unwrap();
	assert!(!response.success);
	assert_eq!(response.service_kind(), Some(ServiceKind::Linter));
	assert_eq!(response.error.as_deref(), Some("unsupported file type: .md"));

	let response = backend.process_query(&QueryRequest::new("  ")).unwrap();
	assert!(!response.success);
	assert_eq!(response.error.as_deref(), Some("query is empty"));
}

#[test]
fn path_suggestions_list_directory_entries() {
	let dir = tempdir().unwrap();
	fs::write(dir.path().join("alpha.txt"), "").unwrap();
	fs::write(dir.path().join("beta.py"), "").unwrap();
	let base = dir.path().display().to_string();

	let mut backend = spawn_host(&[]);
	let result = backend.path_suggestions(&format!("{base}/al")).unwrap();
	assert!(result.is_path);
	assert_eq!(result.suggestions, vec![format!("{base}/alpha.txt")]);

	let result = backend
		.service_path_suggestions(ServiceKind::Linter, &format!("Format {base}/"))
		.unwrap();
	assert_eq!(result.suggestions, vec![format!("{base}/beta.py")]);

	let result = backend.path_suggestions("hello there").unwrap();
	assert!(!result.is_path);
	assert!(result.suggestions.is_empty());
}

#[test]
fn malformed_lines_get_an_error_reply() {
	let mut child = Command::new(BIN)
		.args(["serve", "--no-config"])
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::null())
		.spawn()
		.unwrap();

	let mut stdin = child.stdin.take().unwrap();
	writeln!(stdin, "not json").unwrap();
	writeln!(stdin, r#"{{"id": 4, "method": "Reboot"}}"#).unwrap();
	drop(stdin);

	let stdout = BufReader::new(child.stdout.take().unwrap());
	let replies: Vec<RpcReply> = stdout
		.lines()
		.map(|line| serde_json::from_str(&line.unwrap()).unwrap())
		.collect();
	assert!(child.wait().unwrap().success());

	assert_eq!(replies.len(), 2);
	assert_eq!(replies[0].id, 0);
	assert!(replies[0].error.as_deref().unwrap().starts_with("malformed request"));
	assert_eq!(replies[1].id, 4);
	assert!(replies[1].error.as_deref().unwrap().contains("Reboot"));
}
