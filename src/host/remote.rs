//! Client side of the stdio protocol: a [`Backend`] that forwards every call
//! to another process.

use std::io::{self, BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use aoiler_protocol::{
	AutoCompleteResult, Backend, BackendError, ProtocolError, QueryRequest, QueryResponse, RpcCall,
	RpcReply, ServiceKind,
};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// Request/reply pairing over any line-oriented stream pair.
#[derive(Debug)]
pub struct RpcClient<R, W> {
	reader: R,
	writer: W,
	next_id: u64,
}

impl<R: BufRead, W: Write> RpcClient<R, W> {
	pub fn new(reader: R, writer: W) -> Self {
		Self {
			reader,
			writer,
			next_id: 1,
		}
	}

	/// Send `call` and block until its reply arrives.
	pub fn call<T: DeserializeOwned>(&mut self, call: RpcCall) -> Result<T, BackendError> {
		let id = self.next_id;
		self.next_id = self.next_id.wrapping_add(1);

		let request = call.into_request(id)?;
		debug!(id, method = %request.method, "sending request");
		let mut line = serde_json::to_string(&request).map_err(ProtocolError::from)?;
		line.push('\n');
		self.writer.write_all(line.as_bytes()).map_err(closed_pipe)?;
		self.writer.flush().map_err(closed_pipe)?;

		let mut reply = String::new();
		loop {
			reply.clear();
			if self.reader.read_line(&mut reply)? == 0 {
				return Err(BackendError::Closed);
			}
			if !reply.trim().is_empty() {
				break;
			}
		}
		let reply: RpcReply =
			serde_json::from_str(reply.trim_end()).map_err(ProtocolError::from)?;
		reply.into_result(id)
	}
}

fn closed_pipe(err: io::Error) -> BackendError {
	if err.kind() == io::ErrorKind::BrokenPipe {
		BackendError::Closed
	} else {
		BackendError::Io(err)
	}
}

impl<R, W> Backend for RpcClient<R, W>
where
	R: BufRead + Send,
	W: Write + Send,
{
	fn process_query(&mut self, request: &QueryRequest) -> Result<QueryResponse, BackendError> {
		self.call(RpcCall::ProcessQuery(request.clone()))
	}

	fn path_suggestions(&mut self, partial: &str) -> Result<AutoCompleteResult, BackendError> {
		self.call(RpcCall::GetPathSuggestions(partial.to_string()))
	}

	fn service_path_suggestions(
		&mut self,
		service: ServiceKind,
		partial: &str,
	) -> Result<AutoCompleteResult, BackendError> {
		self.call(RpcCall::GetServicePathSuggestions {
			service,
			partial: partial.to_string(),
		})
	}

	fn startup_args(&mut self) -> Result<Vec<String>, BackendError> {
		self.call(RpcCall::GetStartupArgs)
	}
}

/// A host running as a child process, spoken to over its stdin and stdout.
///
/// The child is killed when the backend is dropped.
#[derive(Debug)]
pub struct RemoteBackend {
	child: Child,
	client: RpcClient<BufReader<ChildStdout>, ChildStdin>,
}

impl RemoteBackend {
	/// Spawn `command_line`, split with shell quoting rules.
	pub fn spawn(command_line: &str) -> Result<Self, BackendError> {
		let words = shell_words::split(command_line)
			.map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
		let Some((program, args)) = words.split_first() else {
			return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty host command").into());
		};

		let mut child = Command::new(program)
			.args(args)
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::null())
			.spawn()?;
		info!(program = %program, pid = child.id(), "spawned host process");

		let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
			let _ = child.kill();
			return Err(BackendError::Closed);
		};
		Ok(Self {
			child,
			client: RpcClient::new(BufReader::new(stdout), stdin),
		})
	}
}

impl Drop for RemoteBackend {
	fn drop(&mut self) {
		if let Err(err) = self.child.kill() {
			warn!(error = %err, "failed to stop host process");
		}
		let _ = self.child.wait();
	}
}

impl Backend for RemoteBackend {
	fn process_query(&mut self, request: &QueryRequest) -> Result<QueryResponse, BackendError> {
		self.client.process_query(request)
	}

	fn path_suggestions(&mut self, partial: &str) -> Result<AutoCompleteResult, BackendError> {
		self.client.path_suggestions(partial)
	}

	fn service_path_suggestions(
		&mut self,
		service: ServiceKind,
		partial: &str,
	) -> Result<AutoCompleteResult, BackendError> {
		self.client.service_path_suggestions(service, partial)
	}

	fn startup_args(&mut self) -> Result<Vec<String>, BackendError> {
		self.client.startup_args()
	}
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	fn client(replies: &str) -> RpcClient<Cursor<Vec<u8>>, Vec<u8>> {
		RpcClient::new(Cursor::new(replies.as_bytes().to_vec()), Vec::new())
	}

	#[test]
	fn requests_are_numbered_and_replies_decoded() {
		let mut client = client(concat!(
			r#"{"id":1,"result":["organizer","~/Downloads"]}"#,
			"\n",
			r#"{"id":2,"result":{"suggestions":[],"isPath":false}}"#,
			"\n",
		));

		assert_eq!(
			client.startup_args().unwrap(),
			vec!["organizer".to_string(), "~/Downloads".to_string()]
		);
		assert_eq!(
			client.path_suggestions("hello").unwrap(),
			AutoCompleteResult::not_a_path()
		);

		let sent = String::from_utf8(client.writer.clone()).unwrap();
		let lines: Vec<&str> = sent.lines().collect();
		assert_eq!(lines[0], r#"{"id":1,"method":"GetStartupArgs"}"#);
		assert_eq!(
			lines[1],
			r#"{"id":2,"method":"GetPathSuggestions","params":"hello"}"#
		);
	}

	#[test]
	fn transport_failures_are_typed() {
		let mut closed = client("");
		assert!(matches!(closed.startup_args(), Err(BackendError::Closed)));

		let mut mismatched = client("{\"id\":9,\"result\":[]}\n");
		assert!(matches!(
			mismatched.startup_args(),
			Err(BackendError::IdMismatch { expected: 1, got: 9 })
		));

		let mut remote = client("{\"id\":1,\"error\":\"boom\"}\n");
		assert!(matches!(
			remote.startup_args(),
			Err(BackendError::Remote(message)) if message == "boom"
		));
	}

	#[test]
	fn empty_host_commands_are_rejected() {
		assert!(matches!(
			RemoteBackend::spawn("   "),
			Err(BackendError::Io(err)) if err.kind() == io::ErrorKind::InvalidInput
		));
	}
}
