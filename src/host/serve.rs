//! Line-oriented stdio server exposing a [`Backend`] to another process.

use std::io::{self, BufRead, Write};

use aoiler_protocol::{Backend, BackendError, RpcCall, RpcReply, RpcRequest};
use serde::Serialize;
use tracing::{debug, warn};

/// Answer requests read from `reader` until it reaches end of input.
///
/// Each reply is flushed as soon as it is written. Lines that are not valid
/// request envelopes are answered with an error reply carrying id 0.
pub fn serve<B, R, W>(backend: &mut B, mut reader: R, mut writer: W) -> io::Result<()>
where
	B: Backend + ?Sized,
	R: BufRead,
	W: Write,
{
	let mut buf = Vec::new();
	loop {
		buf.clear();
		if reader.read_until(b'\n', &mut buf)? == 0 {
			break;
		}
		let line = buf.trim_ascii();
		if line.is_empty() {
			continue;
		}
		let reply = handle_line(backend, line);
		serde_json::to_writer(&mut writer, &reply)?;
		writer.write_all(b"\n")?;
		writer.flush()?;
	}
	debug!("input closed, server stopping");
	Ok(())
}

fn handle_line<B: Backend + ?Sized>(backend: &mut B, line: &[u8]) -> RpcReply {
	let request: RpcRequest = match serde_json::from_slice(line) {
		Ok(request) => request,
		Err(err) => {
			warn!(error = %err, "malformed request line");
			return RpcReply::err(0, format!("malformed request: {err}"));
		}
	};
	let id = request.id;
	let call = match RpcCall::from_request(&request) {
		Ok(call) => call,
		Err(err) => return RpcReply::err(id, err.to_string()),
	};
	debug!(id, method = call.method(), "handling request");

	match call {
		RpcCall::ProcessQuery(query) => reply(id, backend.process_query(&query)),
		RpcCall::GetPathSuggestions(partial) => reply(id, backend.path_suggestions(&partial)),
		RpcCall::GetServicePathSuggestions { service, partial } => {
			reply(id, backend.service_path_suggestions(service, &partial))
		}
		RpcCall::GetStartupArgs => reply(id, backend.startup_args()),
	}
}

fn reply<T: Serialize>(id: u64, result: Result<T, BackendError>) -> RpcReply {
	match result {
		Ok(value) => RpcReply::ok(id, &value).unwrap_or_else(|err| RpcReply::err(id, err.to_string())),
		Err(BackendError::Remote(message)) => RpcReply::err(id, message),
		Err(err) => RpcReply::err(id, err.to_string()),
	}
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use aoiler_protocol::{AutoCompleteResult, QueryRequest, QueryResponse, ServiceKind};
	use serde_json::{Value, json};

	use super::*;

	/// Backend that echoes what it was asked.
	struct Echo;

	impl Backend for Echo {
		fn process_query(&mut self, request: &QueryRequest) -> Result<QueryResponse, BackendError> {
			Ok(QueryResponse::failure(None, format!("echo: {}", request.query)))
		}

		fn path_suggestions(&mut self, partial: &str) -> Result<AutoCompleteResult, BackendError> {
			Ok(AutoCompleteResult::paths(vec![format!("{partial}x")]))
		}

		fn service_path_suggestions(
			&mut self,
			service: ServiceKind,
			_partial: &str,
		) -> Result<AutoCompleteResult, BackendError> {
			Err(BackendError::Remote(format!("{service} has no files")))
		}

		fn startup_args(&mut self) -> Result<Vec<String>, BackendError> {
			Ok(vec!["ocr".into()])
		}
	}

	fn run(input: impl AsRef<[u8]>) -> Vec<Value> {
		let mut output = Vec::new();
		serve(&mut Echo, Cursor::new(input.as_ref()), &mut output).unwrap();
		String::from_utf8(output)
			.unwrap()
			.lines()
			.map(|line| serde_json::from_str(line).unwrap())
			.collect()
	}

	#[test]
	fn answers_each_line_in_order() {
		let replies = run(concat!(
			r#"{"id":1,"method":"ProcessQuery","params":{"query":"hi"}}"#,
			"\n\n",
			r#"{"id":2,"method":"GetPathSuggestions","params":"~/"}"#,
			"\n",
			r#"{"id":3,"method":"GetStartupArgs"}"#,
			"\n",
		));

		assert_eq!(
			replies,
			vec![
				json!({"id": 1, "result": {"success": false, "error": "echo: hi"}}),
				json!({"id": 2, "result": {"suggestions": ["~/x"], "isPath": true}}),
				json!({"id": 3, "result": ["ocr"]}),
			]
		);
	}

	#[test]
	fn failures_become_error_replies() {
		let replies = run(concat!(
			"not json\n",
			r#"{"id":4,"method":"GetMonitors"}"#,
			"\n",
			r#"{"id":5,"method":"GetServicePathSuggestions","params":{"service":"ocr","partial":""}}"#,
			"\n",
		));

		assert_eq!(replies[0]["id"], 0);
		assert!(replies[0]["error"].as_str().unwrap().starts_with("malformed request"));
		assert_eq!(replies[1], json!({"id": 4, "error": "unknown method 'GetMonitors'"}));
		assert_eq!(replies[2], json!({"id": 5, "error": "ocr has no files"}));
	}

	#[test]
	fn undecodable_bytes_do_not_stop_the_server() {
		let mut input = b"\xff\xfe garbage\n".to_vec();
		input.extend_from_slice(br#"{"id":2,"method":"GetStartupArgs"}"#);
		input.push(b'\n');

		let replies = run(input);
		assert_eq!(replies.len(), 2);
		assert_eq!(replies[0]["id"], 0);
		assert!(replies[0]["error"].as_str().unwrap().starts_with("malformed request"));
		assert_eq!(replies[1], json!({"id": 2, "result": ["ocr"]}));
	}
}
