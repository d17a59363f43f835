use std::ffi::OsStr;
use std::io;
use std::process::Command;

use tracing::debug;

use super::ServiceError;

/// Captured result of an external tool run.
#[derive(Debug)]
pub(crate) struct ToolOutput {
	pub(crate) success: bool,
	/// stdout followed by stderr.
	pub(crate) output: String,
}

impl ToolOutput {
	/// Convert a failed run into [`ServiceError::ToolFailed`].
	pub(crate) fn into_success(self, tool: &str) -> Result<String, ServiceError> {
		if self.success {
			Ok(self.output)
		} else {
			Err(ServiceError::ToolFailed {
				tool: tool.to_string(),
				output: self.output.trim().to_string(),
			})
		}
	}
}

/// Run `program` to completion and capture its combined output.
pub(crate) fn run_tool<I, S>(program: impl AsRef<OsStr>, args: I) -> Result<ToolOutput, ServiceError>
where
	I: IntoIterator<Item = S>,
	S: AsRef<OsStr>,
{
	let program = program.as_ref();
	let tool = program.to_string_lossy().into_owned();
	let mut command = Command::new(program);
	command.args(args);
	debug!(?command, "running external tool");

	let output = command.output().map_err(|source| match source.kind() {
		io::ErrorKind::NotFound => ServiceError::MissingTool { tool: tool.clone() },
		_ => ServiceError::Spawn {
			tool: tool.clone(),
			source,
		},
	})?;

	let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
	combined.push_str(&String::from_utf8_lossy(&output.stderr));
	debug!(tool = %tool, status = %output.status, "external tool finished");

	Ok(ToolOutput {
		success: output.status.success(),
		output: combined,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_binaries_are_reported_by_name() {
		let err = run_tool("aoiler-definitely-not-installed", ["--help"]).unwrap_err();
		assert!(matches!(
			err,
			ServiceError::MissingTool { ref tool } if tool == "aoiler-definitely-not-installed"
		));
	}

	#[cfg(unix)]
	#[test]
	fn output_combines_streams_and_status() {
		let run = run_tool("sh", ["-c", "echo out; echo err >&2; exit 3"]).unwrap();
		assert!(!run.success);
		assert!(run.output.contains("out"));
		assert!(run.output.contains("err"));

		let err = run.into_success("sh").unwrap_err();
		assert!(err.to_string().starts_with("sh failed:"));
	}
}
