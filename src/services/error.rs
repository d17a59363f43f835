use std::io;
use std::path::PathBuf;

use aoiler_protocol::ProtocolError;
use thiserror::Error;

/// Reasons a service could not complete a query.
///
/// The host reports every variant to the frontend as a `success: false`
/// response carrying the display text.
#[derive(Debug, Error)]
pub enum ServiceError {
	#[error("no file path found in query")]
	NoPath,

	#[error("no input file found in query")]
	NoInputFile,

	#[error("no target format specified")]
	NoTargetFormat,

	#[error("{path} is already a {format} file")]
	SameFormat { path: String, format: String },

	#[error("unsupported file type: {0}")]
	UnsupportedFileType(String),

	#[error("image file not found: {}", .0.display())]
	ImageNotFound(PathBuf),

	#[error("`{tool}` is not installed or not on PATH")]
	MissingTool { tool: String },

	#[error("failed to run {tool}: {source}")]
	Spawn {
		tool: String,
		#[source]
		source: io::Error,
	},

	#[error("{tool} failed: {output}")]
	ToolFailed { tool: String, output: String },

	#[error("no text detected")]
	NoTextDetected,

	#[error("LLM API key not configured. Please set LLM_API_KEY environment variable.")]
	LlmNotConfigured,

	#[error("LLM request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("unexpected LLM response: {0}")]
	LlmResponse(String),

	#[error("failed to encode result: {0}")]
	Encode(#[from] ProtocolError),

	#[error(transparent)]
	Io(#[from] io::Error),
}
