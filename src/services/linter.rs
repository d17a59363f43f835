use std::ffi::OsStr;

use aoiler_protocol::LinterResult;

use super::ServiceError;
use super::command::run_tool;
use super::paths::{expand_home, extension_of, extract_path};

/// Extensions that have a formatter.
pub const EXTENSIONS: &[&str] = &["py", "go", "sh", "js", "ts", "jsx", "tsx", "rs"];

/// Formatter program and leading arguments for a file extension.
fn formatter_for(extension: &str) -> Option<(&'static str, &'static [&'static str])> {
	let formatter: (&'static str, &'static [&'static str]) = match extension {
		"py" => ("black", &[]),
		"go" => ("gofmt", &["-w"]),
		"sh" => ("shfmt", &["-w"]),
		"js" | "ts" | "jsx" | "tsx" => ("prettier", &["--write"]),
		"rs" => ("rustfmt", &[]),
		_ => return None,
	};
	Some(formatter)
}

/// Format the file named in `query` in place.
///
/// A formatter that runs but exits unsuccessfully is reported as a
/// successful query with `fixed == false` so its diagnostics reach the user.
pub fn format(query: &str) -> Result<LinterResult, ServiceError> {
	let file_path = extract_path(query).ok_or(ServiceError::NoPath)?;
	let extension = extension_of(&file_path).unwrap_or_default();
	let (program, args) = formatter_for(&extension).ok_or_else(|| {
		ServiceError::UnsupportedFileType(if extension.is_empty() {
			file_path.clone()
		} else {
			format!(".{extension}")
		})
	})?;

	let path = expand_home(&file_path);
	let mut argv: Vec<&OsStr> = args.iter().map(OsStr::new).collect();
	argv.push(path.as_os_str());
	let run = run_tool(program, argv)?;

	let output = run.output.trim().to_string();
	Ok(LinterResult {
		fixed: run.success,
		file_path,
		output: (!output.is_empty()).then_some(output),
	})
}
