use std::ffi::OsStr;

use aoiler_protocol::OrganizerResult;

use super::ServiceError;
use super::command::run_tool;
use super::paths::{expand_home, extract_path, normalized_words};

const KONDO: &str = "kondo";

/// How `kondo` should group the files it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizeMode {
	/// Group by file category (documents, images, ...).
	Category,
	/// Group by similar file names.
	Filename,
}

impl OrganizeMode {
	/// Pick the mode a query asks for.
	pub fn from_query(query: &str) -> Self {
		let by_name = normalized_words(query)
			.iter()
			.any(|word| matches!(word.as_str(), "name" | "names" | "filename" | "filenames"));
		if by_name {
			OrganizeMode::Filename
		} else {
			OrganizeMode::Category
		}
	}

	fn flag(self) -> &'static str {
		match self {
			OrganizeMode::Category => "-c",
			OrganizeMode::Filename => "-f",
		}
	}
}

/// Organize the directory named in `query`, or the working directory.
pub fn organize(query: &str) -> Result<OrganizerResult, ServiceError> {
	let target = extract_path(query).unwrap_or_else(|| ".".to_string());
	let path = expand_home(&target);
	let mode = OrganizeMode::from_query(query);

	let output = run_tool(
		KONDO,
		[OsStr::new(mode.flag()), OsStr::new("-nui"), path.as_os_str()],
	)?
		.into_success(KONDO)?;

	Ok(OrganizerResult {
		output: output.trim_end().to_string(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn filename_mode_is_opt_in() {
		assert_eq!(
			OrganizeMode::from_query("Organize ~/Downloads by category"),
			OrganizeMode::Category
		);
		assert_eq!(
			OrganizeMode::from_query("Organize ~/Downloads by filename"),
			OrganizeMode::Filename
		);
		assert_eq!(
			OrganizeMode::from_query("sort these by name."),
			OrganizeMode::Filename
		);
	}
}
