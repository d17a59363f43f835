use std::ffi::OsStr;
use std::path::Path;

use aoiler_protocol::ConverterResult;

use super::ServiceError;
use super::command::run_tool;
use super::paths::{expand_home, extension_of, extract_path, normalized_words};

const FFMPEG: &str = "ffmpeg";

/// Formats ffmpeg is asked to produce or read.
pub const FORMATS: &[&str] = &[
	"mp4", "webm", "mkv", "avi", "mov", "mp3", "wav", "flac", "ogg", "m4a", "png", "jpg", "jpeg",
	"gif", "webp",
];

/// Target format named in `query`.
///
/// The word after `to` or `into` wins; otherwise the first known format word
/// that is not the input file itself.
pub(crate) fn target_format(query: &str, input: &str) -> Option<String> {
	let words = normalized_words(query);
	let input_word = input.to_lowercase();

	let after_keyword = words
		.windows(2)
		.find(|pair| matches!(pair[0].as_str(), "to" | "into"))
		.map(|pair| pair[1].trim_start_matches('.').to_string())
		.filter(|word| FORMATS.contains(&word.as_str()));
	if after_keyword.is_some() {
		return after_keyword;
	}

	query
		.split_whitespace()
		.map(|word| word.trim_matches(|c: char| !c.is_alphanumeric() && c != '.' && c != '/'))
		.filter(|word| word.to_lowercase() != input_word)
		.map(|word| word.trim_start_matches('.').to_lowercase())
		.find(|word| FORMATS.contains(&word.as_str()))
}

/// Output path: `input` with its extension replaced by `format`.
pub(crate) fn output_path(input: &str, format: &str) -> String {
	let stem = match Path::new(input).extension() {
		Some(ext) => &input[..input.len() - ext.len() - 1],
		None => input,
	};
	format!("{stem}.{format}")
}

/// Convert the file named in `query` with ffmpeg.
pub fn convert(query: &str) -> Result<ConverterResult, ServiceError> {
	let input = extract_path(query).ok_or(ServiceError::NoInputFile)?;
	let format = target_format(query, &input).ok_or(ServiceError::NoTargetFormat)?;
	if extension_of(&input).as_deref() == Some(format.as_str()) {
		return Err(ServiceError::SameFormat {
			path: input,
			format,
		});
	}

	let output = output_path(&input, &format);
	let input_path = expand_home(&input);
	let output_file = expand_home(&output);
	run_tool(
		FFMPEG,
		[
			OsStr::new("-y"),
			OsStr::new("-i"),
			input_path.as_os_str(),
			output_file.as_os_str(),
		],
	)?
	.into_success(FFMPEG)?;

	Ok(ConverterResult {
		output_path: output,
	})
}
