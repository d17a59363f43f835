use aoiler_protocol::ServiceKind;

use crate::services::normalized_words;

/// Ordered keyword rules; the first rule with a matching phrase wins.
const RULES: &[(ServiceKind, &[&str])] = &[
	(
		ServiceKind::Ocr,
		&[
			"ocr",
			"extract text",
			"text from",
			"read text",
			"screenshot",
			"grab text",
		],
	),
	(ServiceKind::Converter, &["convert", "transcode", "conversion"]),
	(
		ServiceKind::Linter,
		&["format", "lint", "prettify", "beautify", "reformat"],
	),
	(
		ServiceKind::Organizer,
		&[
			"organize", "organise", "tidy", "sort", "declutter", "clean up", "cleanup",
		],
	),
	(
		ServiceKind::FileSearch,
		&["where", "find", "locate", "search", "path to", "path of", "look for"],
	),
];

/// Pick the service that should handle a free-text query.
///
/// Anything no rule claims goes to the assistant.
pub fn classify(query: &str) -> ServiceKind {
	let words = normalized_words(query);
	let padded = format!(" {} ", words.join(" "));

	let turn_into = words.iter().any(|word| word == "turn") && words.iter().any(|word| word == "into");

	for (kind, phrases) in RULES {
		if *kind == ServiceKind::Converter && turn_into {
			return *kind;
		}
		if phrases
			.iter()
			.any(|phrase| padded.contains(&format!(" {phrase} ")))
		{
			return *kind;
		}
	}
	ServiceKind::Llm
}
