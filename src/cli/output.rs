use std::io::Write;

use anyhow::Result;
use aoiler_protocol::{AutoCompleteResult, QueryResponse};
use aoiler_tui::present::{Tone, present_response};

use super::OutputFormat;

/// Plain-text rendering of a query response: the headline, then its card.
pub(crate) fn format_response_plain(response: &QueryResponse) -> String {
	let presentation = present_response(response);
	let mut lines = vec![presentation.headline.clone()];
	if let Some(card) = &presentation.card {
		let body = card
			.body
			.as_deref()
			.filter(|body| *body != presentation.headline);
		// A failure card with nothing beyond the headline is left out.
		if card.tone != Tone::Error || body.is_some() || !card.fields.is_empty() {
			lines.push(String::new());
			lines.push(card.title.clone());
			lines.extend(
				card.fields
					.iter()
					.map(|(label, value)| format!("{label}: {value}")),
			);
			lines.extend(body.into_iter().flat_map(str::lines).map(str::to_string));
		}
	}
	lines.join("\n")
}

pub(crate) fn print_response(
	out: &mut impl Write,
	response: &QueryResponse,
	format: OutputFormat,
) -> Result<()> {
	match format {
		OutputFormat::Plain => writeln!(out, "{}", format_response_plain(response))?,
		OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(response)?)?,
	}
	Ok(())
}

pub(crate) fn print_suggestions(
	out: &mut impl Write,
	result: &AutoCompleteResult,
	format: OutputFormat,
) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			for suggestion in &result.suggestions {
				writeln!(out, "{suggestion}")?;
			}
		}
		OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(result)?)?,
	}
	Ok(())
}
