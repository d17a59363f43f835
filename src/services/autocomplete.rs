//! Filesystem completion for the path-like part of partial input.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use aoiler_protocol::{AutoCompleteResult, ServiceKind};
use tracing::trace;

use super::paths::{expand_home_with, extension_of, home_dir};
use super::{converter, linter, ocr};

pub const DEFAULT_LIMIT: usize = 20;

#[derive(Debug, Clone)]
pub struct AutocompleteOptions {
	/// Maximum number of suggestions returned per lookup.
	pub limit: usize,
}

impl Default for AutocompleteOptions {
	fn default() -> Self {
		Self {
			limit: DEFAULT_LIMIT,
		}
	}
}

/// Whether `input` looks like it is being used to type a path.
pub fn is_path_like(input: &str) -> bool {
	input.contains('/') || input.contains('~') || input.starts_with('.')
}

/// The token of `input` that should be completed.
///
/// Input that itself starts like a path is used whole; otherwise the last
/// whitespace separated word that looks like a path.
fn path_part(input: &str) -> Option<&str> {
	if ["/", "~", "./", "../"]
		.iter()
		.any(|prefix| input.starts_with(prefix))
	{
		return Some(input);
	}
	input
		.split_whitespace()
		.rev()
		.find(|word| word.contains('/') || word.contains('~') || word.starts_with('.'))
}

/// Extensions a service accepts; `None` means every file.
fn extensions_for(service: ServiceKind) -> Option<&'static [&'static str]> {
	match service {
		ServiceKind::Linter => Some(linter::EXTENSIONS),
		ServiceKind::Ocr => Some(ocr::IMAGE_EXTENSIONS),
		ServiceKind::Converter => Some(converter::FORMATS),
		ServiceKind::Organizer | ServiceKind::FileSearch | ServiceKind::Llm => None,
	}
}

/// Lists directory entries matching a partially typed path.
#[derive(Debug, Clone)]
pub struct PathCompleter {
	limit: usize,
	base: PathBuf,
	home: Option<PathBuf>,
}

impl PathCompleter {
	pub fn new(options: AutocompleteOptions) -> Self {
		Self {
			limit: options.limit,
			base: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
			home: home_dir(),
		}
	}

	/// Resolve relative partials against `base` instead of the working directory.
	#[must_use]
	pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
		self.base = base.into();
		self
	}

	#[must_use]
	pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
		self.home = home;
		self
	}

	/// `GetPathSuggestions`: completions for the path-like part of `input`.
	pub fn suggest(&self, input: &str) -> io::Result<AutoCompleteResult> {
		if !is_path_like(input) {
			return Ok(AutoCompleteResult::not_a_path());
		}
		let Some(partial) = path_part(input) else {
			return Ok(AutoCompleteResult::not_a_path());
		};
		self.complete(partial, None).map(AutoCompleteResult::paths)
	}

	/// `GetServicePathSuggestions`: always completes, narrowed to what `service` accepts.
	pub fn suggest_for(&self, service: ServiceKind, input: &str) -> io::Result<AutoCompleteResult> {
		if matches!(service, ServiceKind::FileSearch | ServiceKind::Llm) {
			return self.suggest(input);
		}

		let partial = match path_part(input) {
			Some(part) => part,
			None if input.ends_with(char::is_whitespace) => "",
			None => input.split_whitespace().last().unwrap_or_default(),
		};
		let partial = if partial.is_empty() { "./" } else { partial };
		self.complete(partial, extensions_for(service))
			.map(AutoCompleteResult::paths)
	}

	fn complete(&self, partial: &str, extensions: Option<&[&str]>) -> io::Result<Vec<String>> {
		let (mut typed_dir, mut prefix) = match partial.rfind('/') {
			Some(index) => (&partial[..=index], &partial[index + 1..]),
			None if partial == "~" => ("~/", ""),
			None => ("", partial),
		};

		let mut dir = self.resolve_dir(typed_dir);
		if !dir.is_dir() {
			trace!(dir = %dir.display(), "completion directory missing");
			dir = self.base.clone();
			typed_dir = "";
			prefix = partial;
		}

		let wanted = prefix.to_lowercase();
		let show_hidden = prefix.starts_with('.');
		let mut matches = Vec::new();
		for entry in fs::read_dir(&dir)? {
			let entry = entry?;
			let name = entry.file_name().to_string_lossy().into_owned();
			if name.starts_with('.') && !show_hidden {
				continue;
			}
			if !name.to_lowercase().starts_with(&wanted) {
				continue;
			}
			let is_dir = fs::metadata(entry.path())
				.map(|meta| meta.is_dir())
				.unwrap_or(false);
			if !is_dir
				&& let Some(extensions) = extensions
				&& !extension_of(&name).is_some_and(|ext| extensions.contains(&ext.as_str()))
			{
				continue;
			}
			matches.push((name, is_dir));
		}

		matches.sort_by(|a, b| a.0.cmp(&b.0));
		Ok(matches
			.into_iter()
			.take(self.limit)
			.map(|(name, is_dir)| {
				let slash = if is_dir { "/" } else { "" };
				format!("{typed_dir}{name}{slash}")
			})
			.collect())
	}

	fn resolve_dir(&self, typed_dir: &str) -> PathBuf {
		if typed_dir.is_empty() {
			return self.base.clone();
		}
		let expanded = expand_home_with(typed_dir, self.home.as_deref());
		if expanded.is_absolute() {
			expanded
		} else {
			self.base.join(expanded)
		}
	}
}
