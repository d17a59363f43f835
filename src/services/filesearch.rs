use std::path::{Path, PathBuf};

use aoiler_protocol::{EntryKind, FileSearchResult};
use ignore::WalkBuilder;
use tracing::{debug, trace};

use super::paths::{home_dir, normalized_words};

/// Words that carry no information about the file being looked for.
const STOPWORDS: &[&str] = &[
	"where", "is", "my", "the", "a", "find", "search", "for", "file",
];

const EXACT_NAME_SCORE: u32 = 100;
const NAME_PREFIX_SCORE: u32 = 50;
const NAME_CONTAINS_SCORE: u32 = 25;
const PATH_CONTAINS_SCORE: u32 = 10;

/// Options controlling where and how deep the file search walks.
#[derive(Debug, Clone)]
pub struct SearchOptions {
	pub roots: Vec<PathBuf>,
	pub max_depth: Option<usize>,
	pub include_hidden: bool,
	pub follow_symlinks: bool,
}

impl Default for SearchOptions {
	fn default() -> Self {
		Self {
			roots: home_dir()
				.map(|home| vec![home.join(".config")])
				.unwrap_or_default(),
			max_depth: None,
			include_hidden: true,
			follow_symlinks: false,
		}
	}
}

/// Locates the configuration file or directory a query describes.
#[derive(Debug, Clone)]
pub struct FileSearch {
	options: SearchOptions,
}

impl FileSearch {
	pub fn new(options: SearchOptions) -> Self {
		Self { options }
	}

	/// Return the best scoring entry whose path contains every search term.
	pub fn search(&self, query: &str) -> FileSearchResult {
		let terms = search_terms(query);
		if terms.is_empty() || self.options.roots.is_empty() {
			debug!(query, "file search has nothing to look for");
			return FileSearchResult::not_found();
		}

		let mut best: Option<(u32, PathBuf)> = None;
		for entry in self.walker().build().flatten() {
			let Some(score) = score_path(entry.path(), &terms) else {
				continue;
			};
			if best.as_ref().is_none_or(|(best_score, _)| score > *best_score) {
				trace!(path = %entry.path().display(), score, "new best match");
				best = Some((score, entry.into_path()));
			}
		}

		match best {
			Some((_, path)) => {
				let kind = if path.is_dir() {
					EntryKind::Directory
				} else {
					EntryKind::File
				};
				FileSearchResult::found(path.display().to_string(), kind)
			}
			None => FileSearchResult::not_found(),
		}
	}

	fn walker(&self) -> WalkBuilder {
		let mut roots = self.options.roots.iter();
		let mut builder = match roots.next() {
			Some(first) => WalkBuilder::new(first),
			None => WalkBuilder::new("."),
		};
		for root in roots {
			builder.add(root);
		}
		builder
			.standard_filters(false)
			.hidden(!self.options.include_hidden)
			.follow_links(self.options.follow_symlinks)
			.max_depth(self.options.max_depth)
			.sort_by_file_name(|a, b| a.cmp(b));
		builder
	}
}

/// Informative lowercased words of a query.
pub(crate) fn search_terms(query: &str) -> Vec<String> {
	normalized_words(query)
		.into_iter()
		.filter(|word| word.chars().count() > 2 && !STOPWORDS.contains(&word.as_str()))
		.collect()
}

/// Score `path` against `terms`; `None` unless every term occurs in the path.
fn score_path(path: &Path, terms: &[String]) -> Option<u32> {
	let name = path.file_name()?.to_string_lossy().to_lowercase();
	let full = path.to_string_lossy().to_lowercase();

	let mut score = 0;
	for term in terms {
		if !full.contains(term.as_str()) {
			return None;
		}
		score += if name == *term || name == format!("{term}.conf") || name == format!("{term}.config")
		{
			EXACT_NAME_SCORE
		} else if name.starts_with(term.as_str()) {
			NAME_PREFIX_SCORE
		} else if name.contains(term.as_str()) {
			NAME_CONTAINS_SCORE
		} else {
			PATH_CONTAINS_SCORE
		};
	}
	Some(score)
}
