use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	let roots: Vec<String> = config
		.search
		.roots
		.iter()
		.map(|root| root.display().to_string())
		.collect();
	println!("  Search roots: {}", roots.join(", "));
	match config.search.max_depth {
		Some(depth) => println!("  Max depth: {depth}"),
		None => println!("  Max depth: unlimited"),
	}
	println!(
		"  Include hidden: {}",
		bool_to_word(config.search.include_hidden)
	);
	println!(
		"  Follow symlinks: {}",
		bool_to_word(config.search.follow_symlinks)
	);
	println!("  Suggestion limit: {}", config.autocomplete.limit);
	println!("  Suggestion delay: {} ms", config.debounce.as_millis());
	println!("  LLM endpoint: {}", config.llm.api_url);
	println!("  LLM model: {}", config.llm.model);
	println!(
		"  LLM API key: {}",
		if config.llm.api_key.is_some() { "set" } else { "not set" }
	);
	println!("  LLM timeout: {}s", config.llm.timeout.as_secs());
	match &config.ocr.script {
		Some(script) => println!("  OCR capture script: {}", script.display()),
		None => println!("  OCR capture script: (none)"),
	}
	println!("  OCR language: {}", config.ocr.language);
	println!("  UI theme: {}", config.theme);
	if let Some(query) = &config.initial_query {
		println!("  Initial query: {query}");
	}
	println!(
		"  Host: {}",
		config.host_command.as_deref().unwrap_or("(in-process)")
	);
	println!("  Log level: {}", config.log_level);
	if let Some(dir) = &config.log_dir {
		println!("  Log directory: {}", dir.display());
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
