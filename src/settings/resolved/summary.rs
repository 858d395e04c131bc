use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	let picker = &config.screen.picker;
	println!("Effective configuration:");
	match &config.items {
		Some(path) => println!("  Items: {}", path.display()),
		None => println!("  Items: (built-in cities)"),
	}
	println!("  Field: {}", picker.field_name);
	if let Some(label) = &picker.label {
		println!("  Label: {label}");
	}
	println!("  Placeholder: {}", picker.placeholder);
	println!("  Search placeholder: {:?}", picker.search_placeholder);
	println!("  Required: {}", bool_to_word(picker.required));
	println!("  Searchable: {}", bool_to_word(picker.searchable));
	println!(
		"  Local search: {}",
		bool_to_word(!picker.disable_local_search)
	);
	println!("  Multiple: {}", bool_to_word(picker.multiple));
	println!("  Error line: {}", bool_to_word(picker.show_error_line));
	println!("  Debounce: {} ms", picker.tuning.debounce.as_millis());
	println!("  Page size: {}", picker.tuning.page_size);
	println!("  Dropdown height: {}", picker.dropdown_height);
	let points: Vec<String> = config
		.screen
		.snap_points
		.iter()
		.map(|point| format!("{point}%"))
		.collect();
	println!("  Snap points: {}", points.join(", "));
	println!("  Initial index: {}", config.screen.initial_index);
	println!("  Provider latency: {} ms", config.screen.latency.as_millis());
	println!("  UI theme: {}", config.theme_name);
	if config.log.enabled {
		println!("  Log level: {}", config.log.level);
		match config.log.log_path() {
			Ok(path) => println!("  Log file: {}", path.display()),
			Err(err) => println!("  Log file: unavailable ({err})"),
		}
	} else {
		println!("  Logging: no");
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use dropsheet::logging::LogConfig;
	use dropsheet::ui::ScreenConfig;

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			screen: ScreenConfig::default(),
			theme_name: "light".into(),
			items: Some(PathBuf::from("/tmp/items.json")),
			log: LogConfig {
				enabled: true,
				level: "debug".into(),
				file: Some(PathBuf::from("/tmp/dropsheet.log")),
			},
		};

		print_summary(&config);
	}
}
