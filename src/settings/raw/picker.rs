use std::time::Duration;

use serde::Deserialize;

use dropsheet::picker::SearchTuning;
use dropsheet::tui::components::PickerOptions;

use crate::cli::CliArgs;

/// Picker options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PickerSection {
	pub(super) label: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) search_placeholder: Option<String>,
	pub(super) required: Option<bool>,
	pub(super) searchable: Option<bool>,
	pub(super) disable_local_search: Option<bool>,
	pub(super) multiple: Option<bool>,
	pub(super) show_error_line: Option<bool>,
	pub(super) debounce_ms: Option<u64>,
	pub(super) page_size: Option<usize>,
	pub(super) dropdown_height: Option<u16>,
}

impl PickerSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(label) = cli.label.clone() {
			self.label = Some(label);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
		if let Some(placeholder) = cli.search_placeholder.clone() {
			self.search_placeholder = Some(placeholder);
		}
		if let Some(value) = cli.required {
			self.required = Some(value);
		}
		if let Some(value) = cli.searchable {
			self.searchable = Some(value);
		}
		if let Some(value) = cli.disable_local_search {
			self.disable_local_search = Some(value);
		}
		if let Some(value) = cli.multiple {
			self.multiple = Some(value);
		}
		if let Some(value) = cli.show_error_line {
			self.show_error_line = Some(value);
		}
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
		if let Some(value) = cli.page_size {
			self.page_size = Some(value);
		}
		if let Some(value) = cli.dropdown_height {
			self.dropdown_height = Some(value);
		}
	}

	/// Layer the configured values over `base`.
	pub(super) fn resolve(self, base: PickerOptions) -> PickerOptions {
		let tuning = SearchTuning {
			debounce: self
				.debounce_ms
				.map(Duration::from_millis)
				.unwrap_or(base.tuning.debounce),
			page_size: self.page_size.unwrap_or(base.tuning.page_size),
		};

		PickerOptions {
			label: self.label.or(base.label),
			placeholder: self.placeholder.unwrap_or(base.placeholder),
			search_placeholder: self
				.search_placeholder
				.unwrap_or(base.search_placeholder),
			required: self.required.unwrap_or(base.required),
			searchable: self.searchable.unwrap_or(base.searchable),
			disable_local_search: self
				.disable_local_search
				.unwrap_or(base.disable_local_search),
			multiple: self.multiple.unwrap_or(base.multiple),
			show_error_line: self.show_error_line.unwrap_or(base.show_error_line),
			dropdown_height: self.dropdown_height.unwrap_or(base.dropdown_height),
			tuning,
			..base
		}
	}
}
