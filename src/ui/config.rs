use std::time::Duration;

use crate::tui::components::PickerOptions;
use crate::tui::components::sheet::{DEFAULT_INITIAL_INDEX, DEFAULT_SNAP_POINTS};
use crate::tui::style::Theme;

/// Form field both pickers on the demo screen bind to.
pub const CITIES_FIELD: &str = "cities";

/// Everything the demo screen needs besides its item catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
	/// Options shared by the inline and the sheet picker.
	pub picker: PickerOptions,
	pub snap_points: Vec<u16>,
	pub initial_index: usize,
	/// Simulated provider round-trip time.
	pub latency: Duration,
	pub theme: Theme,
}

impl Default for ScreenConfig {
	fn default() -> Self {
		Self {
			picker: default_picker_options(),
			snap_points: DEFAULT_SNAP_POINTS.to_vec(),
			initial_index: DEFAULT_INITIAL_INDEX,
			latency: Duration::from_millis(600),
			theme: Theme::default(),
		}
	}
}

/// Picker options of the demo's `cities` field.
#[must_use]
pub fn default_picker_options() -> PickerOptions {
	PickerOptions {
		field_name: CITIES_FIELD.to_owned(),
		label: Some("City".to_owned()),
		placeholder: "Select city".to_owned(),
		required: true,
		searchable: true,
		show_error_line: true,
		..PickerOptions::default()
	}
}
