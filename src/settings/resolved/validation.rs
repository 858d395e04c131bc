use dropsheet::tui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Smallest open list that still shows the search row and one item.
const MIN_DROPDOWN_HEIGHT: u16 = 3;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let picker = &config.screen.picker;

	if picker.tuning.page_size == 0 {
		return Err(ConfigError::invalid(
			"picker.page_size",
			"0",
			sources.source_for_page_size(),
			"must be greater than zero",
		));
	}

	if picker.dropdown_height < MIN_DROPDOWN_HEIGHT {
		return Err(ConfigError::invalid(
			"picker.dropdown_height",
			picker.dropdown_height.to_string(),
			sources.source_for_dropdown_height(),
			format!("must be at least {MIN_DROPDOWN_HEIGHT}"),
		));
	}

	let points = &config.screen.snap_points;
	if points.is_empty() {
		return Err(ConfigError::invalid(
			"sheet.snap_points",
			"[]",
			sources.source_for_snap_points(),
			"must name at least one height",
		));
	}

	if let Some(point) = points.iter().find(|point| !(1..=100).contains(*point)) {
		return Err(ConfigError::invalid(
			"sheet.snap_points",
			point.to_string(),
			sources.source_for_snap_points(),
			"must be between 1 and 100 percent",
		));
	}

	if config.screen.initial_index >= points.len() {
		return Err(ConfigError::invalid(
			"sheet.initial_index",
			config.screen.initial_index.to_string(),
			sources.source_for_initial_index(),
			format!("must be below the number of snap points ({})", points.len()),
		));
	}

	if style::by_name(&config.theme_name).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme_name.clone(),
			sources.source_for_theme(),
			format!("expected one of: {}", style::names().join(", ")),
		));
	}

	Ok(())
}
