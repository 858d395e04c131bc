use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

use dropsheet::logging::LogConfig;
use dropsheet::tui::components::sheet::{DEFAULT_INITIAL_INDEX, DEFAULT_SNAP_POINTS};
use dropsheet::tui::style;
use dropsheet::ui::{ScreenConfig, default_picker_options};

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod picker;
mod screen;

use picker::PickerSection;
use screen::{LogSection, ProviderSection, SheetSection, UiSection};

const DEFAULT_THEME: &str = "slate";
const DEFAULT_LATENCY_MS: u64 = 600;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	picker: PickerSection,
	sheet: SheetSection,
	provider: ProviderSection,
	ui: UiSection,
	log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.picker.apply_cli_overrides(cli);
		self.sheet.apply_cli_overrides(cli);
		self.provider.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.log.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			page_size: detect_source(
				cli.page_size.is_some(),
				self.picker.page_size.is_some(),
				"DROPSHEET__PICKER__PAGE_SIZE",
				"--page-size",
				"picker.page_size",
			),
			dropdown_height: detect_source(
				cli.dropdown_height.is_some(),
				self.picker.dropdown_height.is_some(),
				"DROPSHEET__PICKER__DROPDOWN_HEIGHT",
				"--dropdown-height",
				"picker.dropdown_height",
			),
			snap_points: detect_source(
				cli.snap_points.is_some(),
				self.sheet.snap_points.is_some(),
				"DROPSHEET__SHEET__SNAP_POINTS",
				"--snap-points",
				"sheet.snap_points",
			),
			initial_index: detect_source(
				cli.initial_index.is_some(),
				self.sheet.initial_index.is_some(),
				"DROPSHEET__SHEET__INITIAL_INDEX",
				"--initial-index",
				"sheet.initial_index",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"DROPSHEET__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let picker = self.picker.resolve(default_picker_options());
		let theme_name = self.ui.theme.unwrap_or_else(|| DEFAULT_THEME.to_owned());
		let screen = ScreenConfig {
			picker,
			snap_points: self
				.sheet
				.snap_points
				.unwrap_or_else(|| DEFAULT_SNAP_POINTS.to_vec()),
			initial_index: self.sheet.initial_index.unwrap_or(DEFAULT_INITIAL_INDEX),
			latency: Duration::from_millis(
				self.provider.latency_ms.unwrap_or(DEFAULT_LATENCY_MS),
			),
			theme: style::default_theme(),
		};
		let defaults = LogConfig::default();
		let log = LogConfig {
			enabled: self.log.enabled.unwrap_or(defaults.enabled),
			level: self.log.level.unwrap_or(defaults.level),
			file: self.log.file,
		};

		let mut config = ResolvedConfig {
			screen,
			theme_name,
			items: self.provider.items,
			log,
		};

		config.validate(&sources).map_err(Error::new)?;

		if let Some(theme) = style::by_name(&config.theme_name) {
			config.screen.theme = theme;
		}

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
