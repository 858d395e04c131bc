use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// Bottom sheet geometry before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SheetSection {
	pub(super) snap_points: Option<Vec<u16>>,
	pub(super) initial_index: Option<usize>,
}

impl SheetSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(points) = &cli.snap_points {
			self.snap_points = Some(points.clone());
		}
		if let Some(index) = cli.initial_index {
			self.initial_index = Some(index);
		}
	}
}

/// Where items come from and how slowly they arrive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ProviderSection {
	pub(super) items: Option<PathBuf>,
	pub(super) latency_ms: Option<u64>,
}

impl ProviderSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.items.clone() {
			self.items = Some(path);
		}
		if let Some(latency) = cli.latency_ms {
			self.latency_ms = Some(latency);
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) enabled: Option<bool>,
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.no_log {
			self.enabled = Some(false);
		}
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}
}
