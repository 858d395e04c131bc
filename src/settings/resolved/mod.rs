use std::path::PathBuf;

use dropsheet::logging::LogConfig;
use dropsheet::ui::ScreenConfig;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub screen: ScreenConfig,
	/// Name the theme was selected by.
	pub theme_name: String,
	/// Item file replacing the built-in city list.
	pub items: Option<PathBuf>,
	pub log: LogConfig,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
