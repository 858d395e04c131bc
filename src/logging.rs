//! Tracing setup.
//!
//! The terminal belongs to the UI while the app runs, so events go to a log
//! file instead of stderr. `RUST_LOG` overrides the configured level.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// File name used inside the data directory when no log file is configured.
pub const LOG_FILE_NAME: &str = "dropsheet.log";

/// Logging options after configuration has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
	pub enabled: bool,
	pub level: String,
	pub file: Option<PathBuf>,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			level: "info".to_owned(),
			file: None,
		}
	}
}

impl LogConfig {
	/// Where log lines are written.
	pub fn log_path(&self) -> Result<PathBuf> {
		match &self.file {
			Some(path) => Ok(path.clone()),
			None => Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME)),
		}
	}
}

/// Build the event filter, preferring `RUST_LOG` over `level`.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return Ok(filter);
	}
	EnvFilter::try_new(level).map_err(|err| anyhow!("invalid log level '{level}': {err}"))
}

/// Install the global subscriber. Returns the log file path when enabled.
pub fn initialize(config: &LogConfig) -> Result<Option<PathBuf>> {
	if !config.enabled {
		return Ok(None);
	}

	let path = config.log_path()?;
	let file = open_log_file(&path)?;
	let filter = build_filter(&config.level)?;

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.map_err(|err| anyhow!(err))?;

	tracing::debug!(path = %path.display(), "logging initialised");
	Ok(Some(path))
}

fn open_log_file(path: &Path) -> Result<fs::File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn explicit_file_wins_over_data_dir() {
		let config = LogConfig {
			file: Some(PathBuf::from("/tmp/custom.log")),
			..LogConfig::default()
		};
		assert_eq!(
			config.log_path().expect("path"),
			PathBuf::from("/tmp/custom.log")
		);
	}

	#[test]
	fn disabled_logging_installs_nothing() {
		let config = LogConfig {
			enabled: false,
			..LogConfig::default()
		};
		assert_eq!(initialize(&config).expect("no-op"), None);
	}

	#[test]
	fn log_file_is_created_with_parents() {
		let dir = tempfile::tempdir().expect("temp dir");
		let path = dir.path().join("nested").join(LOG_FILE_NAME);
		open_log_file(&path).expect("log file opens");
		assert!(path.exists());
	}

	#[test]
	fn bad_level_is_reported() {
		if std::env::var_os("RUST_LOG").is_some() {
			return;
		}
		assert!(build_filter("debug").is_ok());
		assert!(build_filter("dropsheet=loud").is_err());
	}
}
