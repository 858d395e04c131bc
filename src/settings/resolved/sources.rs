use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) page_size: Option<SettingSource>,
	pub(crate) dropdown_height: Option<SettingSource>,
	pub(crate) snap_points: Option<SettingSource>,
	pub(crate) initial_index: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_page_size(&self) -> SettingSource {
		self.page_size
			.clone()
			.unwrap_or(SettingSource::ConfigKey("picker.page_size"))
	}

	pub(crate) fn source_for_dropdown_height(&self) -> SettingSource {
		self.dropdown_height
			.clone()
			.unwrap_or(SettingSource::ConfigKey("picker.dropdown_height"))
	}

	pub(crate) fn source_for_snap_points(&self) -> SettingSource {
		self.snap_points
			.clone()
			.unwrap_or(SettingSource::ConfigKey("sheet.snap_points"))
	}

	pub(crate) fn source_for_initial_index(&self) -> SettingSource {
		self.initial_index
			.clone()
			.unwrap_or(SettingSource::ConfigKey("sheet.initial_index"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}
}
