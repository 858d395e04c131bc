//! Visual styling for the picker and the demo screen.
//!
//! Themes are plain colour tables. Built-in themes are looked up by name or
//! alias, case-insensitively.

mod builtins;

use ratatui::style::{Color, Modifier, Style};

pub use builtins::{LIGHT, SLATE};

/// Colours applied across the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Titles, borders and the focused control.
	pub header: Style,
	/// Highlighted row of an open list.
	pub row_highlight: Style,
	/// Search prompt and field labels.
	pub prompt: Style,
	/// Placeholders, hints and the error-line filler.
	pub empty: Style,
	/// Rows matching the bound value.
	pub highlight: Style,
	/// Validation errors and the required marker.
	pub error: Style,
	/// Text of a disabled picker.
	pub disabled: Style,
	/// Background of the bottom sheet.
	pub sheet: Style,
}

impl Theme {
	#[must_use]
	pub fn border_style(&self, focused: bool) -> Style {
		if focused {
			Style::new()
				.fg(self.highlight.fg.unwrap_or(Color::Reset))
				.add_modifier(Modifier::BOLD)
		} else {
			Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
		}
	}

	#[must_use]
	pub fn text_style(&self, disabled: bool) -> Style {
		if disabled { self.disabled } else { Style::new() }
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// A built-in theme with its lookup names.
#[derive(Debug, Clone, Copy)]
pub struct ThemeRegistration {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub theme: Theme,
}

/// Theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Return the themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeRegistration] {
	builtins::REGISTRATIONS
}

/// Canonical names of the bundled themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtin_themes().iter().map(|entry| entry.name).collect()
}

/// Look up a theme by name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim();
	builtin_themes()
		.iter()
		.find(|entry| {
			entry.name.eq_ignore_ascii_case(wanted)
				|| entry
					.aliases
					.iter()
					.any(|alias| alias.eq_ignore_ascii_case(wanted))
		})
		.map(|entry| entry.theme)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_accepts_aliases_and_case() {
		assert_eq!(by_name("SLATE"), Some(SLATE));
		assert_eq!(by_name(" day "), Some(LIGHT));
		assert_eq!(by_name("neon"), None);
	}

	#[test]
	fn names_are_canonical() {
		assert_eq!(names(), vec!["slate", "light"]);
	}
}
