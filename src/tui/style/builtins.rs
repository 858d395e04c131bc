use ratatui::style::{Color, Modifier, Style};

use super::{Theme, ThemeRegistration};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Red),
	disabled: Style::new().fg(Color::Rgb(163, 163, 163)),
	sheet: Style::new().bg(Color::Rgb(124, 115, 192)),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(212, 212, 212))
		.fg(Color::Rgb(38, 38, 38)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(163, 163, 163)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(185, 28, 28)),
	disabled: Style::new().fg(Color::Rgb(163, 163, 163)),
	sheet: Style::new().bg(Color::Rgb(196, 191, 232)),
};

pub(super) const REGISTRATIONS: &[ThemeRegistration] = &[
	ThemeRegistration {
		name: "slate",
		aliases: &["dark", "default"],
		theme: SLATE,
	},
	ThemeRegistration {
		name: "light",
		aliases: &["day"],
		theme: LIGHT,
	},
];
