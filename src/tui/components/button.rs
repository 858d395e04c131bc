//! Single-line push button.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::scrollbar::point_in_rect;
use crate::tui::style::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
	title: String,
	area: Option<Rect>,
}

impl Button {
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			area: None,
		}
	}

	#[must_use]
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Width needed to draw the title inside its border.
	#[must_use]
	pub fn width(&self) -> u16 {
		u16::try_from(self.title.width() + 4).unwrap_or(u16::MAX)
	}

	/// Whether the last rendered button covers the given cell.
	#[must_use]
	pub fn contains(&self, column: u16, row: u16) -> bool {
		self.area.is_some_and(|area| point_in_rect(column, row, area))
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
		let mut style = theme.border_style(focused);
		if focused {
			style = style.add_modifier(Modifier::REVERSED);
		}
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_style(focused));
		let paragraph = Paragraph::new(self.title.as_str())
			.alignment(Alignment::Center)
			.style(style)
			.block(block);
		frame.render_widget(paragraph, area);
		self.area = Some(area);
	}
}
