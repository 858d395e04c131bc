//! Single-line search input built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Text input used for the picker's search keyword.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	pub fn new(placeholder: impl Into<String>) -> Self {
		let mut textarea = TextArea::default();
		textarea.set_placeholder_text(placeholder);
		textarea.set_cursor_line_style(Style::default());
		Self { textarea }
	}

	/// Feed a key press. Returns `true` when the text changed.
	///
	/// Keys that would break the single-line invariant are ignored.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Enter | KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
				false
			}
			KeyCode::Char('m' | 'j') if key.modifiers.contains(KeyModifiers::CONTROL) => false,
			_ => self.textarea.input(key),
		}
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	pub fn clear(&mut self) {
		self.textarea.select_all();
		self.textarea.cut();
	}

	pub fn set_style(&mut self, text: Style, placeholder: Style) {
		self.textarea.set_style(text);
		self.textarea.set_placeholder_style(placeholder);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_updates_text() {
		let mut input = QueryInput::new("Search ");
		assert!(input.input(key(KeyCode::Char('o'))));
		assert!(input.input(key(KeyCode::Char('s'))));
		assert_eq!(input.text(), "os");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "o");
	}

	#[test]
	fn enter_keeps_a_single_line() {
		let mut input = QueryInput::default();
		input.input(key(KeyCode::Char('a')));
		assert!(!input.input(key(KeyCode::Enter)));
		assert_eq!(input.text(), "a");
	}

	#[test]
	fn clear_empties_the_input() {
		let mut input = QueryInput::default();
		input.input(key(KeyCode::Char('a')));
		input.clear();
		assert_eq!(input.text(), "");
	}
}
