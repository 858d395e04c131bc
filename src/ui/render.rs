use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{App, Focus};
use crate::tui::components::{PickerProps, RenderContext};

const HEADER: &str = "Home Screen";
const HINTS: &str = "Tab focus  Ctrl+S submit  Ctrl+↑/↓ snap sheet  Ctrl+R refresh  Esc quit";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let screen = frame.area();
		let area = screen.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let [header, buttons, picker, _, hints] = Layout::vertical([
			Constraint::Length(2),
			Constraint::Length(3),
			Constraint::Length(self.inline.height() + 1),
			Constraint::Min(0),
			Constraint::Length(1),
		])
		.areas(area);

		frame.render_widget(
			Paragraph::new(Span::styled(
				HEADER,
				self.theme.header.add_modifier(Modifier::BOLD),
			)),
			header,
		);
		self.render_buttons(frame, buttons);
		frame.render_widget(
			Paragraph::new(Line::from(Span::styled(HINTS, self.theme.empty))),
			hints,
		);

		let picker_area = Rect {
			y: picker.y + 1,
			height: picker.height.saturating_sub(1),
			..picker
		};
		let inline_ctx = RenderContext {
			props: PickerProps::new(&self.items).refreshing(self.refreshing.is_refreshing()),
			control: Some(&self.form),
			theme: &self.theme,
			throbber_state: &self.throbber_state,
			focused: self.focus == Focus::InlinePicker,
		};
		self.inline.render(frame, picker_area, &inline_ctx);
		self.inline.render_dropdown(frame, screen, &inline_ctx);

		self.sheet_area = self.sheet.area(screen);
		let Some(content) = self.sheet.render(frame, screen, &self.theme) else {
			return;
		};
		let content = content.inner(Margin {
			vertical: 0,
			horizontal: 2,
		});
		let sheet_ctx = RenderContext {
			props: PickerProps::new(&self.items),
			control: Some(&self.form),
			theme: &self.theme,
			throbber_state: &self.throbber_state,
			focused: self.focus == Focus::SheetPicker,
		};
		let height = self.sheet_picker.height().min(content.height);
		let sheet_picker_area = Rect {
			y: content.y + u16::from(content.height > height),
			height,
			..content
		};
		self.sheet_picker.render(frame, sheet_picker_area, &sheet_ctx);
		self.sheet_picker.render_dropdown(frame, content, &sheet_ctx);
	}

	fn render_buttons(&mut self, frame: &mut Frame, area: Rect) {
		let [open, _, close, _] = Layout::horizontal([
			Constraint::Length(self.open_button.width()),
			Constraint::Length(2),
			Constraint::Length(self.close_button.width()),
			Constraint::Min(0),
		])
		.areas(area);
		self.open_button
			.render(frame, open, &self.theme, self.focus == Focus::OpenButton);
		self.close_button
			.render(frame, close, &self.theme, self.focus == Focus::CloseButton);
	}
}
