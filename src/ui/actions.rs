use std::time::Instant;

use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::{debug, info};

use super::FormOutcome;
use super::state::{App, Focus};
use crate::tui::components::PickerProps;
use crate::tui::components::scrollbar::point_in_rect;

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<Option<FormOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('c') if ctrl => return Ok(Some(self.outcome(false))),
			KeyCode::Char('s') if ctrl => return Ok(self.submit()),
			KeyCode::Up if ctrl => {
				self.sheet.snap_up();
				return Ok(None);
			}
			KeyCode::Down if ctrl => {
				self.sheet.snap_down();
				if !self.sheet.is_open() {
					self.close_sheet();
				}
				return Ok(None);
			}
			_ => {}
		}

		if self.route_key_to_picker(key, now) {
			return Ok(None);
		}

		match key.code {
			KeyCode::Tab => self.cycle_focus(true),
			KeyCode::BackTab => self.cycle_focus(false),
			KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
				Focus::OpenButton => self.open_sheet(),
				Focus::CloseButton => self.close_sheet(),
				Focus::InlinePicker | Focus::SheetPicker => {}
			},
			KeyCode::Esc if self.sheet.is_open() => self.close_sheet(),
			KeyCode::Esc => return Ok(Some(self.outcome(false))),
			_ => {}
		}
		Ok(None)
	}

	fn route_key_to_picker(&mut self, key: KeyEvent, now: Instant) -> bool {
		match self.focus {
			Focus::InlinePicker => {
				let props = PickerProps::new(&self.items).refreshing(self.refreshing.is_refreshing());
				self.inline.handle_key(key, &props, Some(&mut self.form), now)
			}
			Focus::SheetPicker if self.sheet.is_open() => {
				let props = PickerProps::new(&self.items);
				self.sheet_picker
					.handle_key(key, &props, Some(&mut self.form), now)
			}
			_ => false,
		}
	}

	/// Validate the form; a valid form ends the session.
	fn submit(&mut self) -> Option<FormOutcome> {
		let field = self.picker_options().field_name.clone();
		if self.form.validate_all() {
			info!("form submitted");
			Some(self.outcome(true))
		} else {
			debug!(%field, "form rejected");
			self.inline.close();
			self.sheet_picker.close();
			None
		}
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		if self.sheet.is_open() {
			let props = PickerProps::new(&self.items);
			if self
				.sheet_picker
				.handle_mouse(mouse, &props, Some(&mut self.form))
			{
				self.focus = Focus::SheetPicker;
				return;
			}
			let covered = self
				.sheet_area
				.is_some_and(|area| point_in_rect(mouse.column, mouse.row, area));
			if covered {
				return;
			}
		}

		let props = PickerProps::new(&self.items).refreshing(self.refreshing.is_refreshing());
		if self.inline.handle_mouse(mouse, &props, Some(&mut self.form)) {
			self.focus = Focus::InlinePicker;
			return;
		}

		if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
			if self.open_button.contains(mouse.column, mouse.row) {
				self.focus = Focus::OpenButton;
				self.open_sheet();
			} else if self.close_button.contains(mouse.column, mouse.row) {
				self.focus = Focus::CloseButton;
				self.close_sheet();
			}
		}
	}
}
