//! Terminal building blocks for the picker.
//!
//! The submodules here expose the reusable widgets, the search input and the
//! theme tables used by the demo screen in [`crate::ui`].

pub mod components;
pub mod input;
pub mod style;

pub use components::{BottomSheet, Button, DropdownPicker, PickerOptions, PickerProps};
pub use input::QueryInput;
pub use style::{Theme, builtin_themes, default_theme};

#[cfg(test)]
pub(crate) fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}
