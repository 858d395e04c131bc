//! Widgets composed by the demo screen.

/// Push buttons.
pub mod button;
/// Searchable dropdown picker bound to a form field.
pub mod dropdown;
/// Modal bottom sheet.
pub mod sheet;
/// Scroll bookkeeping for list viewports.
pub mod scrollbar;

pub use button::Button;
pub use dropdown::{DropdownPicker, PickerOptions, PickerProps, RenderContext};
pub use scrollbar::{ScrollMetrics, render_scrollbar};
pub use sheet::BottomSheet;
