//! Core crate exports for the `dropsheet` terminal form.
//!
//! [`picker`] holds the rendering-agnostic selection and pagination logic,
//! [`tui`] the ratatui widgets built on it, and [`ui`] the demo screen that
//! wires both pickers to one form field.

pub mod app_dirs;
pub mod logging;
pub mod picker;
pub mod tui;
pub mod ui;

pub use picker::{FieldValue, FormState, Item, PaginatedSearch, SelectionBinder};
pub use tui::components::{BottomSheet, DropdownPicker, PickerOptions, PickerProps};
pub use tui::style::{Theme, builtin_themes, default_theme};
pub use ui::{Catalog, FormOutcome, ScreenConfig, run};
