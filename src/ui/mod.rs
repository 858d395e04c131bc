//! Demo screen: a form with one `cities` field, bound by an inline picker and
//! by a second picker inside a modal bottom sheet.
//!
//! * [`catalog`] holds the items the provider serves.
//! * [`provider`] answers fetch requests from a background thread.
//! * [`App`] owns the form, the item list and both pickers, and runs the
//!   terminal event loop.

mod actions;
pub mod catalog;
mod config;
pub mod provider;
mod render;
mod runtime;
mod state;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use serde::Serialize;

pub use catalog::{Catalog, CatalogError};
pub use config::{CITIES_FIELD, ScreenConfig, default_picker_options};
pub use runtime::run;
pub use state::{App, Focus};

use crate::picker::FieldValue;

/// Result of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOutcome {
	/// Whether the user submitted a valid form.
	pub accepted: bool,
	pub values: BTreeMap<String, FieldValue>,
}
