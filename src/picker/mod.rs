//! Rendering-agnostic core of the dropdown picker.
//!
//! * [`binder`] maps item selection onto a form field.
//! * [`search`] decides when to ask the item provider for more data.
//! * [`debounce`] is the delayed trigger behind keyword searches.
//! * [`form`] is the form-state store the binder talks to.

pub mod binder;
pub mod debounce;
pub mod form;
pub mod item;
pub mod search;

pub use binder::{ERROR_FILLER, FieldLabel, REQUIRED_MARKER, SelectionBinder};
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use form::{FieldControl, FieldRules, FieldValue, FormState};
pub use item::Item;
pub use search::{
	DEFAULT_PAGE_SIZE, FetchItems, FetchRequest, FetchTrigger, PaginatedSearch, SearchTuning,
};
