//! Connects one form field to a picker.
//!
//! The binder owns no value of its own. It reads the bound field through a
//! [`FieldControl`], turns a chosen [`Item`] into a field change, and forwards
//! every selection to an optional side-channel listener.

use std::fmt;

use tracing::{debug, warn};

use super::form::{FieldControl, FieldValue};
use super::item::{Item, find_by_value};

/// Placeholder shown on the error line when the field has no error, so the
/// picker keeps a fixed height.
pub const ERROR_FILLER: &str = ".";

/// Glyph appended to the label of a required field.
pub const REQUIRED_MARKER: &str = "*";

/// Listener notified with `(field_name, item)` on every selection.
pub type ItemSelectListener = Box<dyn FnMut(&str, &Item)>;

/// Label shown above the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLabel<'a> {
	pub text: &'a str,
	pub required: bool,
}

/// Binds a named form field to a single- or multi-select picker.
pub struct SelectionBinder {
	field_name: String,
	label: Option<String>,
	required: bool,
	multiple: bool,
	disabled: bool,
	show_error_line: bool,
	on_item_select: Option<ItemSelectListener>,
}

impl fmt::Debug for SelectionBinder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SelectionBinder")
			.field("field_name", &self.field_name)
			.field("label", &self.label)
			.field("required", &self.required)
			.field("multiple", &self.multiple)
			.field("disabled", &self.disabled)
			.field("show_error_line", &self.show_error_line)
			.field("has_listener", &self.on_item_select.is_some())
			.finish()
	}
}

impl SelectionBinder {
	pub fn new(field_name: impl Into<String>) -> Self {
		Self {
			field_name: field_name.into(),
			label: None,
			required: false,
			multiple: false,
			disabled: false,
			show_error_line: false,
			on_item_select: None,
		}
	}

	#[must_use]
	pub fn label(mut self, label: impl Into<String>) -> Self {
		let label = label.into();
		self.label = (!label.is_empty()).then_some(label);
		self
	}

	#[must_use]
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	#[must_use]
	pub fn multiple(mut self, multiple: bool) -> Self {
		self.multiple = multiple;
		self
	}

	#[must_use]
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Render a trailing validation line (the field can be triggered).
	#[must_use]
	pub fn show_error_line(mut self, show: bool) -> Self {
		self.show_error_line = show;
		self
	}

	#[must_use]
	pub fn on_item_select(mut self, listener: impl FnMut(&str, &Item) + 'static) -> Self {
		self.on_item_select = Some(Box::new(listener));
		self
	}

	#[must_use]
	pub fn field_name(&self) -> &str {
		&self.field_name
	}

	#[must_use]
	pub fn is_multiple(&self) -> bool {
		self.multiple
	}

	#[must_use]
	pub fn is_disabled(&self) -> bool {
		self.disabled
	}

	pub fn set_disabled(&mut self, disabled: bool) {
		self.disabled = disabled;
	}

	/// Apply a selection.
	///
	/// Items with an empty value and a missing `control` leave the field
	/// untouched. The listener is notified either way.
	pub fn handle_select(&mut self, control: Option<&mut dyn FieldControl>, item: &Item) {
		if !item.value.is_empty() {
			match control {
				Some(control) => {
					let next = if self.multiple {
						control.value(&self.field_name).toggled(&item.value)
					} else {
						FieldValue::single(item.value.clone())
					};
					control.on_change(&self.field_name, next);
				}
				None => warn!(
					field = %self.field_name,
					value = %item.value,
					"selection dropped: no form control bound"
				),
			}
		} else {
			debug!(field = %self.field_name, "selected item has no value");
		}

		if let Some(listener) = self.on_item_select.as_mut() {
			listener(&self.field_name, item);
		}
	}

	/// Label line, if a label was configured.
	#[must_use]
	pub fn label_line(&self) -> Option<FieldLabel<'_>> {
		self.label.as_deref().map(|text| FieldLabel {
			text,
			required: self.required,
		})
	}

	/// Text of the trailing line: the field error, the filler, or nothing when
	/// the error line is disabled.
	#[must_use]
	pub fn error_line(&self, control: Option<&dyn FieldControl>) -> Option<String> {
		if !self.show_error_line {
			return None;
		}
		let error = control.and_then(|control| control.error(&self.field_name));
		Some(error.unwrap_or(ERROR_FILLER).to_owned())
	}

	/// Current value of the bound field.
	#[must_use]
	pub fn current_value(&self, control: Option<&dyn FieldControl>) -> FieldValue {
		control
			.map(|control| control.value(&self.field_name))
			.unwrap_or_default()
	}

	/// Display text for the bound value reconciled against `items`.
	///
	/// Returns `None` when the placeholder should be shown instead.
	#[must_use]
	pub fn selected_label(&self, items: &[Item], value: &FieldValue) -> Option<String> {
		match value {
			FieldValue::Empty => None,
			FieldValue::Single(value) => find_by_value(items, value).map(|item| item.label.clone()),
			FieldValue::Multiple(values) if values.is_empty() => None,
			FieldValue::Multiple(values) => {
				let labels: Vec<&str> = values
					.iter()
					.filter_map(|value| find_by_value(items, value))
					.map(|item| item.label.as_str())
					.collect();
				if labels.is_empty() {
					Some(format!("{} selected", values.len()))
				} else {
					Some(labels.join(", "))
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;
	use crate::picker::form::{FieldRules, FormState};

	/// Form double that counts `on_change` calls.
	#[derive(Default)]
	struct CountingForm {
		inner: FormState,
		changes: Vec<(String, FieldValue)>,
	}

	impl FieldControl for CountingForm {
		fn value(&self, field: &str) -> FieldValue {
			self.inner.value(field)
		}

		fn error(&self, field: &str) -> Option<&str> {
			self.inner.error(field)
		}

		fn on_change(&mut self, field: &str, value: FieldValue) {
			self.changes.push((field.to_owned(), value.clone()));
			self.inner.on_change(field, value);
		}

		fn trigger(&mut self, field: &str) -> bool {
			self.inner.trigger(field)
		}
	}

	fn listening_binder() -> (SelectionBinder, Rc<RefCell<Vec<(String, Item)>>>) {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		let binder = SelectionBinder::new("cities").on_item_select(move |field: &str, item: &Item| {
			sink.borrow_mut().push((field.to_owned(), item.clone()));
		});
		(binder, seen)
	}

	#[test]
	fn selection_changes_field_once_and_notifies_once() {
		let (mut binder, seen) = listening_binder();
		let mut form = CountingForm::default();
		let item = Item::new("Paris", "75");

		binder.handle_select(Some(&mut form), &item);

		assert_eq!(
			form.changes,
			vec![("cities".to_owned(), FieldValue::single("75"))]
		);
		assert_eq!(*seen.borrow(), vec![("cities".to_owned(), item)]);
	}

	#[test]
	fn empty_value_only_notifies() {
		let (mut binder, seen) = listening_binder();
		let mut form = CountingForm::default();

		binder.handle_select(Some(&mut form), &Item::new("Nowhere", ""));

		assert!(form.changes.is_empty());
		assert_eq!(seen.borrow().len(), 1);
	}

	#[test]
	fn missing_control_drops_the_update() {
		let (mut binder, seen) = listening_binder();
		binder.handle_select(None, &Item::new("Paris", "75"));
		assert_eq!(seen.borrow().len(), 1);
	}

	#[test]
	fn multiple_selection_toggles_membership() {
		let mut binder = SelectionBinder::new("cities").multiple(true);
		let mut form = FormState::new();

		binder.handle_select(Some(&mut form), &Item::new("Paris", "75"));
		binder.handle_select(Some(&mut form), &Item::new("Lyon", "69"));
		binder.handle_select(Some(&mut form), &Item::new("Paris", "75"));

		assert_eq!(
			form.value("cities"),
			FieldValue::Multiple(vec!["69".to_owned()])
		);
	}

	#[test]
	fn error_line_shows_error_or_filler() {
		let binder = SelectionBinder::new("cities").show_error_line(true);
		let mut form = FormState::new();
		form.register("cities", FieldRules { required: true });

		assert_eq!(binder.error_line(Some(&form)).as_deref(), Some(ERROR_FILLER));
		form.trigger("cities");
		assert_eq!(
			binder.error_line(Some(&form)).as_deref(),
			Some("cities is required")
		);
		assert_eq!(binder.error_line(None).as_deref(), Some(ERROR_FILLER));

		let hidden = SelectionBinder::new("cities");
		assert_eq!(hidden.error_line(Some(&form)), None);
	}

	#[test]
	fn label_carries_required_flag() {
		let binder = SelectionBinder::new("cities").label("City").required(true);
		assert_eq!(
			binder.label_line(),
			Some(FieldLabel {
				text: "City",
				required: true
			})
		);
		assert_eq!(SelectionBinder::new("x").label("").label_line(), None);
	}

	#[test]
	fn selected_label_reconciles_against_items() {
		let binder = SelectionBinder::new("cities");
		let items = vec![Item::new("Paris", "75"), Item::new("Lyon", "69")];

		assert_eq!(
			binder.selected_label(&items, &FieldValue::single("69")),
			Some("Lyon".to_owned())
		);
		assert_eq!(binder.selected_label(&items, &FieldValue::single("13")), None);
		assert_eq!(binder.selected_label(&items, &FieldValue::Empty), None);
		assert_eq!(
			binder.selected_label(
				&items,
				&FieldValue::Multiple(vec!["75".into(), "69".into()])
			),
			Some("Paris, Lyon".to_owned())
		);
		assert_eq!(
			binder.selected_label(&items, &FieldValue::Multiple(vec!["13".into()])),
			Some("1 selected".to_owned())
		);
	}
}
