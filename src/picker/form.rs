//! Minimal form-state store backing the picker's field bindings.
//!
//! The store is the single writer of record for every field value. Pickers
//! read the current value and validation error through [`FieldControl`] and
//! request changes through [`FieldControl::on_change`]; several pickers may
//! bind the same field at once and all of them observe the same value.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

/// Current value of a form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
	#[default]
	Empty,
	Single(String),
	Multiple(Vec<String>),
}

impl FieldValue {
	/// Build a single value, treating the empty string as [`FieldValue::Empty`].
	pub fn single(value: impl Into<String>) -> Self {
		let value = value.into();
		if value.is_empty() {
			Self::Empty
		} else {
			Self::Single(value)
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Empty => true,
			Self::Single(value) => value.is_empty(),
			Self::Multiple(values) => values.is_empty(),
		}
	}

	#[must_use]
	pub fn contains(&self, candidate: &str) -> bool {
		match self {
			Self::Empty => false,
			Self::Single(value) => value == candidate,
			Self::Multiple(values) => values.iter().any(|value| value == candidate),
		}
	}

	/// Iterate over the selected values in order.
	pub fn values(&self) -> impl Iterator<Item = &str> {
		let slice: &[String] = match self {
			Self::Empty => &[],
			Self::Single(value) => std::slice::from_ref(value),
			Self::Multiple(values) => values,
		};
		slice.iter().map(String::as_str)
	}

	/// Return a multi-value with `candidate` added or removed.
	#[must_use]
	pub fn toggled(&self, candidate: &str) -> Self {
		let mut values: Vec<String> = self.values().map(str::to_owned).collect();
		if let Some(position) = values.iter().position(|value| value == candidate) {
			values.remove(position);
		} else {
			values.push(candidate.to_owned());
		}
		Self::Multiple(values)
	}
}

/// Validation rules attached to a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldRules {
	pub required: bool,
}

/// Read/write access to named form fields.
pub trait FieldControl {
	/// Current value of `field`, [`FieldValue::Empty`] when unknown.
	fn value(&self, field: &str) -> FieldValue;

	/// Current validation error of `field`.
	fn error(&self, field: &str) -> Option<&str>;

	/// Replace the value of `field`.
	fn on_change(&mut self, field: &str, value: FieldValue);

	/// Validate `field`, returning `true` when it holds no error afterwards.
	fn trigger(&mut self, field: &str) -> bool;
}

#[derive(Debug, Clone, Default)]
struct FieldState {
	value: FieldValue,
	rules: FieldRules,
	error: Option<String>,
	dirty: bool,
	validated: bool,
}

impl FieldState {
	fn validate(&mut self, name: &str) {
		self.validated = true;
		self.error = if self.rules.required && self.value.is_empty() {
			Some(format!("{name} is required"))
		} else {
			None
		};
	}
}

/// In-memory form store keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct FormState {
	fields: BTreeMap<String, FieldState>,
}

impl FormState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a form pre-populated with default values.
	pub fn with_defaults<I, S>(defaults: I) -> Self
	where
		I: IntoIterator<Item = (S, FieldValue)>,
		S: Into<String>,
	{
		let mut form = Self::new();
		for (name, value) in defaults {
			form.fields.insert(
				name.into(),
				FieldState {
					value,
					..FieldState::default()
				},
			);
		}
		form
	}

	/// Attach validation rules to `field`, creating it when missing.
	pub fn register(&mut self, field: impl Into<String>, rules: FieldRules) {
		self.fields.entry(field.into()).or_default().rules = rules;
	}

	/// Whether `field` was changed since the form was created.
	#[must_use]
	pub fn is_dirty(&self, field: &str) -> bool {
		self.fields.get(field).is_some_and(|state| state.dirty)
	}

	/// Validate every field, returning `true` when the whole form is valid.
	pub fn validate_all(&mut self) -> bool {
		let mut valid = true;
		for (name, state) in &mut self.fields {
			state.validate(name);
			valid &= state.error.is_none();
		}
		valid
	}

	/// Snapshot of every field value, ordered by field name.
	#[must_use]
	pub fn values(&self) -> BTreeMap<String, FieldValue> {
		self.fields
			.iter()
			.map(|(name, state)| (name.clone(), state.value.clone()))
			.collect()
	}
}

impl FieldControl for FormState {
	fn value(&self, field: &str) -> FieldValue {
		self.fields
			.get(field)
			.map(|state| state.value.clone())
			.unwrap_or_default()
	}

	fn error(&self, field: &str) -> Option<&str> {
		self.fields.get(field).and_then(|state| state.error.as_deref())
	}

	fn on_change(&mut self, field: &str, value: FieldValue) {
		let state = self.fields.entry(field.to_owned()).or_default();
		debug!(field, ?value, "form field changed");
		state.value = value;
		state.dirty = true;
		// Once a field has been validated it re-validates on every change.
		if state.validated {
			state.validate(field);
		}
	}

	fn trigger(&mut self, field: &str) -> bool {
		let state = self.fields.entry(field.to_owned()).or_default();
		state.validate(field);
		state.error.is_none()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_default_counts_as_empty() {
		let form = FormState::with_defaults([("cities", FieldValue::single(""))]);
		assert_eq!(form.value("cities"), FieldValue::Empty);
		assert!(!form.is_dirty("cities"));
	}

	#[test]
	fn required_field_reports_error_until_filled() {
		let mut form = FormState::new();
		form.register("cities", FieldRules { required: true });

		assert!(form.error("cities").is_none(), "no error before validation");
		assert!(!form.trigger("cities"));
		assert_eq!(form.error("cities"), Some("cities is required"));

		form.on_change("cities", FieldValue::single("42"));
		assert!(form.error("cities").is_none(), "change re-validates");
		assert!(form.is_dirty("cities"));
		assert!(form.validate_all());
	}

	#[test]
	fn toggling_builds_multiple_values() {
		let value = FieldValue::Empty.toggled("a").toggled("b");
		assert_eq!(value, FieldValue::Multiple(vec!["a".into(), "b".into()]));
		assert!(value.contains("b"));

		let value = value.toggled("a");
		assert_eq!(value.values().collect::<Vec<_>>(), vec!["b"]);
	}

	#[test]
	fn values_serialize_untagged() {
		let form = FormState::with_defaults([
			("a", FieldValue::single("x")),
			("b", FieldValue::Multiple(vec!["y".into()])),
			("c", FieldValue::Empty),
		]);
		let json = serde_json::to_string(&form.values()).expect("serializable");
		assert_eq!(json, r#"{"a":"x","b":["y"],"c":null}"#);
	}
}
