use serde::{Deserialize, Serialize};

/// A selectable entry supplied by the item provider.
///
/// Items are identified by their [`value`](Item::value); the label is only
/// used for display and local filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
	pub label: String,
	pub value: String,
}

impl Item {
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
		}
	}

	/// Key used to identify the row in a rendered list.
	#[must_use]
	pub fn key(&self) -> &str {
		&self.value
	}

	/// Case-insensitive substring match against the label.
	#[must_use]
	pub fn label_contains(&self, needle: &str) -> bool {
		if needle.is_empty() {
			return true;
		}
		self.label.to_lowercase().contains(&needle.to_lowercase())
	}
}

/// Find the item carrying `value`, if any.
pub fn find_by_value<'a>(items: &'a [Item], value: &str) -> Option<&'a Item> {
	items.iter().find(|item| item.value == value)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn label_match_ignores_case() {
		let item = Item::new("Paris", "p-1");
		assert!(item.label_contains("par"));
		assert!(item.label_contains("RIS"));
		assert!(item.label_contains(""));
		assert!(!item.label_contains("lyon"));
	}

	#[test]
	fn items_deserialize_from_json() {
		let items: Vec<Item> =
			serde_json::from_str(r#"[{"label":"Oslo","value":"7"}]"#).expect("valid json");
		assert_eq!(items, vec![Item::new("Oslo", "7")]);
		assert_eq!(find_by_value(&items, "7").map(Item::key), Some("7"));
		assert!(find_by_value(&items, "8").is_none());
	}
}
