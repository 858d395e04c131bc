//! Item catalog served by the demo provider.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use frizbee::{Config, match_list};
use thiserror::Error;

use crate::picker::Item;

const BUILTIN_CITIES: &str = include_str!("cities.json");

/// Catalog sizes at which frizbee's prefilter pays off.
const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;

#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("failed to read items from {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("items in {origin} are not a JSON list of {{label, value}} objects")]
	Parse {
		origin: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("duplicate item value '{value}' in {origin}")]
	DuplicateValue { origin: String, value: String },

	#[error("{origin} contains no items")]
	Empty { origin: String },
}

/// Ordered, value-unique list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
	items: Vec<Item>,
}

impl Catalog {
	/// The bundled city list.
	pub fn builtin() -> Result<Self, CatalogError> {
		Self::from_json(BUILTIN_CITIES, "built-in city catalog")
	}

	/// Load a JSON list of `{label, value}` objects from disk.
	pub fn load(path: &Path) -> Result<Self, CatalogError> {
		let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json(&text, &path.display().to_string())
	}

	pub fn from_json(text: &str, origin: &str) -> Result<Self, CatalogError> {
		let items: Vec<Item> = serde_json::from_str(text).map_err(|source| CatalogError::Parse {
			origin: origin.to_owned(),
			source,
		})?;
		Self::from_items(items, origin)
	}

	pub fn from_items(items: Vec<Item>, origin: &str) -> Result<Self, CatalogError> {
		if items.is_empty() {
			return Err(CatalogError::Empty {
				origin: origin.to_owned(),
			});
		}
		let mut seen = HashSet::with_capacity(items.len());
		for item in &items {
			if !seen.insert(item.value.as_str()) {
				return Err(CatalogError::DuplicateValue {
					origin: origin.to_owned(),
					value: item.value.clone(),
				});
			}
		}
		Ok(Self { items })
	}

	#[must_use]
	pub fn items(&self) -> &[Item] {
		&self.items
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// One page of results. An empty keyword pages through catalog order,
	/// anything else pages through fuzzy matches ranked by score.
	#[must_use]
	pub fn page(&self, keyword: &str, page: usize, page_size: usize) -> Vec<Item> {
		let start = page.saturating_mul(page_size);
		let keyword = keyword.trim();
		if keyword.is_empty() {
			return self.items.iter().skip(start).take(page_size).cloned().collect();
		}
		self.ranked(keyword)
			.into_iter()
			.skip(start)
			.take(page_size)
			.map(|index| self.items[index].clone())
			.collect()
	}

	fn ranked(&self, keyword: &str) -> Vec<usize> {
		let haystacks: Vec<&str> = self.items.iter().map(|item| item.label.as_str()).collect();
		let mut matches: Vec<(usize, u16)> = match_list(keyword, &haystacks, &matcher_config(self.len()))
			.into_iter()
			.filter(|entry| entry.score > 0)
			.map(|entry| (entry.index as usize, entry.score))
			.collect();
		matches.sort_by(|left, right| right.1.cmp(&left.1).then(left.0.cmp(&right.0)));
		matches.into_iter().map(|(index, _)| index).collect()
	}
}

fn matcher_config(dataset_len: usize) -> Config {
	Config {
		prefilter: dataset_len >= PREFILTER_ENABLE_THRESHOLD,
		sort: false,
		..Config::default()
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn builtin_catalog_is_valid() {
		let catalog = Catalog::builtin().expect("bundled catalog parses");
		assert!(catalog.len() > 20);
		assert_eq!(catalog.page("", 0, 3).len(), 3);
	}

	#[test]
	fn empty_keyword_pages_in_catalog_order() {
		let catalog = Catalog::from_items(
			(0..25).map(|n| Item::new(format!("City {n}"), n.to_string())).collect(),
			"test",
		)
		.expect("valid items");

		let labels = |page: Vec<Item>| page.into_iter().map(|item| item.value).collect::<Vec<_>>();
		assert_eq!(labels(catalog.page("", 0, 10))[0], "0");
		assert_eq!(labels(catalog.page("", 2, 10)), vec!["20", "21", "22", "23", "24"]);
		assert!(catalog.page("", 3, 10).is_empty());
	}

	#[test]
	fn keyword_ranks_fuzzy_matches() {
		let catalog = Catalog::builtin().expect("bundled catalog parses");
		let page = catalog.page("lisb", 0, 10);
		assert_eq!(page.first().map(|item| item.label.as_str()), Some("Lisbon"));
		assert!(catalog.page("lisb", 50, 10).is_empty());
	}

	#[test]
	fn duplicate_values_are_rejected() {
		let error = Catalog::from_items(vec![Item::new("A", "1"), Item::new("B", "1")], "test")
			.expect_err("duplicate value");
		assert_eq!(error.to_string(), "duplicate item value '1' in test");
		assert!(matches!(
			Catalog::from_items(Vec::new(), "test"),
			Err(CatalogError::Empty { .. })
		));
	}

	#[test]
	fn loads_items_from_a_json_file() {
		let mut file = tempfile::NamedTempFile::new().expect("temp file");
		write!(file, r#"[{{"label":"Oslo","value":"no-1"}}]"#).expect("write items");
		let catalog = Catalog::load(file.path()).expect("valid file");
		assert_eq!(catalog.items(), &[Item::new("Oslo", "no-1")]);

		write!(file, "not json").expect("write garbage");
		assert!(matches!(
			Catalog::load(file.path()),
			Err(CatalogError::Parse { .. })
		));
	}
}
