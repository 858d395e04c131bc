use anyhow::Result;
use dropsheet::picker::FieldValue;
use dropsheet::ui::FormOutcome;

/// Print a plain-text representation of the form outcome.
pub(crate) fn print_plain(outcome: &FormOutcome) {
	print!("{}", format_outcome_plain(outcome));
}

pub(crate) fn format_outcome_plain(outcome: &FormOutcome) -> String {
	if !outcome.accepted {
		return "Form cancelled\n".to_owned();
	}

	let mut text = String::new();
	for (field, value) in &outcome.values {
		let shown = match value {
			FieldValue::Empty => "(empty)".to_owned(),
			other => other.values().collect::<Vec<_>>().join(", "),
		};
		text.push_str(&format!("{field}: {shown}\n"));
	}
	text
}

/// Format the form outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &FormOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the form outcome.
pub(crate) fn print_json(outcome: &FormOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use serde_json::Value;

	use super::*;

	fn outcome(accepted: bool, value: FieldValue) -> FormOutcome {
		FormOutcome {
			accepted,
			values: BTreeMap::from([("cities".to_owned(), value)]),
		}
	}

	#[test]
	fn json_format_includes_field_values() {
		let json = format_outcome_json(&outcome(true, FieldValue::single("7"))).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["values"]["cities"], "7");
	}

	#[test]
	fn plain_format_lists_fields() {
		assert_eq!(
			format_outcome_plain(&outcome(
				true,
				FieldValue::Multiple(vec!["7".into(), "17".into()])
			)),
			"cities: 7, 17\n"
		);
		assert_eq!(
			format_outcome_plain(&outcome(true, FieldValue::Empty)),
			"cities: (empty)\n"
		);
		assert_eq!(
			format_outcome_plain(&outcome(false, FieldValue::Empty)),
			"Form cancelled\n"
		);
	}
}
