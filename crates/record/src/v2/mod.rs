//! The second schema generation, which adds graduate and unclassified
//! students.
//!
//! First generation readers have no idea these labels exist. To keep them
//! working, the new labels are written as [`Classification::FALLBACK`] in
//! the `classification` field, and a marker flag records the real label.
//! Readers of this generation check the markers before the literal field.

use std::fmt;

use crate::field::FieldSet;
use crate::schema::{Label, Versioned};

pub const VERSION: u32 = 2;

/// Present since the first generation.
const CLASSIFICATION: &str = "classification";
/// Present since the first generation, where it held the whole name.
const FIRST_NAME: &str = "first_name";
/// Always written empty.
const LAST_NAME: &str = "last_name";
/// Marks a record whose real classification is [`Classification::Graduate`].
const IS_GRADUATE: &str = "is_graduate";
/// Marks a record whose real classification is [`Classification::Unclassified`].
const IS_UNCLASSIFIED: &str = "is_unclassified";

/// New labels go at the end. Never reorder or remove a label.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Classification {
	Freshman,
	Sophomore,
	Junior,
	Senior,
	Graduate,
	Unclassified,
}

impl Classification {
	/// Whether a first generation reader knows this label
	pub fn is_original(&self) -> bool {
		!matches!(self, Classification::Graduate | Classification::Unclassified)
	}
}

impl Label for Classification {
	const ALL: &'static [Self] = &[
		Classification::Freshman,
		Classification::Sophomore,
		Classification::Junior,
		Classification::Senior,
		Classification::Graduate,
		Classification::Unclassified,
	];

	const FALLBACK: Self = Classification::Freshman;

	fn wire_name(&self) -> &'static str {
		match self {
			Classification::Freshman => "freshman",
			Classification::Sophomore => "sophomore",
			Classification::Junior => "junior",
			Classification::Senior => "senior",
			Classification::Graduate => "graduate",
			Classification::Unclassified => "unclassified",
		}
	}
}

impl fmt::Display for Classification {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Classification::Freshman => f.write_str("Freshman"),
			Classification::Sophomore => f.write_str("Sophomore"),
			Classification::Junior => f.write_str("Junior"),
			Classification::Senior => f.write_str("Senior"),
			Classification::Graduate => f.write_str("Graduate"),
			Classification::Unclassified => f.write_str("Unclassified"),
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Person {
	name: String,
	classification: Classification,
}

impl Versioned for Person {
	const VERSION: u32 = VERSION;

	type Label = Classification;

	fn new(name: impl Into<String>, classification: Classification) -> Self {
		Self {
			name: name.into(),
			classification,
		}
	}

	fn name(&self) -> &str {
		&self.name
	}

	fn classification(&self) -> Classification {
		self.classification
	}

	fn to_fields(&self) -> FieldSet {
		let mut fields = FieldSet::new();
		let (literal, graduate, unclassified) = match self.classification {
			Classification::Graduate => (Classification::FALLBACK, true, false),
			Classification::Unclassified => (Classification::FALLBACK, false, true),
			v => (v, false, false),
		};
		fields.put_label(CLASSIFICATION, literal);
		fields.put_flag(IS_GRADUATE, graduate);
		fields.put_flag(IS_UNCLASSIFIED, unclassified);
		fields.put_text(FIRST_NAME, &self.name);
		fields.put_text(LAST_NAME, "");
		fields
	}

	fn from_fields(fields: &FieldSet) -> Self {
		let classification = if fields.flag(IS_GRADUATE, false) {
			Classification::Graduate
		} else if fields.flag(IS_UNCLASSIFIED, false) {
			Classification::Unclassified
		} else {
			fields.label(CLASSIFICATION, Classification::FALLBACK)
		};
		let mut name = fields.text(FIRST_NAME, "");
		let last_name = fields.text(LAST_NAME, "");
		if !last_name.is_empty() {
			name.push(' ');
			name.push_str(&last_name);
		}
		Self {
			name,
			classification,
		}
	}
}

impl fmt::Display for Person {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "Person {{ name: {}, classification: {} }}", self.name, self.classification)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case::freshman(Classification::Freshman, "freshman", false, false)]
	#[case::sophomore(Classification::Sophomore, "sophomore", false, false)]
	#[case::junior(Classification::Junior, "junior", false, false)]
	#[case::senior(Classification::Senior, "senior", false, false)]
	#[case::graduate(Classification::Graduate, "freshman", true, false)]
	#[case::unclassified(Classification::Unclassified, "freshman", false, true)]
	fn encodes_a_degraded_label_and_markers(
		#[case] classification: Classification,
		#[case] literal: &str,
		#[case] graduate: bool,
		#[case] unclassified: bool,
	) {
		let fields = Person::new("Alice", classification).to_fields();
		assert_eq!(fields.text(CLASSIFICATION, ""), literal);
		assert_eq!(fields.flag(IS_GRADUATE, !graduate), graduate);
		assert_eq!(fields.flag(IS_UNCLASSIFIED, !unclassified), unclassified);
		assert_eq!(fields.text(FIRST_NAME, ""), "Alice");
		assert_eq!(fields.text(LAST_NAME, "missing"), "");
	}

	#[test]
	fn markers_override_the_literal_label() {
		let mut fields = FieldSet::new();
		fields.put_label(CLASSIFICATION, Classification::Senior);
		fields.put_flag(IS_UNCLASSIFIED, true);
		assert_eq!(Person::from_fields(&fields).classification(), Classification::Unclassified);
		fields.put_flag(IS_GRADUATE, true);
		assert_eq!(Person::from_fields(&fields).classification(), Classification::Graduate);
	}

	#[test]
	fn literal_label_is_used_without_markers() {
		let mut fields = FieldSet::new();
		fields.put_label(CLASSIFICATION, Classification::Junior);
		fields.put_text(FIRST_NAME, "Alice");
		let person = Person::from_fields(&fields);
		assert_eq!(person.classification(), Classification::Junior);
		assert_eq!(person.name(), "Alice");
	}

	#[test]
	fn missing_label_falls_back() {
		let person = Person::from_fields(&FieldSet::new());
		assert_eq!(person.classification(), Classification::Freshman);
		assert_eq!(person.name(), "");
	}

	#[test]
	fn last_name_is_joined_when_present() {
		let mut fields = FieldSet::new();
		fields.put_text(FIRST_NAME, "Alice");
		fields.put_text(LAST_NAME, "Liddell");
		assert_eq!(Person::from_fields(&fields).name(), "Alice Liddell");
	}

	#[test]
	fn original_labels() {
		let original: Vec<_> =
			Classification::ALL.iter().filter(|c| c.is_original()).map(|c| c.wire_name()).collect();
		assert_eq!(original, ["freshman", "sophomore", "junior", "senior"]);
	}
}
