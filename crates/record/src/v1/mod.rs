//! The first schema generation.
//!
//! This is the layout records had before graduate and unclassified students
//! existed. It is kept byte-for-byte compatible with data written at the time
//! and must not learn about newer labels.

use std::fmt;

use crate::field::FieldSet;
use crate::schema::{Label, Versioned};

pub const VERSION: u32 = 1;

const CLASSIFICATION: &str = "classification";
const FIRST_NAME: &str = "first_name";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Classification {
	Freshman,
	Sophomore,
	Junior,
	Senior,
}

impl Label for Classification {
	const ALL: &'static [Self] = &[
		Classification::Freshman,
		Classification::Sophomore,
		Classification::Junior,
		Classification::Senior,
	];

	const FALLBACK: Self = Classification::Freshman;

	fn wire_name(&self) -> &'static str {
		match self {
			Classification::Freshman => "freshman",
			Classification::Sophomore => "sophomore",
			Classification::Junior => "junior",
			Classification::Senior => "senior",
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
		fields.put_label(CLASSIFICATION, self.classification);
		fields.put_text(FIRST_NAME, &self.name);
		fields
	}

	fn from_fields(fields: &FieldSet) -> Self {
		Self {
			name: fields.text(FIRST_NAME, ""),
			classification: fields.label(CLASSIFICATION, Classification::FALLBACK),
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
	use super::*;

	#[test]
	fn writes_only_first_generation_fields() {
		let fields = Person::new("Alice", Classification::Sophomore).to_fields();
		assert_eq!(fields.names().collect::<Vec<_>>(), vec![CLASSIFICATION, FIRST_NAME]);
	}

	#[test]
	fn ignores_fields_it_does_not_know() {
		let mut fields = Person::new("Alice", Classification::Junior).to_fields();
		fields.put_text("last_name", "Liddell");
		fields.put_flag("is_graduate", true);
		let person = Person::from_fields(&fields);
		assert_eq!(person.name(), "Alice");
		assert_eq!(person.classification(), Classification::Junior);
	}

	#[test]
	fn reads_an_empty_record() {
		let person = Person::from_fields(&FieldSet::new());
		assert_eq!(person.name(), "");
		assert_eq!(person.classification(), Classification::Freshman);
	}
}
