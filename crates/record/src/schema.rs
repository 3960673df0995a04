//! The traits every schema generation implements.
//!
//! A generation is an independent module with its own `Classification` and
//! `Person` types. Two generations may use the same type names with different
//! layouts; the harness only ever talks to them through these traits.

use std::fmt::{Debug, Display};

use crate::field::FieldSet;

/// A closed, ordered set of classification labels.
///
/// Labels are identified on the wire by [`Label::wire_name`], never by their
/// position, so a later generation can append labels without changing the
/// meaning of existing data.
pub trait Label: Copy + Eq + Debug + Display + Sized + 'static {
	/// Every label of this generation, in declaration order
	const ALL: &'static [Self];

	/// The label written in place of one an older reader would not know,
	/// and read when the classification is absent or unrecognised
	const FALLBACK: Self;

	/// The text stored in the `classification` field
	fn wire_name(&self) -> &'static str;

	/// Looks a label up by its wire name
	fn from_wire_name(name: &str) -> Option<Self> {
		Self::ALL.iter().copied().find(|l| l.wire_name() == name)
	}
}

/// A person record as understood by one schema generation.
pub trait Versioned: Sized {
	/// The statically declared generation number
	const VERSION: u32;

	/// The classification type of this generation
	type Label: Label;

	fn new(name: impl Into<String>, classification: Self::Label) -> Self;

	fn name(&self) -> &str;

	fn classification(&self) -> Self::Label;

	/// Produces the named-field representation of this record.
	fn to_fields(&self) -> FieldSet;

	/// Rebuilds a record from any generation's field set.
	///
	/// This never fails: absent or unusable fields fall back to their defaults.
	fn from_fields(fields: &FieldSet) -> Self;
}
