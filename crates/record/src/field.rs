use std::collections::BTreeMap;
use std::ops::Deref;

use ciborium::Value as Data;
use tracing::debug;

use crate::schema::Label;

/// The wire representation of a single record: a map of named fields.
///
/// Fields are looked up by name, so writers may add fields and readers may
/// ignore them. Every typed read takes the value to use when the field is
/// missing, which is how older data stays readable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldSet(BTreeMap<String, Data>);

impl Deref for FieldSet {
	type Target = BTreeMap<String, Data>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl FieldSet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn put_text(&mut self, name: &str, value: &str) {
		self.0.insert(name.to_owned(), Data::Text(value.to_owned()));
	}

	pub fn put_flag(&mut self, name: &str, value: bool) {
		self.0.insert(name.to_owned(), Data::Bool(value));
	}

	pub fn put_label<L: Label>(&mut self, name: &str, value: L) {
		self.put_text(name, value.wire_name());
	}

	/// Reads a text field, or `default` if it is missing or not text.
	pub fn text(&self, name: &str, default: &str) -> String {
		match self.0.get(name) {
			Some(Data::Text(v)) => v.clone(),
			Some(other) => {
				debug!(field = name, value = ?other, "Expected a text field, using the default");
				default.to_owned()
			}
			None => default.to_owned(),
		}
	}

	/// Reads a boolean field, or `default` if it is missing or not a boolean.
	pub fn flag(&self, name: &str, default: bool) -> bool {
		match self.0.get(name) {
			Some(Data::Bool(v)) => *v,
			Some(other) => {
				debug!(field = name, value = ?other, "Expected a boolean field, using the default");
				default
			}
			None => default,
		}
	}

	/// Reads a label field, or `default` if it is missing or names a label
	/// this generation does not define.
	pub fn label<L: Label>(&self, name: &str, default: L) -> L {
		match self.0.get(name) {
			Some(Data::Text(v)) => L::from_wire_name(v).unwrap_or_else(|| {
				debug!(field = name, label = %v, fallback = %default, "Unknown label, using the fallback");
				default
			}),
			Some(other) => {
				debug!(field = name, value = ?other, "Expected a label field, using the default");
				default
			}
			None => default,
		}
	}

	/// Whether the field is present, whatever its type
	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	/// The names of every field in this set
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}
}

impl From<FieldSet> for Data {
	fn from(fields: FieldSet) -> Self {
		Data::Map(fields.0.into_iter().map(|(k, v)| (Data::Text(k), v)).collect())
	}
}

impl TryFrom<Data> for FieldSet {
	type Error = &'static str;

	fn try_from(data: Data) -> Result<Self, Self::Error> {
		match data {
			Data::Map(entries) => Ok(FieldSet(
				entries
					.into_iter()
					.filter_map(|(k, v)| match k {
						Data::Text(k) => Some((k, v)),
						_ => None,
					})
					.collect(),
			)),
			_ => Err("Expected a CBOR map of named fields"),
		}
	}
}
