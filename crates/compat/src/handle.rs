//! Loading schema generations behind a uniform interface.
//!
//! Every generation defines its own `Person` and `Classification` types. The
//! harness never names them: it asks for a generation by id and receives a
//! handle wrapping a boxed [`Codec`] for that generation only. Handles share
//! no state, so any number of them can be alive at the same time.

use std::fmt;
use std::marker::PhantomData;

use rollbook_record::{Error, Label, Versioned, decode_all, v1, v2, write_record};

use crate::config::GenerationConfig;
use crate::err::SetupError;

/// The ids of every registered generation, oldest first
pub const GENERATIONS: &[&str] = &["v1", "v2"];

/// A record as seen by one generation, reduced to plain data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Decoded {
	pub name: String,
	/// The wire name of the decoded label
	pub label: &'static str,
}

impl fmt::Display for Decoded {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} ({})", self.name, self.label)
	}
}

/// The object safe view of one generation's codec.
pub trait Codec {
	/// The version tag the generation declares
	fn version(&self) -> u32;

	/// The wire names of every label, in declaration order
	fn labels(&self) -> Vec<&'static str>;

	/// The wire name of the fallback label
	fn fallback(&self) -> &'static str;

	/// Encodes one person and appends the record to `out`.
	fn encode(&self, name: &str, label: &str, out: &mut Vec<u8>) -> Result<(), Error>;

	/// Decodes every record of a stream.
	fn decode(&self, bytes: &[u8]) -> Result<Vec<Decoded>, Error>;
}

/// The [`Codec`] of the generation whose person type is `P`.
pub struct Loaded<P>(PhantomData<fn() -> P>);

impl<P> Loaded<P> {
	pub fn new() -> Self {
		Self(PhantomData)
	}
}

impl<P> Default for Loaded<P> {
	fn default() -> Self {
		Self::new()
	}
}

impl<P: Versioned> Codec for Loaded<P> {
	fn version(&self) -> u32 {
		P::VERSION
	}

	fn labels(&self) -> Vec<&'static str> {
		<P::Label as Label>::ALL.iter().map(Label::wire_name).collect()
	}

	fn fallback(&self) -> &'static str {
		<P::Label as Label>::FALLBACK.wire_name()
	}

	fn encode(&self, name: &str, label: &str, out: &mut Vec<u8>) -> Result<(), Error> {
		let Some(label) = <P::Label as Label>::from_wire_name(label) else {
			return Err(Error::Encode(format!(
				"generation {} does not define the label `{label}`",
				P::VERSION
			)));
		};
		write_record(out, &P::new(name, label))
	}

	fn decode(&self, bytes: &[u8]) -> Result<Vec<Decoded>, Error> {
		Ok(decode_all::<P>(bytes)?
			.into_iter()
			.map(|p| Decoded {
				label: p.classification().wire_name(),
				name: p.name().to_owned(),
			})
			.collect())
	}
}

/// One loaded generation, owned by a single matrix run.
pub struct GenerationHandle {
	id: String,
	codec: Box<dyn Codec>,
}

impl fmt::Debug for GenerationHandle {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("GenerationHandle")
			.field("id", &self.id)
			.field("version", &self.codec.version())
			.finish()
	}
}

impl GenerationHandle {
	pub fn new(id: impl Into<String>, codec: impl Codec + 'static) -> Self {
		Self {
			id: id.into(),
			codec: Box::new(codec),
		}
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn version(&self) -> u32 {
		self.codec.version()
	}

	pub fn labels(&self) -> Vec<&'static str> {
		self.codec.labels()
	}

	pub fn fallback(&self) -> &'static str {
		self.codec.fallback()
	}

	pub fn knows(&self, label: &str) -> bool {
		self.codec.labels().iter().any(|l| *l == label)
	}

	pub fn codec(&self) -> &dyn Codec {
		self.codec.as_ref()
	}

	/// Decodes every record in `bytes` with this generation's codec,
	/// whichever generation wrote them.
	pub fn cross_decode(&self, bytes: &[u8]) -> Result<Vec<Decoded>, Error> {
		self.codec.decode(bytes)
	}
}

/// Constructs a fresh handle for the generation registered under `id`.
pub fn load_generation(id: &str) -> Result<GenerationHandle, SetupError> {
	match id {
		"v1" => Ok(GenerationHandle::new(id, Loaded::<v1::Person>::new())),
		"v2" => Ok(GenerationHandle::new(id, Loaded::<v2::Person>::new())),
		_ => Err(SetupError::UnknownGeneration(id.to_owned())),
	}
}

/// Loads a configured generation, checking its declared version.
pub fn load_configured(config: &GenerationConfig) -> Result<GenerationHandle, SetupError> {
	let handle = load_generation(&config.id)?;
	match config.version {
		Some(expected) if expected != handle.version() => Err(SetupError::VersionMismatch {
			id: config.id.clone(),
			expected,
			declared: handle.version(),
		}),
		_ => Ok(handle),
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case::v1("v1", 1, 4)]
	#[case::v2("v2", 2, 6)]
	fn registered_generation_loads(#[case] id: &str, #[case] version: u32, #[case] labels: usize) {
		assert!(GENERATIONS.iter().any(|g| *g == id));
		let handle = load_generation(id).unwrap();
		assert_eq!(handle.id(), id);
		assert_eq!(handle.version(), version);
		assert_eq!(handle.labels().len(), labels);
		assert_eq!(handle.fallback(), "freshman");
	}

	#[rstest]
	#[case::v1_as_v2("v1", 2)]
	#[case::v2_as_v1("v2", 1)]
	fn wrong_declared_version_is_rejected(#[case] id: &str, #[case] version: u32) {
		let config = GenerationConfig::new(id).with_version(version);
		let err = load_configured(&config).unwrap_err();
		assert!(matches!(err, SetupError::VersionMismatch { expected, .. } if expected == version));
	}

	#[test]
	fn handles_keep_their_own_labels() {
		let old = load_generation("v1").unwrap();
		let new = load_generation("v2").unwrap();
		assert_eq!(old.labels().len(), 4);
		assert_eq!(new.labels().len(), 6);
		assert!(!old.knows("graduate"));
		assert!(new.knows("graduate"));
	}

	#[test]
	fn unknown_generation_is_a_setup_error() {
		assert!(matches!(load_generation("v9"), Err(SetupError::UnknownGeneration(id)) if id == "v9"));
	}

	#[test]
	fn declared_version_is_checked() {
		let config = GenerationConfig::new("v2").with_version(1);
		assert!(matches!(
			load_configured(&config),
			Err(SetupError::VersionMismatch {
				expected: 1,
				declared: 2,
				..
			})
		));
		assert!(load_configured(&GenerationConfig::new("v2").with_version(2)).is_ok());
		assert!(load_configured(&GenerationConfig::new("v1")).is_ok());
	}

	#[test]
	fn encode_rejects_labels_of_other_generations() {
		let old = load_generation("v1").unwrap();
		let mut out = Vec::new();
		assert!(matches!(old.codec().encode("Alice", "graduate", &mut out), Err(Error::Encode(_))));
		assert!(out.is_empty());
	}

	#[test]
	fn cross_decode_reads_newer_records() {
		let old = load_generation("v1").unwrap();
		let new = load_generation("v2").unwrap();
		let mut bytes = Vec::new();
		new.codec().encode("Alice", "graduate", &mut bytes).unwrap();
		assert_eq!(
			old.cross_decode(&bytes).unwrap(),
			vec![Decoded {
				name: "Alice".to_owned(),
				label: "freshman",
			}]
		);
		assert_eq!(new.cross_decode(&bytes).unwrap()[0].label, "graduate");
	}
}
