use rollbook_record::Error;
use tracing::debug;

use crate::handle::{Decoded, GenerationHandle};
use crate::names::NameSource;

/// Where the bytes of a sample came from
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Origin {
	/// Encoded during this run
	Live,
	/// Read from the fixture with this id
	Recorded(String),
}

/// The encoded records one writer generation produced, together with what
/// they are expected to contain.
#[derive(Clone, Debug)]
pub struct Sample {
	writer: String,
	origin: Origin,
	bytes: Vec<u8>,
	/// One record per label the writer defines
	count: usize,
	expected: Result<Vec<Decoded>, String>,
}

impl Sample {
	/// A sample recorded earlier by the generation behind `writer`.
	///
	/// The expected content is whatever the writer itself reads back from the
	/// recording. If it can not, every pair reading this sample fails.
	pub fn recorded(writer: &GenerationHandle, fixture: &str, bytes: Vec<u8>) -> Self {
		let expected = writer.cross_decode(&bytes).map_err(|e| e.to_string());
		Self {
			writer: writer.id().to_owned(),
			origin: Origin::Recorded(fixture.to_owned()),
			count: writer.labels().len(),
			bytes,
			expected,
		}
	}

	pub fn writer(&self) -> &str {
		&self.writer
	}

	pub fn origin(&self) -> &Origin {
		&self.origin
	}

	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	pub fn count(&self) -> usize {
		self.count
	}

	pub fn expected(&self) -> Result<&[Decoded], &str> {
		match &self.expected {
			Ok(v) => Ok(v),
			Err(e) => Err(e),
		}
	}
}

/// Encodes one person per label of the generation behind `writer`, one after
/// the other, each with a name taken from `names`.
pub fn produce_sample(
	writer: &GenerationHandle,
	names: &mut dyn NameSource,
) -> Result<Sample, Error> {
	let labels = writer.labels();
	let mut bytes = Vec::new();
	let mut expected = Vec::with_capacity(labels.len());
	for label in labels.iter().copied() {
		let name = names.next_name();
		writer.codec().encode(&name, label, &mut bytes)?;
		expected.push(Decoded {
			name,
			label,
		});
	}
	debug!(generation = writer.id(), records = labels.len(), bytes = bytes.len(), "Produced sample");
	Ok(Sample {
		writer: writer.id().to_owned(),
		origin: Origin::Live,
		bytes,
		count: labels.len(),
		expected: Ok(expected),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::handle::load_generation;
	use crate::names::FixedNames;

	#[test]
	fn one_record_per_label() {
		let writer = load_generation("v2").unwrap();
		let sample = produce_sample(&writer, &mut FixedNames::new(["Alice"])).unwrap();
		assert_eq!(sample.writer(), "v2");
		assert_eq!(sample.origin(), &Origin::Live);
		assert_eq!(sample.count(), 6);
		let expected = sample.expected().unwrap();
		assert_eq!(expected.len(), 6);
		assert!(expected.iter().all(|d| d.name == "Alice"));
		assert_eq!(writer.cross_decode(sample.bytes()).unwrap(), expected);
	}

	#[test]
	fn recorded_samples_are_read_by_their_writer() {
		let writer = load_generation("v1").unwrap();
		let live = produce_sample(&writer, &mut FixedNames::new(["Bob"])).unwrap();
		let recorded = Sample::recorded(&writer, "v1", live.bytes().to_vec());
		assert_eq!(recorded.origin(), &Origin::Recorded("v1".to_owned()));
		assert_eq!(recorded.expected().unwrap(), live.expected().unwrap());
	}

	#[test]
	fn unreadable_recording_is_kept_as_an_error() {
		let writer = load_generation("v1").unwrap();
		let recorded = Sample::recorded(&writer, "broken", vec![0xa1]);
		assert!(recorded.expected().is_err());
		assert_eq!(recorded.count(), 4);
	}
}
