//! Sequential framing of records.
//!
//! A stream is a plain concatenation of self-delimiting CBOR maps. There is no
//! record count and no length prefix: the stream ends when the input is
//! exhausted exactly on a record boundary.

use std::io::{BufRead, Write};

use ciborium::Value as Data;

use crate::err::Error;
use crate::field::FieldSet;
use crate::schema::Versioned;

/// Writes the field set of one record to `writer`.
pub fn write_fields<W: Write>(mut writer: W, fields: FieldSet) -> Result<(), Error> {
	ciborium::into_writer(&Data::from(fields), &mut writer)?;
	Ok(())
}

/// Appends one encoded record to `writer`.
pub fn write_record<P: Versioned, W: Write>(writer: W, person: &P) -> Result<(), Error> {
	write_fields(writer, person.to_fields())
}

/// Encodes a single record.
pub fn encode<P: Versioned>(person: &P) -> Result<Vec<u8>, Error> {
	let mut res = Vec::new();
	write_record(&mut res, person)?;
	Ok(res)
}

/// Encodes a sequence of records into one stream.
pub fn encode_all<'a, P, I>(people: I) -> Result<Vec<u8>, Error>
where
	P: Versioned + 'a,
	I: IntoIterator<Item = &'a P>,
{
	let mut res = Vec::new();
	for person in people {
		write_record(&mut res, person)?;
	}
	Ok(res)
}

/// Decodes every record of a stream with the codec of generation `P`.
pub fn decode_all<P: Versioned>(bytes: &[u8]) -> Result<Vec<P>, Error> {
	RecordStream::new(bytes).map(|fields| fields.map(|f| P::from_fields(&f))).collect()
}

/// Decodes a buffer which must hold exactly one record.
pub fn decode_one<P: Versioned>(bytes: &[u8]) -> Result<P, Error> {
	let mut stream = RecordStream::new(bytes);
	let fields = stream.next().ok_or(Error::Empty)??;
	if stream.reader.fill_buf()?.is_empty() {
		Ok(P::from_fields(&fields))
	} else {
		Err(Error::TrailingData {
			index: 0,
		})
	}
}

/// An iterator over the field sets of a record stream.
///
/// Yields `None` once the input is exhausted. After the first error the
/// stream is finished; there is no attempt to resynchronise.
pub struct RecordStream<R> {
	reader: R,
	index: usize,
	done: bool,
}

impl<R: BufRead> RecordStream<R> {
	pub fn new(reader: R) -> Self {
		Self {
			reader,
			index: 0,
			done: false,
		}
	}

	/// The number of records read so far
	pub fn position(&self) -> usize {
		self.index
	}

	fn read(&mut self) -> Option<Result<FieldSet, Error>> {
		match self.reader.fill_buf() {
			Ok([]) => return None,
			Ok(_) => {}
			Err(e) => return Some(Err(Error::Io(e))),
		}
		let index = self.index;
		let data: Data = match ciborium::from_reader(&mut self.reader) {
			Ok(v) => v,
			Err(e) => return Some(Err(Error::decoding(index, e))),
		};
		self.index += 1;
		Some(FieldSet::try_from(data).map_err(|message| Error::Malformed {
			index,
			message: message.to_owned(),
		}))
	}
}

impl<R: BufRead> Iterator for RecordStream<R> {
	type Item = Result<FieldSet, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}
		let res = self.read();
		if !matches!(res, Some(Ok(_))) {
			self.done = true;
		}
		res
	}
}
