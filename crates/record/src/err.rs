use std::io::{Error as IoError, ErrorKind};

use ciborium::de::Error as DecodeError;
use ciborium::ser::Error as EncodeError;
use thiserror::Error;

/// An error raised while moving records to or from their encoded form.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// A field set could not be written
	#[error("Failed to encode record: {0}")]
	Encode(String),

	/// The input ended part way through a record
	#[error("The record stream ended in the middle of record {index}")]
	Truncated {
		index: usize,
	},

	/// The bytes at this position are not a valid record
	#[error("Record {index} is malformed: {message}")]
	Malformed {
		index: usize,
		message: String,
	},

	/// A single record was expected, but more data followed it
	#[error("Found unexpected data after record {index}")]
	TrailingData {
		index: usize,
	},

	/// A single record was expected, but the input was empty
	#[error("The input does not contain a record")]
	Empty,

	/// The underlying reader or writer failed
	#[error("I/O error on the record stream: {0}")]
	Io(#[from] IoError),
}

impl Error {
	/// The position of the record this error refers to, if any
	pub fn index(&self) -> Option<usize> {
		match self {
			Error::Truncated {
				index,
			}
			| Error::Malformed {
				index,
				..
			}
			| Error::TrailingData {
				index,
			} => Some(*index),
			_ => None,
		}
	}

	pub(crate) fn decoding(index: usize, err: DecodeError<IoError>) -> Self {
		match err {
			DecodeError::Io(e) if e.kind() == ErrorKind::UnexpectedEof => Error::Truncated {
				index,
			},
			DecodeError::Io(e) => Error::Io(e),
			DecodeError::Syntax(offset) => Error::Malformed {
				index,
				message: format!("invalid CBOR at byte {offset}"),
			},
			DecodeError::Semantic(_, message) => Error::Malformed {
				index,
				message,
			},
			DecodeError::RecursionLimitExceeded => Error::Malformed {
				index,
				message: "nesting is too deep".to_owned(),
			},
		}
	}
}

impl From<EncodeError<IoError>> for Error {
	fn from(err: EncodeError<IoError>) -> Self {
		match err {
			EncodeError::Io(e) => Error::Io(e),
			EncodeError::Value(message) => Error::Encode(message),
		}
	}
}
