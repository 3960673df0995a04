use std::io::Error as IoError;
use std::path::PathBuf;

use rollbook_record::Error as RecordError;
use thiserror::Error;

/// An error which prevents the matrix from running at all.
///
/// These are never retried. Problems found while decoding are not setup
/// errors; they are reported per pair in the [`MatrixReport`](crate::MatrixReport).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SetupError {
	/// No codec is registered under this generation id
	#[error("Unknown schema generation `{0}`")]
	UnknownGeneration(String),

	/// The same generation was listed twice
	#[error("Schema generation `{0}` is listed more than once")]
	DuplicateGeneration(String),

	/// The configuration expects a different version than the codec declares
	#[error("Schema generation `{id}` is expected to be version {expected}, but declares version {declared}")]
	VersionMismatch {
		id: String,
		expected: u32,
		declared: u32,
	},

	/// The configuration does not list any generations
	#[error("No schema generations are configured")]
	NoGenerations,

	/// A fixture id could not be turned into a path
	#[error("Invalid fixture id `{0}`")]
	InvalidFixture(String),

	/// A fixture could not be found or read
	#[error("Missing fixture `{id}` at {}: {source}", .path.display())]
	MissingFixture {
		id: String,
		path: PathBuf,
		#[source]
		source: IoError,
	},

	/// The matrix configuration could not be loaded
	#[error("Failed to load the matrix configuration at {}: {message}", .path.display())]
	Config {
		path: PathBuf,
		message: String,
	},

	/// A generation could not encode its own sample
	#[error("Failed to produce a sample for schema generation `{id}`: {source}")]
	Sample {
		id: String,
		#[source]
		source: RecordError,
	},
}
