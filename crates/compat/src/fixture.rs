use std::path::{Path, PathBuf};

use tracing::debug;

use crate::err::SetupError;

/// The file extension of recorded samples
pub const FIXTURE_EXTENSION: &str = "cbor";

/// Resolves recorded sample blobs by id.
///
/// A sample with id `v1` lives at `<root>/v1.cbor`. Anything that can not be
/// read is a [`SetupError`]; the store never retries.
#[derive(Clone, Debug)]
pub struct FixtureStore {
	root: PathBuf,
}

impl FixtureStore {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
		}
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Returns the path a fixture with this id is stored at.
	pub fn path(&self, id: &str) -> Result<PathBuf, SetupError> {
		if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
			return Err(SetupError::InvalidFixture(id.to_owned()));
		}
		Ok(self.root.join(format!("{id}.{FIXTURE_EXTENSION}")))
	}

	/// Reads the fixture with this id.
	pub fn load(&self, id: &str) -> Result<Vec<u8>, SetupError> {
		let path = self.path(id)?;
		match std::fs::read(&path) {
			Ok(bytes) => {
				debug!(fixture = id, path = %path.display(), bytes = bytes.len(), "Loaded fixture");
				Ok(bytes)
			}
			Err(source) => Err(SetupError::MissingFixture {
				id: id.to_owned(),
				path,
				source,
			}),
		}
	}
}
