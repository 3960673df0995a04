//! Module defining the matrix configuration schema.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::err::SetupError;

/// The default directory holding recorded samples
pub const DEFAULT_FIXTURES: &str = "fixtures";

/// Root matrix config struct.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MatrixConfig {
	/// Directory of recorded samples, relative to the config file
	#[serde(default = "default_fixtures")]
	pub fixtures: PathBuf,
	/// Every generation taking part, both as a writer and as a reader
	#[serde(default, rename = "generation")]
	pub generations: Vec<GenerationConfig>,
	#[serde(skip_serializing)]
	#[serde(flatten)]
	_unused_keys: BTreeMap<String, toml::Value>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GenerationConfig {
	/// The id the generation is registered under
	pub id: String,
	/// The version the codec must declare, if checked
	pub version: Option<u32>,
	/// A recorded sample to read instead of producing a fresh one
	pub sample: Option<String>,
	#[serde(skip_serializing)]
	#[serde(flatten)]
	_unused_keys: BTreeMap<String, toml::Value>,
}

fn default_fixtures() -> PathBuf {
	PathBuf::from(DEFAULT_FIXTURES)
}

impl Default for MatrixConfig {
	/// Both generations, with the first generation read from the sample
	/// recorded before the second one existed.
	fn default() -> Self {
		Self {
			fixtures: default_fixtures(),
			generations: vec![
				GenerationConfig::new("v1").with_version(1).with_sample("v1"),
				GenerationConfig::new("v2").with_version(2),
			],
			_unused_keys: BTreeMap::new(),
		}
	}
}

impl MatrixConfig {
	pub fn new(fixtures: impl Into<PathBuf>, generations: Vec<GenerationConfig>) -> Self {
		Self {
			fixtures: fixtures.into(),
			generations,
			_unused_keys: BTreeMap::new(),
		}
	}

	/// Parses a configuration from TOML source.
	pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(source)
	}

	/// Loads a configuration file, resolving the fixture directory relative
	/// to the file.
	pub fn from_file(path: &Path) -> Result<Self, SetupError> {
		let source = std::fs::read_to_string(path).map_err(|e| SetupError::Config {
			path: path.to_owned(),
			message: e.to_string(),
		})?;
		let mut config = Self::parse(&source).map_err(|e| SetupError::Config {
			path: path.to_owned(),
			message: e.to_string(),
		})?;
		if config.fixtures.is_relative() {
			if let Some(dir) = path.parent() {
				config.fixtures = dir.join(&config.fixtures);
			}
		}
		Ok(config)
	}

	/// Replaces the fixture directory.
	pub fn with_fixtures(mut self, fixtures: impl Into<PathBuf>) -> Self {
		self.fixtures = fixtures.into();
		self
	}

	/// Returns the keys which were present in the file but are not understood.
	pub fn unused_keys(&self) -> Vec<String> {
		let mut res: Vec<_> = self._unused_keys.keys().cloned().collect();
		for g in self.generations.iter() {
			res.extend(g._unused_keys.keys().map(|k| format!("generation.{}.{k}", g.id)));
		}
		res
	}
}

impl GenerationConfig {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			version: None,
			sample: None,
			_unused_keys: BTreeMap::new(),
		}
	}

	pub fn with_version(mut self, version: u32) -> Self {
		self.version = Some(version);
		self
	}

	pub fn with_sample(mut self, sample: impl Into<String>) -> Self {
		self.sample = Some(sample.into());
		self
	}
}
