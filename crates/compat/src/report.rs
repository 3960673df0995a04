use std::fmt;

/// What went wrong when one generation read another's sample.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mismatch {
	/// The writer could not read back its own recorded sample
	UnreadableSample(String),
	/// Decoding the sample failed
	Decode(String),
	/// The number of decoded records is wrong
	Count {
		expected: usize,
		actual: usize,
	},
	/// The decoded label is not one the reader defines
	UnknownLabel(String),
	/// The decoded label is not the written one, nor the reader's fallback
	Label {
		expected: String,
		actual: String,
	},
	/// The decoded name differs from the written one
	Name {
		expected: String,
		actual: String,
	},
}

impl fmt::Display for Mismatch {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Mismatch::UnreadableSample(e) => write!(f, "the writer can not read its own sample: {e}"),
			Mismatch::Decode(e) => write!(f, "decoding failed: {e}"),
			Mismatch::Count {
				expected,
				actual,
			} => write!(f, "expected {expected} records, got {actual}"),
			Mismatch::UnknownLabel(label) => {
				write!(f, "decoded the label `{label}`, which the reader does not define")
			}
			Mismatch::Label {
				expected,
				actual,
			} => write!(f, "expected label `{expected}`, got `{actual}`"),
			Mismatch::Name {
				expected,
				actual,
			} => write!(f, "expected name `{expected}`, got `{actual}`"),
		}
	}
}

/// A single failed assertion within a pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Failure {
	/// The record the failure refers to, if it refers to one
	pub index: Option<usize>,
	pub mismatch: Mismatch,
}

impl fmt::Display for Failure {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.index {
			Some(i) => write!(f, "record {i}: {}", self.mismatch),
			None => write!(f, "{}", self.mismatch),
		}
	}
}

/// The outcome of reading one writer's sample with one reader.
#[derive(Clone, Debug)]
pub struct PairReport {
	pub writer: String,
	pub reader: String,
	/// Records decoded
	pub records: usize,
	/// Records whose label the reader replaced with its fallback
	pub coarsened: usize,
	pub failures: Vec<Failure>,
}

impl PairReport {
	pub fn new(writer: impl Into<String>, reader: impl Into<String>) -> Self {
		Self {
			writer: writer.into(),
			reader: reader.into(),
			records: 0,
			coarsened: 0,
			failures: Vec::new(),
		}
	}

	pub fn passed(&self) -> bool {
		self.failures.is_empty()
	}

	pub(crate) fn fail(&mut self, index: Option<usize>, mismatch: Mismatch) {
		self.failures.push(Failure {
			index,
			mismatch,
		});
	}
}

impl fmt::Display for PairReport {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} => {}: ", self.writer, self.reader)?;
		if !self.passed() {
			writeln!(f, "FAILED")?;
			for failure in self.failures.iter() {
				writeln!(f, "    - {failure}")?;
			}
			return Ok(());
		}
		write!(f, "ok, {} records", self.records)?;
		if self.coarsened > 0 {
			write!(f, " ({} coarsened)", self.coarsened)?;
		}
		writeln!(f)
	}
}

/// Every pair of one matrix run.
#[derive(Clone, Debug, Default)]
pub struct MatrixReport {
	pairs: Vec<PairReport>,
}

impl MatrixReport {
	pub fn push(&mut self, pair: PairReport) {
		self.pairs.push(pair);
	}

	pub fn pairs(&self) -> &[PairReport] {
		&self.pairs
	}

	/// Looks up the pair for a writer and reader
	pub fn pair(&self, writer: &str, reader: &str) -> Option<&PairReport> {
		self.pairs.iter().find(|p| p.writer == writer && p.reader == reader)
	}

	pub fn passed(&self) -> bool {
		self.pairs.iter().all(PairReport::passed)
	}

	pub fn failed(&self) -> impl Iterator<Item = &PairReport> {
		self.pairs.iter().filter(|p| !p.passed())
	}
}

impl fmt::Display for MatrixReport {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for pair in self.pairs.iter() {
			write!(f, "{pair}")?;
		}
		write!(f, "{} pairs, {} failed", self.pairs.len(), self.failed().count())
	}
}
