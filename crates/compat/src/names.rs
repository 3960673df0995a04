use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The length of generated names
pub const NAME_LENGTH: usize = 26;

/// An opaque source of names for sample records.
pub trait NameSource {
	fn next_name(&mut self) -> String;
}

/// Random alphanumeric names.
pub struct RandomNames {
	rng: StdRng,
	length: usize,
}

impl RandomNames {
	/// Names seeded from the operating system
	pub fn new() -> Self {
		Self {
			rng: StdRng::from_entropy(),
			length: NAME_LENGTH,
		}
	}

	/// A reproducible sequence of names
	pub fn seeded(seed: u64) -> Self {
		Self {
			rng: StdRng::seed_from_u64(seed),
			length: NAME_LENGTH,
		}
	}

	pub fn with_length(mut self, length: usize) -> Self {
		self.length = length;
		self
	}
}

impl Default for RandomNames {
	fn default() -> Self {
		Self::new()
	}
}

impl NameSource for RandomNames {
	fn next_name(&mut self) -> String {
		(&mut self.rng).sample_iter(&Alphanumeric).take(self.length).map(char::from).collect()
	}
}

/// Cycles through a fixed list of names.
#[derive(Clone, Debug)]
pub struct FixedNames {
	names: Vec<String>,
	next: usize,
}

impl FixedNames {
	pub fn new<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			names: names.into_iter().map(Into::into).collect(),
			next: 0,
		}
	}
}

impl NameSource for FixedNames {
	fn next_name(&mut self) -> String {
		if self.names.is_empty() {
			return String::new();
		}
		let name = self.names[self.next % self.names.len()].clone();
		self.next += 1;
		name
	}
}
