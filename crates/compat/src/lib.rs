//! Cross-generation compatibility matrix.
//!
//! Every configured schema generation writes a sample, either live or from a
//! recording made when that generation was current, and every generation
//! reads every sample. A pair passes when decoding completes, no record is
//! lost, names survive, and each label is either the one written or, when the
//! reader predates it, the reader's fallback label.
//!
//! ```rust,no_run
//! use rollbook_compat::{MatrixConfig, RandomNames, run_matrix};
//!
//! let config = MatrixConfig::default().with_fixtures("crates/compat/fixtures");
//! let report = run_matrix(&config, &mut RandomNames::new())?;
//! println!("{report}");
//! assert!(report.passed());
//! # Ok::<(), rollbook_compat::SetupError>(())
//! ```

mod config;
mod err;
mod fixture;
mod handle;
mod matrix;
mod names;
mod report;
mod sample;

pub use config::{DEFAULT_FIXTURES, GenerationConfig, MatrixConfig};
pub use err::SetupError;
pub use fixture::{FIXTURE_EXTENSION, FixtureStore};
pub use handle::{
	Codec, Decoded, GENERATIONS, GenerationHandle, Loaded, load_configured, load_generation,
};
pub use matrix::{check_pair, run_matrix, run_pairs};
pub use names::{FixedNames, NAME_LENGTH, NameSource, RandomNames};
pub use report::{Failure, MatrixReport, Mismatch, PairReport};
pub use sample::{Origin, Sample, produce_sample};
