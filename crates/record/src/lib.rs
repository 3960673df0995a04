//! Versioned person records.
//!
//! A record is encoded as a map of named fields rather than a positional
//! layout, so that each schema generation can add fields, and every reader
//! can default the fields it does not find. Generations live side by side as
//! the [`v1`] and [`v2`] modules and are used through the [`Versioned`] trait.
//!
//! ```rust
//! use rollbook_record::{decode_all, encode, v1, v2, Versioned};
//!
//! let bytes = encode(&v2::Person::new("Alice", v2::Classification::Graduate))?;
//!
//! // A first generation reader sees the fallback label
//! let old: Vec<v1::Person> = decode_all(&bytes)?;
//! assert_eq!(old[0].classification(), v1::Classification::Freshman);
//!
//! // A second generation reader recovers the real one
//! let new: Vec<v2::Person> = decode_all(&bytes)?;
//! assert_eq!(new[0].classification(), v2::Classification::Graduate);
//! # Ok::<(), rollbook_record::Error>(())
//! ```

mod err;
mod field;
mod schema;
mod stream;

pub mod v1;
pub mod v2;

pub use err::Error;
pub use field::FieldSet;
pub use schema::{Label, Versioned};
pub use stream::{
	RecordStream, decode_all, decode_one, encode, encode_all, write_fields, write_record,
};

/// The newest generation this crate knows about
pub const LATEST_VERSION: u32 = v2::VERSION;
