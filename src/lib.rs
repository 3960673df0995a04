//! The `rollbook` command line tool.
//!
//! This crate only wires the command line to [`rollbook_record`] and
//! [`rollbook_compat`]. Use those crates directly from other code.

#[macro_use]
extern crate tracing;

mod cli;
mod cnf;
mod telemetry;

pub use cli::init;
