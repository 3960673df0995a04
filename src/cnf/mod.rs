/// The publicly visible name of the command line tool
pub const PKG_NAME: &str = "rollbook";

/// The version of the command line tool
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The matrix configuration read when none is given
pub const DEFAULT_CONFIG: &str = "rollbook.toml";

/// The recorded samples used with the default matrix, relative to the
/// repository root
pub const DEFAULT_FIXTURES: &str = "crates/compat/fixtures";

/// The log filter used when none is given
pub const DEFAULT_LOG: &str = "info";

/// The environment variable holding the log filter
pub const LOG_ENV: &str = "ROLLBOOK_LOG";

pub const INFO: &str = "
Reads and writes versioned person records, and checks that every schema
generation can read the records of every other generation.
";
