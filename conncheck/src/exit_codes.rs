//! Stable exit codes for the conncheck CLI.

/// Report written, or `--help`/`--version` printed.
pub const OK: i32 = 0;
/// Report could not be produced or written.
pub const FAILURE: i32 = 1;
/// Malformed command-line arguments. Same value clap uses for usage errors.
pub const USAGE: i32 = 2;
