//! Diagnostic report generator for smoke-testing a development environment.
//!
//! A run is strictly linear: parse the command line into an
//! [`AppConfig`](core::config::AppConfig), collect environment facts, synthesize
//! placeholder steps, and render the report as text or JSON.
//!
//! - **[`core`]**: Pure, deterministic logic (configuration, steps, report,
//!   rendering). No I/O.
//! - **[`io`]**: Reads of process state (clock, environment variables, paths).
//!
//! [`check`] ties the two together for the CLI.

pub mod check;
pub mod cli;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(test)]
pub mod test_support;
