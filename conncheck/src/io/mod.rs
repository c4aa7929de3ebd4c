//! Reads of process state for report commands.

pub mod environment;
