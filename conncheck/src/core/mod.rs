//! Deterministic, pure logic for building and rendering the report.
//!
//! Core modules must be free of I/O side effects. Everything read from the
//! running process is collected by [`crate::io`] and passed in as plain data.

pub mod config;
pub mod render;
pub mod report;
pub mod steps;
