//! Common utilities for the kata exercises.
//!
//! This crate provides shared infrastructure used by the exercise crates and
//! the command-line driver:
//! - **Warning System** - deduplicated, colored diagnostics on stderr

pub mod warning;
