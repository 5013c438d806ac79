//! The tools module provides helper functions for huffpack.
//!
//! The tools are:
//! - cli: Command line interface and user options.
//! - freq_count: Frequency count of an input sequence.
//! - report: Code table listing and compression summary.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
