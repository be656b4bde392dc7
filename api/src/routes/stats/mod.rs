//! Submission statistics.

pub mod get;
