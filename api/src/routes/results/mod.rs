//! Graded result upload and download.

pub mod get;
pub mod post;
