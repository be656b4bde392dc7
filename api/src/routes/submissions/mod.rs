//! Student submission endpoint.

pub mod post;
