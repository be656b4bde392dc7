//! Submission bookkeeping for the portal: the class roster, filename
//! conventions, flat-directory storage and the statistics built from them.

pub mod error;
pub mod filename;
pub mod roster;
pub mod stats;
pub mod storage;

pub use error::{ServiceError, ServiceResult};
