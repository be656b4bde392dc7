//! Application state container shared across Axum route handlers.

use services::{roster::Roster, storage::Storage};
use std::{path::Path, sync::Arc};

/// Central application state shared across the server.
///
/// This includes:
/// - The `Storage` accessor for the uploads and results directories.
/// - The roster submissions are reconciled against.
#[derive(Clone)]
pub struct AppState {
    storage: Arc<Storage>,
    roster: &'static Roster,
}

impl AppState {
    pub fn new(storage: Storage, roster: &'static Roster) -> Self {
        Self {
            storage: Arc::new(storage),
            roster,
        }
    }

    /// State over `{root}/uploads` and `{root}/results` with the builtin roster.
    pub fn from_root(root: &Path) -> Self {
        Self::new(Storage::from_root(root), Roster::builtin())
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn roster(&self) -> &'static Roster {
        self.roster
    }
}
