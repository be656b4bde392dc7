//! HTTP route entry point for `/api/...`.
//!
//! Route groups include:
//! - `/health` → Health check endpoint
//! - `/upload` → Student submissions
//! - `/upload-result`, `/download` → Graded results
//! - `/stats` → Submission statistics against the roster
//! - `/roster` → The roster and its accepted name variants

use crate::routes::{
    health::health_routes,
    results::{get::download_result, post::upload_result},
    roster::get::get_roster,
    stats::get::get_stats,
    submissions::post::upload_submission,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod common;
pub mod health;
pub mod pages;
pub mod results;
pub mod roster;
pub mod stats;
pub mod submissions;

/// Builds the router for all JSON endpoints, with state applied.
///
/// # Route Structure:
/// - `GET /health`
/// - `POST /upload` (multipart: `name`, `file`)
/// - `POST /upload-result` (multipart: `studentName`, `file`)
/// - `GET /stats`
/// - `GET /download?student={name}`
/// - `GET /roster`
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .route("/upload", post(upload_submission))
        .route("/upload-result", post(upload_result))
        .route("/stats", get(get_stats))
        .route("/download", get(download_result))
        .route("/roster", get(get_roster))
        .with_state(app_state)
}
