//! Browser front ends: submission form, result upload, statistics.

use axum::{Router, routing::get};
use get::{admin_page, index_page, stats_page};

pub mod get;

/// - `GET /` → submission form
/// - `GET /admin` → graded result upload
/// - `GET /stats` → submission statistics
pub fn pages_routes() -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/admin", get(admin_page))
        .route("/stats", get(stats_page))
}
