//! Assembles the complete router: JSON API, views and the read-only
//! storage directories.

use crate::{
    middleware::log_request,
    response::error_response,
    routes::{pages::pages_routes, routes},
    state::AppState,
};
use axum::{Router, extract::DefaultBodyLimit, http::StatusCode, middleware::from_fn};
use tower_http::services::ServeDir;

/// Builds the application.
///
/// - `/api/...` → JSON endpoints (see [`routes`])
/// - `/`, `/admin`, `/stats` → embedded pages
/// - `/uploads/{file}`, `/results/{file}` → stored files, served as-is
///
/// `body_limit` caps request bodies, and therefore upload sizes, in bytes.
pub fn build_app(app_state: AppState, body_limit: usize) -> Router {
    let uploads = ServeDir::new(app_state.storage().uploads_dir());
    let results = ServeDir::new(app_state.storage().results_dir());

    Router::new()
        .nest("/api", routes(app_state))
        .merge(pages_routes())
        .nest_service("/uploads", uploads)
        .nest_service("/results", results)
        .fallback(|| async { error_response(StatusCode::NOT_FOUND, "Not found") })
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(from_fn(log_request))
}
