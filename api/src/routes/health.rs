use crate::response::{ApiResponse, Data};
use crate::state::AppState;
use axum::{Json, Router, response::IntoResponse, routing::get};

/// Builds the `/health` route group.
///
/// This includes a single `GET /health` endpoint that returns a basic success message.
/// Useful for uptime checks, load balancers, or deployment health monitoring.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// {
///   "success": true,
///   "message": "Health check passed",
///   "data": "OK"
/// }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success(Data { data: "OK" }, "Health check passed"))
}
