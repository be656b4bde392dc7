use crate::response::{ApiResponse, Data, error_response};
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::stats::collect_stats;

/// GET /api/stats
///
/// Cross-reference the uploads directory against the roster.
///
/// Submission filenames are decoded to submitter names and matched against
/// every roster student, accepting the recorded traditional/simplified
/// variants. All files submitted under any accepted spelling count toward
/// that student. Submitters that match nobody are listed separately.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "message": "统计数据获取成功",
///   "data": {
///     "totalStudents": 23,
///     "totalFiles": 2,
///     "submittedCount": 1,
///     "notSubmittedCount": 22,
///     "invalidCount": 1,
///     "submissionRate": 4.3,
///     "students": [
///       {
///         "name": "周騫騫",
///         "status": "submitted",
///         "fileCount": 1,
///         "files": ["周骞骞_1700000000000.pdf"],
///         "submittedNames": ["周骞骞"],
///         "hasResult": true,
///         "resultFileName": "周騫騫_批改结果.pdf"
///       }
///     ],
///     "invalidSubmissions": [
///       { "name": "张三", "fileCount": 1, "files": ["张三_1700000000001.pdf"] }
///     ],
///     "lastUpdated": "2024-01-01T00:00:00.000Z"
///   }
/// }
/// ```
///
/// - `500 Internal Server Error`
/// ```json
/// { "success": false, "message": "获取统计数据失败" }
/// ```
pub async fn get_stats(State(app_state): State<AppState>) -> Response {
    match collect_stats(app_state.roster(), app_state.storage()).await {
        Ok(report) => (
            StatusCode::OK,
            Json(ApiResponse::success(Data { data: report }, "统计数据获取成功")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to compute submission stats");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "获取统计数据失败")
        }
    }
}
