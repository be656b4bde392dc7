use crate::response::error_response;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use services::{ServiceError, filename::content_type_for, filename::is_safe_component};

/// Characters left as-is in an RFC 5987 `filename*` value.
const FILENAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    pub student: Option<String>,
}

/// `attachment; filename*=UTF-8''{percent-encoded name}`
pub fn attachment_disposition(file_name: &str) -> String {
    format!(
        "attachment; filename*=UTF-8''{}",
        utf8_percent_encode(file_name, FILENAME_ENCODE_SET)
    )
}

/// GET /api/download?student={name}
///
/// Download a student's graded result. Extensions are tried in the order
/// `.pdf`, `.docx`, `.doc`, `.txt`, `.zip`, `.html`; the first that exists is sent.
///
/// ### Query Parameters
/// - `student` (string, required): The student's name as used for the upload.
///
/// ### Responses
///
/// - `200 OK`: the file bytes, with `Content-Type` from the extension,
///   `Content-Disposition: attachment; filename*=UTF-8''...` and `Cache-Control: no-cache`
/// - `400 Bad Request`
/// ```json
/// { "success": false, "message": "请提供学生姓名参数" }
/// ```
/// - `404 Not Found`
/// ```json
/// { "success": false, "message": "未找到 薛舒文 的批改结果文件" }
/// ```
/// - `500 Internal Server Error`
/// ```json
/// { "success": false, "message": "下载文件时发生错误" }
/// ```
pub async fn download_result(
    State(app_state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Response {
    let student = query.student.unwrap_or_default().trim().to_string();
    if student.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "请提供学生姓名参数");
    }
    if !is_safe_component(&student) {
        return error_response(StatusCode::BAD_REQUEST, "姓名包含非法字符");
    }

    let (file_name, bytes) = match app_state.storage().read_result(&student).await {
        Ok(found) => found,
        Err(ServiceError::NotFound(_)) => {
            return error_response(
                StatusCode::NOT_FOUND,
                format!("未找到 {student} 的批改结果文件"),
            );
        }
        Err(ServiceError::Validation(_)) => {
            return error_response(StatusCode::BAD_REQUEST, "姓名包含非法字符");
        }
        Err(err) => {
            tracing::error!(student = %student, error = %err, "Failed to read result file");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "下载文件时发生错误");
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type_for(&file_name)),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&attachment_disposition(&file_name))
            .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    tracing::info!(student = %student, file = %file_name, size = bytes.len(), "Serving result");
    (StatusCode::OK, headers, bytes).into_response()
}
