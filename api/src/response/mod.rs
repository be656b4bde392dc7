use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// The payload's fields are flattened next to `success` and `message`:
/// ```json
/// {
///   "success": true,
///   "message": "文件上传成功！",
///   "name": "陈曦",
///   "file": "陈曦_1700000000000.pdf",
///   "uploadPath": "/uploads/陈曦_1700000000000.pdf"
/// }
/// ```
///
/// Endpoints that return a single document wrap it in [`Data`], producing
/// `{ "success": true, "message": "...", "data": { ... } }`.
///
/// Errors carry no payload:
/// ```json
/// { "success": false, "message": "未选择文件" }
/// ```
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub payload: T,
}

/// Payload placing its contents under a `data` key.
#[derive(Debug, Default, Serialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given payload and message.
    pub fn success(payload: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            payload,
        }
    }

    /// Constructs an error response with a message and default payload.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            message: message.into(),
            payload: T::default(),
        }
    }
}

/// `{ success: false, message }` with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<()>::error(message))).into_response()
}
