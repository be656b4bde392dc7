use crate::response::{ApiResponse, error_response};
use crate::routes::common::{
    SubmissionForm, first_validation_message, read_upload_form, upload_form_rejection,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use services::ServiceError;
use validator::Validate;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub name: String,
    pub file: String,
    pub upload_path: String,
}

/// POST /api/upload
///
/// Store a student's submission as `{name}_{timestampMillis}.{ext}`.
///
/// ### Request Body (Multipart Form Data)
/// - `name` (string, required): The submitter's name. Trimmed; characters outside
///   ASCII letters, digits and common CJK ideographs become `_` in the stored name.
/// - `file` (file, required): The submitted file.
///
/// ### Responses
///
/// - `200 OK`
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
/// - `400 Bad Request`
/// ```json
/// { "success": false, "message": "未选择文件" } // or "请输入姓名" or "表单数据无效"
/// ```
///
/// - `413 Payload Too Large`
/// ```json
/// { "success": false, "message": "文件过大" }
/// ```
///
/// - `500 Internal Server Error`
/// ```json
/// { "success": false, "message": "文件上传失败，请重试" }
/// ```
pub async fn upload_submission(
    State(app_state): State<AppState>,
    multipart: Multipart,
) -> Response {
    let form = match read_upload_form(multipart).await {
        Ok(form) => form,
        Err(err) => {
            tracing::warn!(error = %err, "Malformed submission form");
            return upload_form_rejection(&err);
        }
    };

    let Some(file) = form.file.as_ref() else {
        return error_response(StatusCode::BAD_REQUEST, "未选择文件");
    };

    let submission = SubmissionForm {
        name: form.text("name"),
    };
    if let Err(errors) = submission.validate() {
        return error_response(StatusCode::BAD_REQUEST, first_validation_message(&errors));
    }

    match app_state
        .storage()
        .save_submission(&submission.name, &file.file_name, &file.bytes)
        .await
    {
        Ok(stored) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SubmissionReceipt {
                    name: submission.name,
                    upload_path: format!("/uploads/{stored}"),
                    file: stored,
                },
                "文件上传成功！",
            )),
        )
            .into_response(),
        Err(ServiceError::Validation(_)) => error_response(StatusCode::BAD_REQUEST, "请输入姓名"),
        Err(err) => {
            tracing::error!(error = %err, "Failed to store submission");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "文件上传失败，请重试")
        }
    }
}
