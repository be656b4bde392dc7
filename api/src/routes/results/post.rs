use crate::response::{ApiResponse, error_response};
use crate::routes::common::{
    ResultForm, first_validation_message, read_upload_form, upload_form_rejection,
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
pub struct ResultReceipt {
    pub student_name: String,
    pub file_name: String,
    pub file_path: String,
}

/// POST /api/upload-result
///
/// Store a graded result as `{studentName}_批改结果.{ext}`. A result with the
/// same student and extension is overwritten.
///
/// ### Request Body (Multipart Form Data)
/// - `studentName` (string, required)
/// - `file` (file, required)
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "message": "批改结果上传成功！",
///   "studentName": "薛舒文",
///   "fileName": "薛舒文_批改结果.pdf",
///   "filePath": "/results/薛舒文_批改结果.pdf"
/// }
/// ```
///
/// - `400 Bad Request`
/// ```json
/// { "success": false, "message": "未选择文件" } // or "请选择学生" or "姓名包含非法字符"
/// ```
///
/// - `413 Payload Too Large`
/// ```json
/// { "success": false, "message": "文件过大" }
/// ```
///
/// - `500 Internal Server Error`
/// ```json
/// { "success": false, "message": "上传失败，请重试" }
/// ```
pub async fn upload_result(State(app_state): State<AppState>, multipart: Multipart) -> Response {
    let form = match read_upload_form(multipart).await {
        Ok(form) => form,
        Err(err) => {
            tracing::warn!(error = %err, "Malformed result form");
            return upload_form_rejection(&err);
        }
    };

    let Some(file) = form.file.as_ref() else {
        return error_response(StatusCode::BAD_REQUEST, "未选择文件");
    };

    let result = ResultForm {
        student_name: form.text("studentName"),
    };
    if let Err(errors) = result.validate() {
        return error_response(StatusCode::BAD_REQUEST, first_validation_message(&errors));
    }

    if !app_state.roster().contains(&result.student_name) {
        tracing::warn!(student = %result.student_name, "Result uploaded for a name not on the roster");
    }

    match app_state
        .storage()
        .save_result(&result.student_name, &file.file_name, &file.bytes)
        .await
    {
        Ok(stored) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ResultReceipt {
                    student_name: result.student_name,
                    file_path: format!("/results/{stored}"),
                    file_name: stored,
                },
                "批改结果上传成功！",
            )),
        )
            .into_response(),
        Err(ServiceError::Validation(_)) => {
            error_response(StatusCode::BAD_REQUEST, "姓名包含非法字符")
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to store result");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "上传失败，请重试")
        }
    }
}
