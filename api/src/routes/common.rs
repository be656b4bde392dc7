//! Shared multipart parsing and form validation for the upload endpoints.

use crate::response::error_response;
use axum::body::Bytes;
use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::Response;
use services::filename::is_safe_component;
use std::borrow::Cow;
use std::collections::HashMap;
use validator::{Validate, ValidationError, ValidationErrors};

/// The file part of an upload form.
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Text fields plus at most one file read from a multipart body.
#[derive(Debug, Default)]
pub struct UploadForm {
    fields: HashMap<String, String>,
    pub file: Option<UploadedFile>,
}

impl UploadForm {
    /// Trimmed value of a text field, empty if absent.
    pub fn text(&self, name: &str) -> String {
        self.fields
            .get(name)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }
}

/// Reads every part of the body. A `file` part without a file name (what a
/// browser sends when no file was chosen) counts as no file.
pub async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, MultipartError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let bytes = field.bytes().await?;
                if !file_name.is_empty() {
                    form.file = Some(UploadedFile { file_name, bytes });
                }
            }
            "" => continue,
            _ => {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }
    }

    Ok(form)
}

/// Error response for a body that could not be read as a form. A body over
/// the upload limit is a 413, anything else a 400.
pub fn upload_form_rejection(err: &MultipartError) -> Response {
    match err.status() {
        StatusCode::PAYLOAD_TOO_LARGE => error_response(StatusCode::PAYLOAD_TOO_LARGE, "文件过大"),
        _ => error_response(StatusCode::BAD_REQUEST, "表单数据无效"),
    }
}

#[derive(Debug, Validate)]
pub struct SubmissionForm {
    #[validate(length(min = 1, message = "请输入姓名"))]
    pub name: String,
}

#[derive(Debug, Validate)]
pub struct ResultForm {
    #[validate(
        length(min = 1, message = "请选择学生"),
        custom(function = "validate_path_safe")
    )]
    pub student_name: String,
}

/// Names are joined onto storage paths, so they must be a single component.
pub fn validate_path_safe(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || is_safe_component(value) {
        Ok(())
    } else {
        Err(ValidationError::new("unsafe_name").with_message(Cow::from("姓名包含非法字符")))
    }
}

/// First human-readable message among the validation failures.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .next()
        .unwrap_or_else(|| "表单数据无效".to_string())
}
