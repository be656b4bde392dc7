//! Flat-directory storage for submissions and graded results.
//!
//! Writes are single buffered writes; a file with the same name is
//! overwritten. Directories are created on first write.

use crate::error::{ServiceError, ServiceResult};
use crate::filename::{
    PLACEHOLDER, RESULT_EXTENSIONS, extension_of, is_safe_component, result_file_name,
    submission_file_name,
};
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use util::paths::{results_dir, uploads_dir};

#[derive(Debug, Clone)]
pub struct Storage {
    uploads_dir: PathBuf,
    results_dir: PathBuf,
}

impl Storage {
    pub fn new(uploads_dir: impl Into<PathBuf>, results_dir: impl Into<PathBuf>) -> Self {
        Self {
            uploads_dir: uploads_dir.into(),
            results_dir: results_dir.into(),
        }
    }

    /// `{root}/uploads` and `{root}/results`.
    pub fn from_root(root: &Path) -> Self {
        Self::new(uploads_dir(root), results_dir(root))
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Stores a student submission as `{sanitized}_{millis}{.ext}` and
    /// returns the stored file name.
    pub async fn save_submission(
        &self,
        name: &str,
        original_file_name: &str,
        bytes: &[u8],
    ) -> ServiceResult<String> {
        if name.trim().is_empty() {
            return Err(ServiceError::Validation("name is empty".into()));
        }
        let file_name =
            submission_file_name(name, original_file_name, Utc::now().timestamp_millis());
        write_into(&self.uploads_dir, &file_name, bytes).await?;
        tracing::info!(submitter = name.trim(), file = %file_name, size = bytes.len(), "Stored submission");
        Ok(file_name)
    }

    /// Stores a graded result as `{student}_批改结果{.ext}`, replacing any
    /// earlier result with the same extension.
    pub async fn save_result(
        &self,
        student: &str,
        original_file_name: &str,
        bytes: &[u8],
    ) -> ServiceResult<String> {
        if !is_safe_component(student) {
            return Err(ServiceError::Validation(format!(
                "invalid student name: {student:?}"
            )));
        }
        let file_name = result_file_name(student, &extension_of(original_file_name));
        write_into(&self.results_dir, &file_name, bytes).await?;
        tracing::info!(student = student.trim(), file = %file_name, size = bytes.len(), "Stored result");
        Ok(file_name)
    }

    /// Regular files in the uploads directory, placeholder excluded, sorted.
    /// A missing directory is an empty listing.
    pub async fn list_submissions(&self) -> ServiceResult<Vec<String>> {
        let mut entries = match fs::read_dir(&self.uploads_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(dir = %self.uploads_dir.display(), "Uploads directory missing");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name != PLACEHOLDER {
                files.push(name);
            }
        }
        files.sort();
        Ok(files)
    }

    /// File name of the student's result, trying `RESULT_EXTENSIONS` in order.
    /// Lookup failures of any kind count as "no result".
    pub async fn find_result(&self, student: &str) -> Option<String> {
        if !is_safe_component(student) {
            return None;
        }
        for ext in RESULT_EXTENSIONS {
            let file_name = result_file_name(student, ext);
            match fs::metadata(self.results_dir.join(&file_name)).await {
                Ok(meta) if meta.is_file() => return Some(file_name),
                _ => continue,
            }
        }
        None
    }

    /// Reads the student's result file, returning its name and contents.
    pub async fn read_result(&self, student: &str) -> ServiceResult<(String, Vec<u8>)> {
        if !is_safe_component(student) {
            return Err(ServiceError::Validation(format!(
                "invalid student name: {student:?}"
            )));
        }
        let file_name = self
            .find_result(student)
            .await
            .ok_or_else(|| ServiceError::NotFound(format!("no result for {}", student.trim())))?;
        let bytes = fs::read(self.results_dir.join(&file_name)).await?;
        Ok((file_name, bytes))
    }
}

async fn write_into(dir: &Path, file_name: &str, bytes: &[u8]) -> std::io::Result<()> {
    fs::create_dir_all(dir).await?;
    fs::write(dir.join(file_name), bytes).await
}
