//! On-disk naming conventions.
//!
//! - submissions: `{name}_{millis}.{ext}`
//! - graded results: `{name}_批改结果.{ext}`
//!
//! The submitter is recovered from a submission filename with
//! `^(.+?)_\d+\.`; anything that does not match decodes to the whole filename.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Suffix marking a graded result file.
pub const RESULT_SUFFIX: &str = "_批改结果";

/// Placeholder kept in otherwise empty storage directories.
pub const PLACEHOLDER: &str = ".gitkeep";

/// Result lookup order. The first extension present on disk wins.
pub const RESULT_EXTENSIONS: [&str; 6] = [".pdf", ".docx", ".doc", ".txt", ".zip", ".html"];

static SUBMITTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)_\d+\.").expect("submitter pattern is valid"));

fn is_kept_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Trims `name` and replaces everything outside `[A-Za-z0-9]` and
/// U+4E00..=U+9FA5 with `_`.
pub fn sanitize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if is_kept_char(c) { c } else { '_' })
        .collect()
}

/// Extension of an uploaded file's original name, with its leading dot.
///
/// Returns an empty string when there is none, or when it would carry a path
/// separator into the stored name.
pub fn extension_of(original_file_name: &str) -> String {
    match Path::new(original_file_name)
        .extension()
        .and_then(|e| e.to_str())
    {
        Some(ext) if !ext.contains(['/', '\\', '\0']) => format!(".{ext}"),
        _ => String::new(),
    }
}

/// Stored name for a student submission.
pub fn submission_file_name(name: &str, original_file_name: &str, millis: i64) -> String {
    format!(
        "{}_{}{}",
        sanitize_name(name),
        millis,
        extension_of(original_file_name)
    )
}

/// Stored name for a graded result. The student name is only trimmed; the
/// extension is lowercased so lookups over `RESULT_EXTENSIONS` find it.
pub fn result_file_name(student: &str, ext: &str) -> String {
    format!(
        "{}{}{}",
        student.trim(),
        RESULT_SUFFIX,
        ext.to_lowercase()
    )
}

/// Recovers the submitter name from a stored submission filename.
pub fn decode_submitter(file_name: &str) -> &str {
    SUBMITTER_RE
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map_or(file_name, |m| m.as_str())
}

/// Rejects names that would escape a storage directory once joined to it.
pub fn is_safe_component(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// `Content-Type` for a result file, keyed by extension (case-insensitive).
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "doc" => "application/msword",
        "txt" => "text/plain; charset=utf-8",
        "html" => "text/html; charset=utf-8",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}
