//! Cross-references stored submissions against the roster.
//!
//! Filenames are grouped by decoded submitter name. Every group that spells
//! a roster student (directly or through a listed variant) is merged into
//! that student, so a student who submitted under two spellings is counted
//! once with all files. Groups that spell no roster student are reported as
//! invalid submissions.

use crate::error::ServiceResult;
use crate::filename::decode_submitter;
use crate::roster::Roster;
use crate::storage::Storage;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Submitted,
    NotSubmitted,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStat {
    pub name: String,
    pub status: SubmissionStatus,
    pub file_count: usize,
    pub files: Vec<String>,
    /// Spellings this student's files were submitted under.
    pub submitted_names: Vec<String>,
    pub has_result: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidSubmission {
    pub name: String,
    pub file_count: usize,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub total_students: usize,
    pub total_files: usize,
    pub submitted_count: usize,
    pub not_submitted_count: usize,
    pub invalid_count: usize,
    pub submission_rate: f64,
    pub students: Vec<StudentStat>,
    pub invalid_submissions: Vec<InvalidSubmission>,
    pub last_updated: String,
}

/// Groups stored filenames by decoded submitter, in name order.
pub fn group_by_submitter<'a, I>(files: I) -> BTreeMap<String, Vec<String>>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for file in files {
        groups
            .entry(decode_submitter(file).to_string())
            .or_default()
            .push(file.clone());
    }
    groups
}

/// Percentage with one decimal place: `round(n / total * 1000) / 10`.
pub fn submission_rate(submitted: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (submitted as f64 / total as f64 * 1000.0).round() / 10.0
}

struct Tally {
    files: Vec<String>,
    names: Vec<String>,
}

/// Builds the report from a listing of the uploads directory.
///
/// `result_for` maps a canonical name to its result file name, if any.
pub fn build_report<F>(roster: &Roster, files: &[String], mut result_for: F) -> StatsReport
where
    F: FnMut(&str) -> Option<String>,
{
    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();
    let mut invalid_submissions = Vec::new();

    for (submitted_name, group) in group_by_submitter(files) {
        match roster.canonical_for(&submitted_name) {
            Some(canonical) => {
                let tally = tallies.entry(canonical).or_insert_with(|| Tally {
                    files: Vec::new(),
                    names: Vec::new(),
                });
                tally.files.extend(group);
                tally.names.push(submitted_name);
            }
            None => invalid_submissions.push(InvalidSubmission {
                name: submitted_name,
                file_count: group.len(),
                files: group,
            }),
        }
    }

    let students: Vec<StudentStat> = roster
        .students()
        .iter()
        .map(|name| {
            let result_file_name = result_for(name);
            let (status, files, submitted_names) = match tallies.remove(name.as_str()) {
                Some(t) => (SubmissionStatus::Submitted, t.files, t.names),
                None => (SubmissionStatus::NotSubmitted, Vec::new(), Vec::new()),
            };
            StudentStat {
                name: name.clone(),
                status,
                file_count: files.len(),
                files,
                submitted_names,
                has_result: result_file_name.is_some(),
                result_file_name,
            }
        })
        .collect();

    let submitted_count = students
        .iter()
        .filter(|s| s.status == SubmissionStatus::Submitted)
        .count();

    StatsReport {
        total_students: roster.len(),
        total_files: files.len(),
        submitted_count,
        not_submitted_count: roster.len() - submitted_count,
        invalid_count: invalid_submissions.len(),
        submission_rate: submission_rate(submitted_count, roster.len()),
        students,
        invalid_submissions,
        last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Scans storage and builds the full report.
pub async fn collect_stats(roster: &Roster, storage: &Storage) -> ServiceResult<StatsReport> {
    let files = storage.list_submissions().await?;

    let mut results = BTreeMap::new();
    for name in roster.students() {
        if let Some(found) = storage.find_result(name).await {
            results.insert(name.as_str(), found);
        }
    }

    let report = build_report(roster, &files, |name| results.get(name).cloned());
    tracing::debug!(
        files = report.total_files,
        submitted = report.submitted_count,
        invalid = report.invalid_count,
        "Computed submission stats"
    );
    Ok(report)
}
