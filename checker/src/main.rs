use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use services::{
    roster::Roster,
    stats::{StatsReport, SubmissionStatus, collect_stats},
    storage::Storage,
};
use std::fmt::Write as _;
use std::path::PathBuf;
use util::paths::storage_root;

#[derive(Parser, Debug)]
#[command(version, about = "Report which students on the roster have submitted")]
struct Args {
    /// Directory holding `uploads/` and `results/`. Defaults to STORAGE_ROOT.
    #[arg(long)]
    storage_root: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let root = args.storage_root.unwrap_or_else(storage_root);
    let storage = Storage::from_root(&root);
    let roster = Roster::builtin();

    let report = collect_stats(roster, &storage)
        .await
        .with_context(|| format!("reading {}", storage.uploads_dir().display()))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    } else {
        print!("{}", render_report(roster, &report));
    }
    Ok(())
}

fn numbered(out: &mut String, index: usize, line: impl std::fmt::Display) {
    let _ = writeln!(out, "{:>2}. {}", index + 1, line);
}

fn render_report(roster: &Roster, report: &StatsReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", format!("名单 (共{}人):", roster.len()).bold());
    for (i, name) in roster.students().iter().enumerate() {
        numbered(&mut out, i, name);
    }
    let _ = writeln!(out, "\n{}\n", "=".repeat(50));

    let _ = writeln!(out, "{}", "统计结果:".bold());
    let _ = writeln!(out, "{}", format!("已提交作业: {}人", report.submitted_count).green());
    let _ = writeln!(out, "{}", format!("未提交作业: {}人", report.not_submitted_count).red());
    let _ = writeln!(out, "{}", format!("不在名单中: {}人", report.invalid_count).yellow());
    let _ = writeln!(out, "总文件数: {}个\n", report.total_files);

    let submitted: Vec<_> = report
        .students
        .iter()
        .filter(|s| s.status == SubmissionStatus::Submitted)
        .collect();
    if !submitted.is_empty() {
        let _ = writeln!(out, "{}", "已提交作业的学生:".green());
        for (i, s) in submitted.iter().enumerate() {
            let mut line = format!("{} ({}个文件)", s.name, s.file_count);
            if s.submitted_names.iter().any(|n| n != &s.name) {
                let _ = write!(line, " 提交名: {}", s.submitted_names.join("、"));
            }
            if s.has_result {
                line.push_str(" [已批改]");
            }
            numbered(&mut out, i, line);
        }
        out.push('\n');
    }

    let missing: Vec<_> = report
        .students
        .iter()
        .filter(|s| s.status == SubmissionStatus::NotSubmitted)
        .collect();
    if !missing.is_empty() {
        let _ = writeln!(out, "{}", "未提交作业的学生:".red());
        for (i, s) in missing.iter().enumerate() {
            numbered(&mut out, i, &s.name);
        }
        out.push('\n');
    }

    if !report.invalid_submissions.is_empty() {
        let _ = writeln!(out, "{}", "不在名单中的提交者:".yellow());
        for (i, inv) in report.invalid_submissions.iter().enumerate() {
            numbered(&mut out, i, format!("{} ({}个文件)", inv.name, inv.file_count));
            for file in &inv.files {
                let _ = writeln!(out, "     - {file}");
            }
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "作业提交率: {:.1}% ({}/{})",
        report.submission_rate, report.submitted_count, report.total_students
    );
    out
}
