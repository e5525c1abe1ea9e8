//! Output rendering for publish and show commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-bug fields and a top-level summary with the verdict.

use crate::models::bug::{Bug, BugSummary};
use crate::models::PublishReport;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn bug_line(bug: &Bug, color: bool) -> String {
    let tag = match bug.is_new {
        Some(true) => {
            if color {
                "⟦new⟧".yellow().bold().to_string()
            } else {
                "⟦new⟧".to_string()
            }
        }
        Some(false) => {
            if color {
                "⟦known⟧".bright_black().to_string()
            } else {
                "⟦known⟧".to_string()
            }
        }
        None => {
            if color {
                "⟦bug⟧".blue().bold().to_string()
            } else {
                "⟦bug⟧".to_string()
            }
        }
    };
    let kind = bug.bug_type.as_deref().unwrap_or("unknown");
    let desc = bug.bug_description.as_deref().unwrap_or("-");
    let file = bug.source_file.as_deref().unwrap_or("-");
    let shown_file = if color {
        file.bold().to_string()
    } else {
        file.to_string()
    };
    format!(
        "{} {} {} — {} ❲{}❳",
        tag, shown_file, kind, desc, bug.report_file
    )
}

/// Print a publish result in the requested format.
pub fn print_publish(report: &PublishReport, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_publish_json(report)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for bug in &report.summary.bugs {
                println!("{}", bug_line(bug, color));
            }
            let v = &report.verdict;
            let summary = format!(
                "— Run {} — bugs={} new={} threshold={} exceeded={}",
                report.summary.run, v.bug_count, v.new_count, v.threshold, v.exceeded
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print a persisted summary (the `show` command).
pub fn print_summary(summary: &BugSummary, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_summary_json(summary)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for bug in &summary.bugs {
                println!("{}", bug_line(bug, color));
            }
            let line = format!(
                "— Run {} — bugs={} new={}",
                summary.run,
                summary.bug_count(),
                summary.new_count()
            );
            if color {
                println!("{}", line.bold());
            } else {
                println!("{}", line);
            }
        }
    }
}

/// Compose publish JSON object (pure) for testing/snapshot purposes.
pub fn compose_publish_json(report: &PublishReport) -> JsonVal {
    json!({
        "run": report.summary.run,
        "bugs": serde_json::to_value(&report.summary.bugs).unwrap(),
        "summary": {
            "bugs": report.verdict.bug_count,
            "new": report.verdict.new_count,
            "threshold": report.verdict.threshold,
            "enabled": report.verdict.enabled,
            "exceeded": report.verdict.exceeded,
        }
    })
}

/// Compose summary JSON object (pure) for the `show` command.
pub fn compose_summary_json(summary: &BugSummary) -> JsonVal {
    json!({
        "run": summary.run,
        "bugs": serde_json::to_value(&summary.bugs).unwrap(),
        "summary": {
            "bugs": summary.bug_count(),
            "new": summary.new_count(),
        }
    })
}
