//! Bug record construction from a single report file.

use crate::markers::{extract_marker, BUG_CATEGORY, BUG_DESC, BUG_FILE, BUG_TYPE};
use crate::models::bug::Bug;
use crate::paths::workspace_relative;
use crate::utils;
use std::fs;
use std::path::Path;

/// Build one `Bug` from a report file.
///
/// Pulls the four markers out of the report body and shortens the source
/// path to a workspace-relative one. An unreadable report is not fatal to
/// the run: a warning is printed and a record carrying only the report
/// file name comes back.
pub fn bug_from_report(report: &Path, workspace_root: &str) -> Bug {
    let name = report
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| report.to_string_lossy().to_string());

    let contents = match fs::read_to_string(report) {
        Ok(s) => s,
        Err(e) => {
            eprintln!(
                "{} unable to read report {}: {}",
                utils::warn_prefix(),
                report.to_string_lossy(),
                e
            );
            return Bug::bare(name);
        }
    };

    let source_file = extract_marker(&contents, BUG_FILE)
        .map(|p| workspace_relative(&p, workspace_root));

    Bug {
        report_file: name,
        bug_type: extract_marker(&contents, BUG_TYPE),
        bug_description: extract_marker(&contents, BUG_DESC),
        bug_category: extract_marker(&contents, BUG_CATEGORY),
        source_file,
        is_new: None,
    }
}
