//! The publish run: archive, extract, diff, persist, evaluate.
//!
//! Strictly sequential: reports are processed one at a time in locator
//! order. The engine assumes single-writer access to the artifacts folder
//! for the duration of one run; concurrent runs over the same workspace
//! must be serialized by the caller.

use crate::archive::archive_scanner_output;
use crate::bugs::bug_from_report;
use crate::config::Effective;
use crate::diff::{mark_new_bugs, same_bug, MatchFn};
use crate::locate::find_reports;
use crate::models::bug::BugSummary;
use crate::models::{PublishReport, RunVerdict};
use crate::summary;
use crate::threshold;
use crate::utils;
use std::io;

/// Run the full publish cycle for one run with the default bug matcher.
pub fn run_publish(eff: &Effective, run: Option<u32>) -> io::Result<PublishReport> {
    run_publish_with(eff, run, same_bug)
}

/// Publish cycle with an injectable cross-run bug match predicate.
pub fn run_publish_with(
    eff: &Effective,
    run: Option<u32>,
    matcher: MatchFn,
) -> io::Result<PublishReport> {
    let run = run.unwrap_or_else(|| summary::next_run_number(&eff.artifacts_root));
    let workspace_output = eff.workspace_root.join(&eff.output_folder);
    let run_output = summary::run_output_dir(&eff.artifacts_root, run, &eff.output_folder);

    // Archive the scanner output; a failed copy only means this run has
    // nothing to read, not that evaluation itself failed.
    if let Err(e) = archive_scanner_output(&workspace_output, &run_output) {
        eprintln!(
            "{} unable to copy scan-build output to {}: {}",
            utils::error_prefix(),
            run_output.to_string_lossy(),
            e
        );
    }

    // Reports are read from the post-copy artifact folder so later runs see
    // stable paths. No archived folder means zero reports.
    let reports = if run_output.exists() {
        find_reports(&run_output)?
    } else {
        Vec::new()
    };

    let workspace_str = eff.workspace_root.to_string_lossy().to_string();
    let mut current = BugSummary::new(run);
    for report in &reports {
        current.bugs.push(bug_from_report(report, &workspace_str));
    }

    let previous = summary::previous_summary(&eff.artifacts_root, run, &eff.output_folder);
    mark_new_bugs(&mut current.bugs, previous.as_ref(), matcher);

    summary::write_summary(&run_output, &current)?;

    let verdict = RunVerdict {
        bug_count: current.bug_count(),
        new_count: current.new_count(),
        threshold: eff.threshold,
        enabled: eff.mark_unstable,
        exceeded: threshold::evaluate(current.bug_count(), eff.mark_unstable, eff.threshold),
    };
    Ok(PublishReport {
        summary: current,
        verdict,
    })
}
