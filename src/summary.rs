//! Summary persistence and the previous-run lookup.
//!
//! Each run owns one numeric directory under the artifacts root:
//! `<artifacts>/<run>/<output-folder>/bug-summary.json`. The summary is
//! written once at the end of a run and read back by the next run as its
//! comparison baseline. The previous-run lookup is a function over the
//! directory layout, not a pointer held by the current run.

use crate::models::bug::BugSummary;
use crate::utils;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Fixed summary file name inside a run's artifact output folder.
pub const SUMMARY_FILE: &str = "bug-summary.json";

/// Directory holding one run's archived scanner output and summary.
pub fn run_output_dir(artifacts_root: &Path, run: u32, output_folder: &str) -> PathBuf {
    artifacts_root.join(run.to_string()).join(output_folder)
}

/// Persist a run's summary. A failure here is the run's failure: results
/// that cannot be saved must not be reported as a successful run.
pub fn write_summary(dir: &Path, summary: &BugSummary) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let body = serde_json::to_string_pretty(summary)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(dir.join(SUMMARY_FILE), body)
}

/// Load a run's summary. Missing or corrupt files degrade to `None` with a
/// printed note; a prior run without a readable summary is simply "no
/// previous summary".
pub fn load_summary(dir: &Path) -> Option<BugSummary> {
    let path = dir.join(SUMMARY_FILE);
    let body = fs::read_to_string(&path).ok()?;
    match serde_json::from_str::<BugSummary>(&body) {
        Ok(s) => Some(s),
        Err(_) => {
            eprintln!(
                "{} ignoring unreadable summary {}",
                utils::note_prefix(),
                path.to_string_lossy()
            );
            None
        }
    }
}

/// Numeric run directories currently present under the artifacts root,
/// sorted ascending. A missing root means no runs yet.
pub fn list_runs(artifacts_root: &Path) -> Vec<u32> {
    let mut runs: Vec<u32> = match fs::read_dir(artifacts_root) {
        Ok(rd) => rd
            .flatten()
            .filter(|e| e.path().is_dir())
            .filter_map(|e| e.file_name().to_string_lossy().parse::<u32>().ok())
            .collect(),
        Err(_) => Vec::new(),
    };
    runs.sort_unstable();
    runs
}

/// Run number for a fresh run when none was given explicitly.
pub fn next_run_number(artifacts_root: &Path) -> u32 {
    list_runs(artifacts_root).last().map(|n| n + 1).unwrap_or(1)
}

/// The run immediately prior to `current`: the largest recorded run number
/// strictly below it. No deeper search happens if that run has no summary.
pub fn previous_run(artifacts_root: &Path, current: u32) -> Option<u32> {
    list_runs(artifacts_root)
        .into_iter()
        .filter(|&n| n < current)
        .last()
}

/// Summary of the run immediately prior to `current`, if one was recorded.
pub fn previous_summary(
    artifacts_root: &Path,
    current: u32,
    output_folder: &str,
) -> Option<BugSummary> {
    let prev = previous_run(artifacts_root, current)?;
    load_summary(&run_output_dir(artifacts_root, prev, output_folder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bug::Bug;
    use tempfile::tempdir;

    fn sample_summary(run: u32) -> BugSummary {
        let mut s = BugSummary::new(run);
        s.bugs.push(Bug {
            report_file: "report-1.html".into(),
            bug_type: Some("leak".into()),
            bug_description: Some("leak in foo".into()),
            bug_category: Some("Memory".into()),
            source_file: Some("/src/foo.c".into()),
            is_new: None,
        });
        s.bugs.push(Bug::bare("report-2.html"));
        s
    }

    #[test]
    fn test_round_trip_preserves_bugs_and_order() {
        let tmp = tempdir().unwrap();
        let dir = run_output_dir(tmp.path(), 7, "clang");
        let summary = sample_summary(7);

        write_summary(&dir, &summary).unwrap();
        let loaded = load_summary(&dir).unwrap();
        assert_eq!(loaded, summary);
        assert_eq!(loaded.bugs[0].report_file, "report-1.html");
        assert_eq!(loaded.bugs[1].report_file, "report-2.html");
    }

    #[test]
    fn test_missing_summary_loads_as_none() {
        let tmp = tempdir().unwrap();
        assert_eq!(load_summary(tmp.path()), None);
    }

    #[test]
    fn test_corrupt_summary_loads_as_none() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join(SUMMARY_FILE), "{not json").unwrap();
        assert_eq!(load_summary(tmp.path()), None);
    }

    #[test]
    fn test_run_numbering_over_artifact_dirs() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        assert_eq!(next_run_number(root), 1);
        assert_eq!(previous_run(root, 1), None);

        for n in [1u32, 2, 5] {
            fs::create_dir_all(root.join(n.to_string())).unwrap();
        }
        fs::create_dir_all(root.join("not-a-run")).unwrap();

        assert_eq!(list_runs(root), vec![1, 2, 5]);
        assert_eq!(next_run_number(root), 6);
        assert_eq!(previous_run(root, 5), Some(2));
        assert_eq!(previous_run(root, 6), Some(5));
        assert_eq!(previous_run(root, 1), None);
    }

    #[test]
    fn test_previous_summary_reads_immediately_prior_run() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        write_summary(&run_output_dir(root, 1, "clang"), &sample_summary(1)).unwrap();
        write_summary(&run_output_dir(root, 2, "clang"), &sample_summary(2)).unwrap();

        let prev = previous_summary(root, 3, "clang").unwrap();
        assert_eq!(prev.run, 2);

        // Prior run exists but never persisted a summary: degrade to None.
        fs::create_dir_all(root.join("4")).unwrap();
        assert_eq!(previous_summary(root, 5, "clang"), None);
    }
}
