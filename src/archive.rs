//! Archival copy of the scanner's output into the run's artifact folder.
//!
//! scan-build writes each invocation into a uniquely named subdirectory of
//! its output folder. The subdirectory's contents are copied into the run's
//! artifact folder so later runs read stable paths; the live workspace
//! folder is never read by the publish pipeline after this step.

use crate::locate::first_scanner_subdir;
use crate::utils;
use std::fs;
use std::io;
use std::path::Path;

/// Copy the scanner output for this run into `run_output`.
///
/// Returns `Ok(true)` when a subdirectory was found and copied, `Ok(false)`
/// when the workspace output folder had no subdirectories (warned, nothing
/// to archive). The workspace output folder is created when missing, as the
/// scanner may not have run yet.
pub fn archive_scanner_output(workspace_output: &Path, run_output: &Path) -> io::Result<bool> {
    if !workspace_output.exists() {
        fs::create_dir_all(workspace_output)?;
    }
    let subdir = match first_scanner_subdir(workspace_output)? {
        Some(d) => d,
        None => {
            eprintln!(
                "{} could not locate a scan-build output folder in: {}",
                utils::warn_prefix(),
                workspace_output.to_string_lossy()
            );
            return Ok(false);
        }
    };
    copy_tree(&subdir, run_output)?;
    Ok(true)
}

/// Recursive directory copy.
fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)?.flatten() {
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if from.is_dir() {
            copy_tree(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
        }
    }
    Ok(())
}
