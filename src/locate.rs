//! Report discovery under the run's artifact folder.
//!
//! scan-build names every report `report-<hash>.html` and writes the whole
//! set into a freshly named subdirectory of its output folder, so two
//! lookups live here: the recursive report glob and the immediate-subdir
//! scan used by the archive step.

use glob::glob;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Find all `report-*.html` files anywhere under `dir`.
///
/// Order is glob's per-directory alphabetical order, deterministic for a
/// fixed tree. Returns an I/O error when `dir` itself is unreadable; an
/// existing directory with no matches yields an empty list.
pub fn find_reports(dir: &Path) -> io::Result<Vec<PathBuf>> {
    // Surface unreadable/missing roots as io errors; glob alone would
    // silently yield nothing.
    fs::read_dir(dir)?;
    let pattern = dir.join("**/report-*.html").to_string_lossy().to_string();
    let mut reports = Vec::new();
    for entry in glob(&pattern).expect("bad glob pattern") {
        if let Ok(p) = entry {
            reports.push(p);
        }
    }
    Ok(reports)
}

/// Locate the unique output subdirectory scan-build creates per invocation.
///
/// Returns `Ok(None)` when the output folder has no subdirectories, which
/// callers treat as a recoverable "nothing to archive" condition. When more
/// than one subdirectory exists the lexicographically first is taken; which
/// one is correct is undefined, a known limitation of the scanner's layout.
pub fn first_scanner_subdir(output_folder: &Path) -> io::Result<Option<PathBuf>> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(output_folder)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs.into_iter().next())
}
