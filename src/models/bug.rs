//! Bug record and per-run summary schema.
//!
//! A `Bug` is one static-analysis finding extracted from a single scan-build
//! report file. Every field except `report_file` is optional: reports with
//! missing or unreadable markers still produce a record. `is_new` stays
//! `None` until the differencer runs with a previous summary available.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// One finding parsed out of a `report-*.html` file.
pub struct Bug {
    /// Basename of the report file this bug came from. Run-scoped: report
    /// names are not stable across runs and never participate in matching.
    pub report_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bug_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bug_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bug_category: Option<String>,
    /// Source path, relative to the workspace root when the root could be
    /// stripped, otherwise the path as the scanner emitted it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    /// Set only when a previous summary existed to compare against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl Bug {
    /// A record carrying only the report file name, used when the report
    /// could not be read.
    pub fn bare(report_file: impl Into<String>) -> Self {
        Bug {
            report_file: report_file.into(),
            bug_type: None,
            bug_description: None,
            bug_category: None,
            source_file: None,
            is_new: None,
        }
    }
}

/// Current on-disk format version written into every summary.
pub const SUMMARY_FORMAT: u32 = 1;

fn default_format() -> u32 {
    SUMMARY_FORMAT
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// The complete bug set produced by one run. Persisted exactly once at the
/// end of the run and read back as the next run's comparison baseline.
pub struct BugSummary {
    #[serde(default = "default_format")]
    pub format: u32,
    pub run: u32,
    #[serde(default)]
    pub bugs: Vec<Bug>,
}

impl BugSummary {
    pub fn new(run: u32) -> Self {
        BugSummary {
            format: SUMMARY_FORMAT,
            run,
            bugs: Vec::new(),
        }
    }

    pub fn bug_count(&self) -> usize {
        self.bugs.len()
    }

    pub fn new_count(&self) -> usize {
        self.bugs.iter().filter(|b| b.is_new == Some(true)).count()
    }
}
