//! Shared data models for publish output and the persisted bug summary.

pub mod bug;

use self::bug::BugSummary;
use serde::Serialize;

#[derive(Serialize, Clone, Copy)]
/// Verdict for one run: aggregate count measured against the threshold.
pub struct RunVerdict {
    pub bug_count: usize,
    pub new_count: usize,
    pub threshold: u32,
    pub enabled: bool,
    pub exceeded: bool,
}

#[derive(Serialize)]
/// Full result of a publish run, consumed by the printers.
pub struct PublishReport {
    pub summary: BugSummary,
    pub verdict: RunVerdict,
}
