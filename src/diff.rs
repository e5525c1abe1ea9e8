//! Bug set differencing across runs.
//!
//! Marks each current bug as new when no equal bug exists in the previous
//! run's summary. With no previous summary at all (first run, or the prior
//! run never persisted one), `is_new` is left unset: absence of history is
//! not evidence of novelty.

use crate::models::bug::{Bug, BugSummary};

/// Predicate deciding whether two bugs from different runs are the same
/// finding. Injectable so a fuzzier matcher can replace the default without
/// touching the differencer.
pub type MatchFn = fn(&Bug, &Bug) -> bool;

/// Default match: exact equality over type, description, category and
/// source file. `report_file` is deliberately excluded — report names are
/// run-scoped and never stable across runs.
pub fn same_bug(a: &Bug, b: &Bug) -> bool {
    a.bug_type == b.bug_type
        && a.bug_description == b.bug_description
        && a.bug_category == b.bug_category
        && a.source_file == b.source_file
}

/// Set `is_new` on every bug by membership lookup in the previous summary.
pub fn mark_new_bugs(bugs: &mut [Bug], previous: Option<&BugSummary>, matcher: MatchFn) {
    let prev = match previous {
        Some(p) => p,
        None => return,
    };
    for bug in bugs.iter_mut() {
        let known = prev.bugs.iter().any(|old| matcher(old, bug));
        bug.is_new = Some(!known);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bug(report: &str, desc: &str) -> Bug {
        Bug {
            report_file: report.into(),
            bug_type: Some("leak".into()),
            bug_description: Some(desc.into()),
            bug_category: Some("Memory".into()),
            source_file: Some("/src/foo.c".into()),
            is_new: None,
        }
    }

    #[test]
    fn test_recurring_bug_is_not_new() {
        let mut prev = BugSummary::new(1);
        prev.bugs.push(bug("report-old.html", "leak in foo"));
        // Same finding, different run-scoped report name.
        let mut current = vec![bug("report-new.html", "leak in foo")];

        mark_new_bugs(&mut current, Some(&prev), same_bug);
        assert_eq!(current[0].is_new, Some(false));
    }

    #[test]
    fn test_unseen_bug_is_new() {
        let mut prev = BugSummary::new(1);
        prev.bugs.push(bug("report-old.html", "leak in foo"));
        let mut current = vec![bug("report-new.html", "leak in bar")];

        mark_new_bugs(&mut current, Some(&prev), same_bug);
        assert_eq!(current[0].is_new, Some(true));
    }

    #[test]
    fn test_no_previous_summary_leaves_is_new_unset() {
        let mut current = vec![bug("report-1.html", "leak in foo")];
        mark_new_bugs(&mut current, None, same_bug);
        assert_eq!(current[0].is_new, None);
    }

    #[test]
    fn test_report_file_never_participates_in_matching() {
        let a = bug("report-1.html", "d");
        let b = bug("report-2.html", "d");
        assert!(same_bug(&a, &b));
    }

    #[test]
    fn test_custom_matcher_is_honored() {
        // Match on category alone.
        fn by_category(a: &Bug, b: &Bug) -> bool {
            a.bug_category == b.bug_category
        }
        let mut prev = BugSummary::new(3);
        prev.bugs.push(bug("r.html", "old description"));
        let mut current = vec![bug("q.html", "entirely different description")];

        mark_new_bugs(&mut current, Some(&prev), by_category);
        assert_eq!(current[0].is_new, Some(false));
    }
}
