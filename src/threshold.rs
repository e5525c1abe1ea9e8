//! Threshold verdict: should the run be flagged degraded?

/// `true` iff flagging is enabled and the bug count strictly exceeds the
/// threshold. A count equal to the threshold does not exceed it. The caller
/// translates the verdict into a degraded run status; nothing here mutates
/// run state.
pub fn evaluate(bug_count: usize, enabled: bool, threshold: u32) -> bool {
    enabled && bug_count > threshold as usize
}
