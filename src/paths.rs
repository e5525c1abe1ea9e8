//! Workspace-relative path normalization.

/// Strip the workspace root from a scanner-emitted source path.
///
/// Finds the last occurrence of `workspace_root` as a substring of `source`
/// and returns the suffix after it. When the root does not appear (symlinked
/// or differently-cased checkouts, paths from outside the workspace), the
/// path is returned unchanged. A best-effort heuristic, not a path
/// containment check.
pub fn workspace_relative(source: &str, workspace_root: &str) -> String {
    if workspace_root.is_empty() {
        return source.to_string();
    }
    match source.rfind(workspace_root) {
        Some(pos) => source[pos + workspace_root.len()..].to_string(),
        None => source.to_string(),
    }
}
