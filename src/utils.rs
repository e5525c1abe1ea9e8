//! Supporting helpers: message prefixes and display paths.

use owo_colors::OwoColorize;
use std::path::Path;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for hard errors printed to stderr.
pub fn error_prefix() -> String {
    if use_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Prefix for recoverable warnings.
pub fn warn_prefix() -> String {
    if use_colors() {
        "warn:".yellow().bold().to_string()
    } else {
        "warn:".to_string()
    }
}

/// Prefix for informational notes.
pub fn note_prefix() -> String {
    if use_colors() {
        "note:".blue().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Render a path relative to the current working directory when possible.
pub fn rel_to_wd(p: &Path) -> String {
    let wd = std::env::current_dir().unwrap_or_else(|_| p.to_path_buf());
    pathdiff::diff_paths(p, &wd)
        .unwrap_or_else(|| p.to_path_buf())
        .to_string_lossy()
        .to_string()
}
