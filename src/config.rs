//! Configuration discovery and effective settings resolution.
//!
//! scanpub reads `scanpub.toml|yaml|yml` from the workspace root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `artifactsRoot`: `.scanpub/runs`
//! - `bugThreshold`: 0
//! - `markBuildUnstableWhenThresholdIsExceeded`: false
//! - `output`: `human`
//! `scanBuildOutputFolder` has no default and must be configured.
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `scanpub.toml|yaml`.
pub struct EngineConfig {
    /// Relative folder scan-build was pointed at with `-o`.
    #[serde(rename = "scanBuildOutputFolder")]
    pub scan_build_output_folder: Option<String>,
    #[serde(rename = "bugThreshold")]
    pub bug_threshold: Option<u32>,
    #[serde(rename = "markBuildUnstableWhenThresholdIsExceeded")]
    pub mark_build_unstable_when_threshold_is_exceeded: Option<bool>,
    #[serde(rename = "artifactsRoot")]
    pub artifacts_root: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub workspace_root: PathBuf,
    /// Scanner output folder name, relative to the workspace root.
    pub output_folder: String,
    pub output_folder_configured: bool,
    /// Per-run artifact storage, relative paths resolved against the
    /// workspace root.
    pub artifacts_root: PathBuf,
    pub threshold: u32,
    pub mark_unstable: bool,
    pub output: String,
}

/// Walk upward from `start` to detect the workspace root.
///
/// Stops when a `scanpub.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_workspace_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("scanpub.toml").exists()
            || cur.join("scanpub.yaml").exists()
            || cur.join("scanpub.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `EngineConfig` from `scanpub.toml` or `scanpub.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<EngineConfig> {
    let toml_path = root.join("scanpub.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: EngineConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["scanpub.yaml", "scanpub.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: EngineConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_workspace_root: Option<&str>,
    cli_output_folder: Option<&str>,
    cli_artifacts_root: Option<&str>,
    cli_threshold: Option<u32>,
    cli_mark_unstable: Option<bool>,
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_workspace_root.unwrap_or("."));
    let workspace_root = detect_workspace_root(&start);
    let cfg = load_config(&workspace_root).unwrap_or_default();

    let folder_src = cli_output_folder
        .map(|s| s.to_string())
        .or(cfg.scan_build_output_folder);
    let (output_folder, output_folder_configured) = match folder_src {
        Some(s) => (s, true),
        None => (String::new(), false),
    };

    let artifacts = cli_artifacts_root
        .map(|s| s.to_string())
        .or(cfg.artifacts_root)
        .unwrap_or_else(|| ".scanpub/runs".to_string());
    let artifacts_root = if Path::new(&artifacts).is_absolute() {
        PathBuf::from(artifacts)
    } else {
        workspace_root.join(artifacts)
    };

    let threshold = cli_threshold.or(cfg.bug_threshold).unwrap_or(0);
    let mark_unstable = cli_mark_unstable
        .or(cfg.mark_build_unstable_when_threshold_is_exceeded)
        .unwrap_or(false);
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Effective {
        workspace_root,
        output_folder,
        output_folder_configured,
        artifacts_root,
        threshold,
        mark_unstable,
        output,
    }
}
