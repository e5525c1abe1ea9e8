//! scanpub core library.
//!
//! This crate exposes programmatic APIs for publishing Clang scan-build
//! results: locating report files, extracting bug records from embedded
//! HTML-comment markers, diffing the bug set against the previous run, and
//! evaluating a configurable bug threshold.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `locate`: Report file and scanner-subfolder discovery.
//! - `archive`: Copy of the scanner output into the run's artifact folder.
//! - `markers`: Marker extraction from report HTML.
//! - `paths`: Workspace-relative path normalization.
//! - `bugs`: Bug record construction per report file.
//! - `diff`: Cross-run bug set differencing with a pluggable matcher.
//! - `summary`: Summary persistence and the previous-run lookup.
//! - `threshold`: Degraded-run verdict.
//! - `publish`: The full run orchestration.
//! - `models`: Data models for bugs, summaries, and verdicts.
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.
pub mod archive;
pub mod bugs;
pub mod cli;
pub mod config;
pub mod diff;
pub mod locate;
pub mod markers;
pub mod models;
pub mod output;
pub mod paths;
pub mod publish;
pub mod summary;
pub mod threshold;
pub mod utils;
