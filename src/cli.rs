//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "scanpub",
    version,
    about = "Publish Clang scan-build results",
    long_about = "scanpub — ingest Clang scan-build HTML reports, diff the bug set against the previous run, and fail the build when a threshold is exceeded.\n\nConfiguration precedence: CLI > scanpub.toml > defaults.",
    after_help = "Examples:\n  scanpub publish --output-folder clangScanBuildReports\n  scanpub publish --threshold 5 --mark-unstable --output json\n  scanpub show --run 3",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for publishing and inspecting runs.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current scanpub version."
    )]
    Version,
    /// Publish the current scan-build results
    #[command(
        about = "Publish scan-build results",
        long_about = "Archive the scanner output, extract bug records from report-*.html files, mark bugs new or recurring against the previous run, persist the run summary, and evaluate the bug threshold. Exits 1 when the threshold is exceeded.",
        after_help = "Examples:\n  scanpub publish --output-folder clangScanBuildReports\n  scanpub publish --run 12 --threshold 5 --mark-unstable"
    )]
    Publish {
        #[arg(long, help = "Workspace root (default: current dir)")]
        workspace_root: Option<String>,
        #[arg(long, help = "scan-build output folder, relative to the workspace root")]
        output_folder: Option<String>,
        #[arg(long, help = "Per-run artifact storage (default: .scanpub/runs)")]
        artifacts_root: Option<String>,
        #[arg(long, help = "Run number (default: next after the latest recorded run)")]
        run: Option<u32>,
        #[arg(long, help = "Maximum acceptable bug count before the run is degraded")]
        threshold: Option<u32>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero when the threshold is exceeded")]
        mark_unstable: bool,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Show a persisted run summary
    #[command(
        about = "Show a run summary",
        long_about = "Load and print the persisted bug summary of a recorded run.",
        after_help = "Examples:\n  scanpub show --run 3\n  scanpub show --run 3 --output json"
    )]
    Show {
        #[arg(long, help = "Workspace root (default: current dir)")]
        workspace_root: Option<String>,
        #[arg(long, help = "scan-build output folder, relative to the workspace root")]
        output_folder: Option<String>,
        #[arg(long, help = "Per-run artifact storage (default: .scanpub/runs)")]
        artifacts_root: Option<String>,
        #[arg(long, help = "Run number to show (default: latest recorded run)")]
        run: Option<u32>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
