//! scanpub CLI binary entry point.
//! Delegates to library modules for the publish cycle and prints results.

use clap::Parser;
use scanpub::cli::{Cli, Commands};
use scanpub::{config, output, publish, summary, utils};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Publish {
            workspace_root,
            output_folder,
            artifacts_root,
            run,
            threshold,
            mark_unstable,
            output,
        } => {
            let eff = config::resolve_effective(
                workspace_root.as_deref(),
                output_folder.as_deref(),
                artifacts_root.as_deref(),
                threshold,
                if mark_unstable { Some(true) } else { None },
                output.as_deref(),
            );
            // Require the scanner output folder to be configured (no default)
            if !eff.output_folder_configured {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    "scan-build output folder is not configured. Pass --output-folder or add scanpub.toml."
                );
                std::process::exit(2);
            }
            // Friendly note if no scanpub config was found
            if config::load_config(&eff.workspace_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No scanpub.toml found; using defaults."
                );
            }
            let report = match publish::run_publish(&eff, run) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("publish failed: {}", e)
                    );
                    std::process::exit(2);
                }
            };
            output::print_publish(&report, &eff.output);
            if report.verdict.exceeded {
                eprintln!(
                    "{} {}",
                    utils::warn_prefix(),
                    "scan-build bug threshold exceeded."
                );
                std::process::exit(1);
            }
        }
        Commands::Show {
            workspace_root,
            output_folder,
            artifacts_root,
            run,
            output,
        } => {
            let eff = config::resolve_effective(
                workspace_root.as_deref(),
                output_folder.as_deref(),
                artifacts_root.as_deref(),
                None,
                None,
                output.as_deref(),
            );
            if !eff.output_folder_configured {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    "scan-build output folder is not configured. Pass --output-folder or add scanpub.toml."
                );
                std::process::exit(2);
            }
            let run = match run.or_else(|| summary::list_runs(&eff.artifacts_root).last().copied())
            {
                Some(n) => n,
                None => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!(
                            "no recorded runs under {}",
                            utils::rel_to_wd(&eff.artifacts_root)
                        )
                    );
                    std::process::exit(2);
                }
            };
            let dir = summary::run_output_dir(&eff.artifacts_root, run, &eff.output_folder);
            match summary::load_summary(&dir) {
                Some(s) => output::print_summary(&s, &eff.output),
                None => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("run {} has no readable summary in {}", run, utils::rel_to_wd(&dir))
                    );
                    std::process::exit(2);
                }
            }
        }
    }
}
