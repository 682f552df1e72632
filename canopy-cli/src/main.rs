//! Canopy — git subtree synchronization CLI.
//!
//! # Usage
//!
//! ```text
//! canopy add <name>  [--config subtrees.json]
//! canopy pull <name> [--config subtrees.json]
//! canopy push <name> [--config subtrees.json]
//! canopy pull-all    [--config subtrees.json]
//! ```
//!
//! # Exit codes
//!
//! 0 on full success. Configuration errors (missing/malformed file, unknown
//! subtree name) exit 1 before any external command runs. Command failures
//! exit with the status observed from git, so CI can distinguish the failure
//! classes git exposes; for `pull-all` the first non-zero status observed
//! across the batch is used.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use canopy_ops::OpsError;
use commands::{
    add::AddArgs, pull::PullArgs, pull_all::PullAllArgs, push::PushArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "canopy",
    version,
    about = "Synchronize vendored git subtrees from a declarative registry",
    long_about = None,
)]
struct Cli {
    /// Path to the subtree configuration file.
    #[arg(long, global = true, default_value = "subtrees.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Vendor a configured subtree into the repository for the first time.
    Add(AddArgs),

    /// Pull upstream updates into one vendored subtree.
    Pull(PullArgs),

    /// Push local subtree changes back to the primary remote.
    Push(PushArgs),

    /// Pull updates for every configured subtree (best-effort).
    PullAll(PullAllArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            exit_status_for(&err)
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Add(args) => args.run(&cli.config),
        Commands::Pull(args) => args.run(&cli.config),
        Commands::Push(args) => args.run(&cli.config),
        Commands::PullAll(args) => args.run(&cli.config),
    }
}

/// Exit status for a failed single-unit run: the exact status observed from
/// git where one exists, 1 for configuration errors.
fn exit_status_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<OpsError>()
        .map(OpsError::exit_status)
        .unwrap_or(1)
}
