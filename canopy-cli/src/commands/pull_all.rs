//! `canopy pull-all` — best-effort pull across every configured subtree.
//!
//! Unlike the single-unit commands, a unit that exhausts its candidate
//! remotes does not abort the run: every unit is attempted and the summary
//! reports the failures. The process exits with the first non-zero git
//! status observed.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use canopy_core::load_registry;
use canopy_ops::{pull_all, SystemGitRunner};

/// Arguments for `canopy pull-all`.
#[derive(Args, Debug)]
pub struct PullAllArgs {}

impl PullAllArgs {
    pub fn run(self, config: &Path) -> Result<i32> {
        let registry = load_registry(config)
            .with_context(|| format!("cannot load configuration from {}", config.display()))?;

        if registry.is_empty() {
            println!("No subtrees configured in {}.", config.display());
            return Ok(0);
        }

        let runner = SystemGitRunner::new();
        let report = pull_all(&runner, &registry);

        for unit in &report.units {
            match &unit.outcome {
                Ok(_) => println!("{} '{}'", "✓".green(), unit.name),
                Err(err) => println!("{} '{}' — {err}", "✗".red(), unit.name),
            }
        }
        println!(
            "{} pulled, {} failed ({} total)",
            report.succeeded(),
            report.failed(),
            report.units.len(),
        );

        Ok(report.exit_status())
    }
}
