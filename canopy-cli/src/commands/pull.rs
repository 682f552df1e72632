//! `canopy pull` — pull upstream updates into one vendored subtree.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use canopy_ops::{run_operation, Operation, SystemGitRunner};

use crate::commands::{print_output, resolve_unit};

/// Arguments for `canopy pull`.
#[derive(Args, Debug)]
pub struct PullArgs {
    /// Name of the subtree (as defined in the configuration file).
    pub name: String,
}

impl PullArgs {
    pub fn run(self, config: &Path) -> Result<i32> {
        let (name, unit) = resolve_unit(config, &self.name)?;
        println!(
            "Pulling updates for '{name}' into {}…",
            unit.prefix.display()
        );

        let runner = SystemGitRunner::new();
        let result = run_operation(&runner, Operation::Pull, &name, &unit)
            .with_context(|| format!("pull failed for '{name}'"))?;
        print_output(&result);
        println!("{} '{name}' up to date", "✓".green());
        Ok(0)
    }
}
