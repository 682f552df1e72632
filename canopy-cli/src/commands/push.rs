//! `canopy push` — push local subtree changes back upstream.
//!
//! Push targets only the primary remote (`repo_urls[0]`); it never falls
//! back across mirrors.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use canopy_ops::{run_operation, Operation, SystemGitRunner};

use crate::commands::{print_output, resolve_unit};

/// Arguments for `canopy push`.
#[derive(Args, Debug)]
pub struct PushArgs {
    /// Name of the subtree (as defined in the configuration file).
    pub name: String,
}

impl PushArgs {
    pub fn run(self, config: &Path) -> Result<i32> {
        let (name, unit) = resolve_unit(config, &self.name)?;
        println!(
            "Pushing local changes in {} to {}…",
            unit.prefix.display(),
            unit.primary_remote(),
        );

        let runner = SystemGitRunner::new();
        let result = run_operation(&runner, Operation::Push, &name, &unit)
            .with_context(|| format!("push failed for '{name}'"))?;
        print_output(&result);
        println!("{} '{name}' pushed", "✓".green());
        Ok(0)
    }
}
