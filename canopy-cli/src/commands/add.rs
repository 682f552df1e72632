//! `canopy add` — vendor a configured subtree for the first time.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use canopy_ops::{run_operation, Operation, SystemGitRunner};

use crate::commands::{print_output, resolve_unit};

/// Arguments for `canopy add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Name of the subtree (as defined in the configuration file).
    pub name: String,
}

impl AddArgs {
    pub fn run(self, config: &Path) -> Result<i32> {
        let (name, unit) = resolve_unit(config, &self.name)?;
        println!(
            "Adding subtree '{name}' at {} from {}…",
            unit.prefix.display(),
            unit.primary_remote(),
        );

        let runner = SystemGitRunner::new();
        let result = run_operation(&runner, Operation::Add, &name, &unit)
            .with_context(|| format!("add failed for '{name}'"))?;
        print_output(&result);
        println!("{} '{name}' added", "✓".green());
        Ok(0)
    }
}
