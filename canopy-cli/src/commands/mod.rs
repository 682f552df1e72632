//! One module per subcommand.

pub mod add;
pub mod pull;
pub mod pull_all;
pub mod push;

use std::path::Path;

use anyhow::{Context, Result};

use canopy_core::{load_registry, Subtree, SubtreeName};
use canopy_ops::CommandResult;

/// Load the registry and resolve one named unit.
///
/// Both steps are configuration errors: they abort before any external
/// command is attempted.
pub(crate) fn resolve_unit(config: &Path, name: &str) -> Result<(SubtreeName, Subtree)> {
    let registry = load_registry(config)
        .with_context(|| format!("cannot load configuration from {}", config.display()))?;
    let name = SubtreeName::from(name);
    let unit = registry.get(&name)?.clone();
    Ok((name, unit))
}

/// Echo the captured stdout of a successful git invocation to the operator.
pub(crate) fn print_output(result: &CommandResult) {
    let out = result.stdout.trim_end();
    if !out.is_empty() {
        println!("{out}");
    }
}
