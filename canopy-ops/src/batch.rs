//! Batch coordination across the whole unit registry.
//!
//! Bulk operations are best-effort: a unit that exhausts its candidates is
//! recorded and the batch moves on to the next unit. The overall outcome
//! reflects whether *any* unit failed, and the first non-zero exit status
//! observed becomes the process exit code. Single-unit invocations do not go
//! through here — they abort on the first failure.

use canopy_core::{Registry, SubtreeName};

use crate::dispatch::{run_operation, Operation};
use crate::error::OpsError;
use crate::runner::{CommandResult, GitRunner};

/// Per-unit outcome of a batch pass.
#[derive(Debug)]
pub struct UnitReport {
    pub name: SubtreeName,
    pub outcome: Result<CommandResult, OpsError>,
}

/// Summary of one batch pass over the registry.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub units: Vec<UnitReport>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.units.iter().filter(|u| u.outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.units.len() - self.succeeded()
    }

    /// The process exit status for this batch: 0 when every unit succeeded,
    /// otherwise the first non-zero status observed from an exhausted unit.
    pub fn exit_status(&self) -> i32 {
        self.units
            .iter()
            .find_map(|u| u.outcome.as_ref().err().map(OpsError::exit_status))
            .unwrap_or(0)
    }
}

/// Pull every unit in the registry, in declared order.
///
/// Never aborts early: every unit is attempted exactly once (with its own
/// candidate fallback) and failures are recorded in the report.
pub fn pull_all(runner: &dyn GitRunner, registry: &Registry) -> BatchReport {
    let mut units = Vec::with_capacity(registry.len());
    for (name, unit) in registry.iter() {
        tracing::info!("pull-all: '{name}'");
        let outcome = run_operation(runner, Operation::Pull, name, unit);
        if let Err(err) = &outcome {
            tracing::warn!("pull-all: '{name}' failed: {err}");
        }
        units.push(UnitReport {
            name: name.clone(),
            outcome,
        });
    }
    BatchReport { units }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
