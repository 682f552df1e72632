//! # canopy-ops
//!
//! Orchestration core: command runner, remote fallback, operation dispatch
//! and batch coordination.
//!
//! Call [`run_operation`] for a single named subtree, or [`pull_all`] to make
//! best-effort progress across every unit in the registry.

pub mod batch;
pub mod dispatch;
pub mod error;
pub mod fallback;
pub mod runner;

pub use batch::{pull_all, BatchReport, UnitReport};
pub use dispatch::{run_operation, Operation};
pub use error::OpsError;
pub use runner::{CommandResult, GitRunner, MockRunner, SystemGitRunner};
