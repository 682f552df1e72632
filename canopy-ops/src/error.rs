//! Error types for canopy-ops.

use thiserror::Error;

/// All errors that can arise from orchestrating external git invocations.
#[derive(Debug, Error)]
pub enum OpsError {
    /// The external executable could not be started at all.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// One external invocation exited non-zero. Recoverable: the fallback
    /// policy treats this as "try the next candidate".
    #[error("git exited with status {status}: {stderr}")]
    CommandFailed { status: i32, stderr: String },

    /// Every candidate remote for a unit failed. Carries the last
    /// underlying failure.
    #[error("all {attempts} remote(s) for '{name}' failed")]
    Exhausted {
        name: String,
        attempts: usize,
        #[source]
        source: Box<OpsError>,
    },

    /// A unit reached the dispatcher with no candidate remotes. Load-time
    /// validation normally rejects this before any operation runs.
    #[error("subtree '{name}' has no candidate remotes")]
    NoRemotes { name: String },

    /// An operation name that is not add, pull or push.
    #[error("unknown operation '{0}'; expected: add, pull, push")]
    UnknownOperation(String),
}

impl OpsError {
    /// The process exit status this failure should propagate.
    ///
    /// Command failures carry the exact status observed from git so calling
    /// automation can distinguish failure classes; everything else maps to 1.
    pub fn exit_status(&self) -> i32 {
        match self {
            OpsError::CommandFailed { status, .. } => *status,
            OpsError::Exhausted { source, .. } => source.exit_status(),
            _ => 1,
        }
    }
}
