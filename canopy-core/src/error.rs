//! Error types for canopy-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from registry configuration.
///
/// Every variant is fatal: configuration problems are reported before any
/// external command is attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure (permission denied, unreadable file, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file did not exist at the expected path.
    #[error("configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// JSON parse error on load — includes file path and line context from serde_json.
    #[error("failed to parse configuration at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A subtree entry failed validation at load time.
    #[error("invalid subtree '{name}': {reason}")]
    InvalidUnit { name: String, reason: String },

    /// The requested subtree name is not a key in the registry.
    #[error("subtree '{name}' not found in configuration")]
    UnitNotFound { name: String },
}
