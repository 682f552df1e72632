//! Loading and validation of the JSON subtree registry.
//!
//! # File format
//!
//! ```text
//! {
//!   "subtrees": {
//!     "<name>": {
//!       "prefix":    "third_party/<name>",
//!       "branch":    "main",
//!       "repo_urls": ["https://primary.example/r.git", "https://mirror.example/r.git"],
//!       "squash":    false
//!     }
//!   }
//! }
//! ```
//!
//! Validation happens here, once, at load time. Anything that would make a
//! unit unusable mid-run (empty prefix, empty branch, no remotes) is rejected
//! before any external command is attempted.

use std::path::Path;

use crate::error::ConfigError;
use crate::types::Registry;

/// Load and validate the registry at `path`.
///
/// Returns `ConfigError::ConfigNotFound` if the file is absent,
/// `ConfigError::Parse` (with path + line context) if malformed JSON, and
/// `ConfigError::InvalidUnit` if any entry fails validation.
pub fn load_registry(path: &Path) -> Result<Registry, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let registry: Registry = serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate(&registry)?;
    Ok(registry)
}

fn validate(registry: &Registry) -> Result<(), ConfigError> {
    for (name, subtree) in registry.iter() {
        if subtree.prefix.as_os_str().is_empty() {
            return Err(invalid(name, "prefix must not be empty"));
        }
        if subtree.branch.is_empty() {
            return Err(invalid(name, "branch must not be empty"));
        }
        if subtree.repo_urls.is_empty() {
            return Err(invalid(name, "repo_urls must list at least one remote"));
        }
        if subtree.repo_urls.iter().any(|u| u.is_empty()) {
            return Err(invalid(name, "repo_urls must not contain empty entries"));
        }
    }
    Ok(())
}

fn invalid(name: &crate::types::SubtreeName, reason: &str) -> ConfigError {
    ConfigError::InvalidUnit {
        name: name.0.clone(),
        reason: reason.to_owned(),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
