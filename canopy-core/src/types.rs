//! Domain types for the Canopy subtree registry.
//!
//! The local prefix is a `PathBuf`; never `&str` or `String` for filesystem
//! paths. All types deserialize via serde + serde_json.

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a subtree entry in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtreeName(pub String);

impl fmt::Display for SubtreeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for SubtreeName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SubtreeName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One named subtree unit: a local prefix bound to a branch and an ordered
/// list of candidate remotes.
///
/// `repo_urls` order encodes priority — add/pull try each in turn, push only
/// ever targets the first entry. Constructed once at load time and immutable
/// for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtree {
    /// Repository-relative directory the subtree is vendored into.
    pub prefix: PathBuf,
    /// Branch to track on the remote.
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Candidate remote locations, highest priority first.
    pub repo_urls: Vec<String>,
    /// Pass `--squash` to `git subtree add`/`pull` for this unit.
    #[serde(default)]
    pub squash: bool,
}

fn default_branch() -> String {
    "main".to_owned()
}

impl Subtree {
    /// The authoritative remote — the highest-priority `repo_urls` entry.
    ///
    /// Guaranteed present after load-time validation.
    pub fn primary_remote(&self) -> &str {
        &self.repo_urls[0]
    }
}

/// Root of the subtree registry. Keys are unique; iteration follows the
/// insertion order of the configuration mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Registry {
    #[serde(default)]
    pub subtrees: IndexMap<SubtreeName, Subtree>,
}

impl Registry {
    /// Look up a unit by name, or fail with a configuration error.
    pub fn get(&self, name: &SubtreeName) -> Result<&Subtree, crate::ConfigError> {
        self.subtrees
            .get(name)
            .ok_or_else(|| crate::ConfigError::UnitNotFound {
                name: name.0.clone(),
            })
    }

    /// Iterate units in declared (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = (&SubtreeName, &Subtree)> {
        self.subtrees.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.subtrees.is_empty()
    }

    pub fn len(&self) -> usize {
        self.subtrees.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
