//! Canopy core library — domain types, registry loading, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and domain structs
//! - [`error`] — [`ConfigError`]
//! - [`config`] — load / validate the subtree registry

pub mod config;
pub mod error;
pub mod types;

pub use config::load_registry;
pub use error::ConfigError;
pub use types::{Registry, Subtree, SubtreeName};
