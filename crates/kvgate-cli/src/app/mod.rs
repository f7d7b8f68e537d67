//! Application-level utilities for the kvgate CLI.
//!
//! This module provides:
//! - Path resolution for config and store files
//! - Default storage method resolution
//! - Host construction for the running process

mod resolver;

// Re-export public API
pub use resolver::{open_host, resolve_method, resolve_store_path};
