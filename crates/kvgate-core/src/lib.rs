//! # kvgate Core
//!
//! Core library for kvgate - one key/value API over whichever stores the
//! running host provides.
//!
//! A caller reads, writes and clears named text values without knowing at
//! the call site whether it runs as a script host (native process, Deno) or
//! a document host (browser), or which of the session, durable or cookie
//! stores backs a request.
//!
//! ## Architecture
//!
//! - **host**: host kind detection and capability handles
//! - **storage**: the facade and its method selector
//! - **backend**: store traits and implementations per host
//! - **cookie**: cookie jar string format

pub mod backend;
pub mod cookie;
pub mod error;
pub mod fs;
pub mod host;
pub mod storage;

pub use error::{KvError, Result};
pub use host::{Host, HostConfig, HostKind};
pub use storage::{Storage, StorageMethod};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
