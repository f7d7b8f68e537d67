//! Storage backends addressed by the facade.
//!
//! The host environment owns each store; this module defines the traits the
//! facade talks to and the concrete implementations for each host:
//!
//! - **memory**: session map and string cookie jar
//! - **file** (native): JSON-file persistent map
//! - **web** (wasm32): `localStorage`, `sessionStorage`, `document.cookie`

#[cfg(not(target_arch = "wasm32"))]
mod file;
mod memory;
mod traits;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
pub use memory::{MemoryCookieJar, MemoryStore};
pub use traits::{CookieJar, KeyValueStore};
#[cfg(target_arch = "wasm32")]
pub use web::{DocumentCookies, WebStorage};
