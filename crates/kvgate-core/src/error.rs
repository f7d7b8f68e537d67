//! Error types for kvgate core operations.
//!
//! Every facade call fails synchronously with one of these. None of them is
//! transient, so callers should treat them as bugs at the call site rather
//! than conditions to retry.

use thiserror::Error;

use crate::host::HostKind;

/// Result type alias for kvgate operations.
pub type Result<T> = std::result::Result<T, KvError>;

/// Core error type for kvgate operations.
#[derive(Debug, Error)]
pub enum KvError {
    /// The capability or storage method is not available on this host
    #[error("Host mismatch: requires {required} host, running under {actual} host")]
    HostMismatch { required: HostKind, actual: HostKind },

    /// Storage method selector is not one of the recognized methods
    #[error("Invalid storage method: {0}")]
    InvalidMethod(String),

    /// A required argument was missing or empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Backend failure reported by the host's storage primitive
    #[error("Storage error: {0}")]
    Storage(String),
}

impl KvError {
    pub(crate) fn host_mismatch(required: HostKind, actual: HostKind) -> Self {
        KvError::HostMismatch { required, actual }
    }
}

impl From<std::io::Error> for KvError {
    fn from(err: std::io::Error) -> Self {
        KvError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for KvError {
    fn from(err: serde_json::Error) -> Self {
        KvError::Storage(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for KvError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        KvError::Storage(format!("{value:?}"))
    }
}
