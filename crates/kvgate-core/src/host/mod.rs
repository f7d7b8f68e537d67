//! Host environment probe.
//!
//! Answers "which host am I running under" and gates access to the
//! capabilities only that host provides. The host kind is read from a
//! single global marker the first time it is needed and cached for the
//! rest of the process. Nothing outside this module looks at the marker.
//!
//! - Native processes are always a script host.
//! - Under wasm32, a global `Deno` namespace marks a script host; anything
//!   else is a document (browser) host.

mod capabilities;
mod os;

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use capabilities::{DocumentHost, Host, ScriptHost};
pub use os::classify as classify_os;

/// The two mutually exclusive host environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
    /// Non-browser runtime with its own namespace (native process, Deno)
    Script,
    /// Browser window with a document and cookie jar
    Document,
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostKind::Script => f.write_str("script"),
            HostKind::Document => f.write_str("document"),
        }
    }
}

static CURRENT: OnceCell<HostKind> = OnceCell::new();

/// Host kind of the running process.
pub fn current_kind() -> HostKind {
    *CURRENT.get_or_init(|| {
        let kind = probe_marker();
        tracing::debug!(host = %kind, "detected host environment");
        kind
    })
}

/// True when running under a script host.
pub fn is_script_host() -> bool {
    current_kind() == HostKind::Script
}

/// True when running under a document host.
pub fn is_document_host() -> bool {
    !is_script_host()
}

#[cfg(not(target_arch = "wasm32"))]
fn probe_marker() -> HostKind {
    HostKind::Script
}

#[cfg(target_arch = "wasm32")]
fn probe_marker() -> HostKind {
    let has_deno = js_sys::Reflect::has(
        &js_sys::global(),
        &wasm_bindgen::JsValue::from_str("Deno"),
    )
    .unwrap_or(false);
    if has_deno {
        HostKind::Script
    } else {
        HostKind::Document
    }
}

/// Settings used when building the capability handle for this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// File backing the persistent map on a native script host.
    pub persistent_path: PathBuf,
}

impl HostConfig {
    pub fn new(persistent_path: impl Into<PathBuf>) -> Self {
        Self {
            persistent_path: persistent_path.into(),
        }
    }

    /// Config for the running process with the default store location.
    ///
    /// On native targets the store is `store.json` under
    /// `$XDG_DATA_HOME/kvgate`, falling back to `$HOME/.local/share/kvgate`.
    /// Browser-backed hosts keep persistent values in `localStorage` and
    /// ignore the path.
    ///
    /// # Errors
    ///
    /// Returns `KvError::Storage` on a native target when neither
    /// `XDG_DATA_HOME` nor `HOME` is set.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self> {
        let dir = data_dir(std::env::var_os("XDG_DATA_HOME"), std::env::var_os("HOME"))
            .ok_or_else(|| {
                crate::error::KvError::Storage(
                    "neither XDG_DATA_HOME nor HOME is set; cannot resolve the store path"
                        .to_string(),
                )
            })?;
        Ok(Self::new(dir.join("store.json")))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(PathBuf::new()))
    }
}

/// `kvgate` data directory from the XDG base directory rules.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn data_dir(xdg_data_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    if let Some(value) = xdg_data_home.filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(value).join("kvgate"));
    }
    let home = home.filter(|v| !v.is_empty())?;
    Some(PathBuf::from(home).join(".local").join("share").join("kvgate"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_process_is_script_host() {
        assert_eq!(current_kind(), HostKind::Script);
        assert!(is_script_host());
        assert!(!is_document_host());
    }

    #[test]
    fn test_kind_is_stable() {
        assert_eq!(current_kind(), current_kind());
        assert_ne!(is_script_host(), is_document_host());
    }

    #[test]
    fn test_data_dir_prefers_xdg_data_home() {
        assert_eq!(
            data_dir(Some("/xdg".into()), Some("/home/me".into())),
            Some(PathBuf::from("/xdg/kvgate"))
        );
        assert_eq!(
            data_dir(Some("".into()), Some("/home/me".into())),
            Some(PathBuf::from("/home/me/.local/share/kvgate"))
        );
        assert_eq!(data_dir(None, None), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_from_env_store_is_never_relative() {
        // Depends on the test environment having HOME or XDG_DATA_HOME.
        if let Ok(config) = HostConfig::from_env() {
            assert!(config.persistent_path.is_absolute());
            assert!(config.persistent_path.ends_with("kvgate/store.json"));
        }
    }

    #[test]
    fn test_kind_display_and_serde() {
        assert_eq!(HostKind::Script.to_string(), "script");
        assert_eq!(
            serde_json::to_string(&HostKind::Document).unwrap(),
            "\"document\""
        );
    }
}
