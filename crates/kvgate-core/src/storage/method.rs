//! Storage method selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KvError;
use crate::host::HostKind;

/// Which host store a facade call addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageMethod {
    /// Session-scoped map, gone when the session ends
    Ephemeral,
    /// Map that survives restarts
    #[default]
    Persistent,
    /// The document's cookie jar (document host only)
    Cookie,
}

impl StorageMethod {
    pub const ALL: [StorageMethod; 3] = [
        StorageMethod::Ephemeral,
        StorageMethod::Persistent,
        StorageMethod::Cookie,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageMethod::Ephemeral => "ephemeral",
            StorageMethod::Persistent => "persistent",
            StorageMethod::Cookie => "cookie",
        }
    }

    /// Whether this method is legal under `kind`.
    pub fn is_supported_by(&self, kind: HostKind) -> bool {
        match self {
            StorageMethod::Ephemeral | StorageMethod::Persistent => true,
            StorageMethod::Cookie => kind == HostKind::Document,
        }
    }

    /// Every method legal under `kind`, in declaration order.
    pub fn supported_by(kind: HostKind) -> Vec<StorageMethod> {
        Self::ALL
            .into_iter()
            .filter(|method| method.is_supported_by(kind))
            .collect()
    }
}

impl fmt::Display for StorageMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageMethod {
    type Err = KvError;

    /// Parse one of the exact names `ephemeral`, `persistent` or `cookie`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ephemeral" => Ok(StorageMethod::Ephemeral),
            "persistent" => Ok(StorageMethod::Persistent),
            "cookie" => Ok(StorageMethod::Cookie),
            _ => Err(KvError::InvalidMethod(format!(
                "'{}' (expected ephemeral, persistent, or cookie)",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_persistent() {
        assert_eq!(StorageMethod::default(), StorageMethod::Persistent);
    }

    #[test]
    fn test_parse_exact_names() {
        assert_eq!("ephemeral".parse::<StorageMethod>().unwrap(), StorageMethod::Ephemeral);
        assert_eq!("persistent".parse::<StorageMethod>().unwrap(), StorageMethod::Persistent);
        assert_eq!("cookie".parse::<StorageMethod>().unwrap(), StorageMethod::Cookie);
    }

    #[test]
    fn test_parse_unknown_is_invalid_method() {
        for bad in ["", "indexeddb", "cookies", "disk", "session", "local", "Cookie", " persistent"] {
            let err = bad.parse::<StorageMethod>().unwrap_err();
            assert!(matches!(err, KvError::InvalidMethod(_)), "{bad}");
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for method in StorageMethod::ALL {
            assert_eq!(method.to_string().parse::<StorageMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_cookie_only_on_document_host() {
        assert_eq!(
            StorageMethod::supported_by(HostKind::Script),
            vec![StorageMethod::Ephemeral, StorageMethod::Persistent]
        );
        assert_eq!(StorageMethod::supported_by(HostKind::Document).len(), 3);
        assert!(!StorageMethod::Cookie.is_supported_by(HostKind::Script));
    }
}
