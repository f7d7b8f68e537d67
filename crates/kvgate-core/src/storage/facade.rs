//! The storage facade.
//!
//! Every call runs the same sequence: validate arguments, resolve the
//! method to a store, require the host capability that store needs, then
//! act. Nothing is touched until every check has passed.

use super::method::StorageMethod;
use crate::cookie;
use crate::error::{KvError, Result};
use crate::host::Host;

/// Uniform read/write/clear over the stores of one host.
///
/// Borrows the host's capability handle for its lifetime and holds no state
/// of its own between calls.
#[derive(Debug)]
pub struct Storage<'h> {
    host: &'h mut Host,
}

impl<'h> Storage<'h> {
    pub fn new(host: &'h mut Host) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &Host {
        &*self.host
    }

    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(value))` if found, `Ok(None)` if not found.
    ///
    /// # Errors
    ///
    /// - `KvError::InvalidArgument` if `key` is empty, or for `Cookie` if
    ///   it is not a valid cookie name
    /// - `KvError::HostMismatch` for `Cookie` under a script host
    /// - `KvError::Storage` if the host store fails
    pub fn get(&self, method: StorageMethod, key: &str) -> Result<Option<String>> {
        require_key(method, key)?;
        tracing::debug!(%method, key, "storage get");

        match method {
            StorageMethod::Ephemeral => self.host.ephemeral().get(key),
            StorageMethod::Persistent => self.host.persistent().get(key),
            StorageMethod::Cookie => {
                let jar = self.host.require_document_host()?.cookies().read()?;
                Ok(cookie::lookup(&jar, key).map(str::to_string))
            }
        }
    }

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// For `Cookie` the host applies its own attribute and size rules to the
    /// written segment.
    ///
    /// # Errors
    ///
    /// Same as [`Storage::get`], plus `KvError::InvalidArgument` for a
    /// `Cookie` value containing `;`.
    pub fn set(&mut self, method: StorageMethod, key: &str, value: &str) -> Result<()> {
        require_key(method, key)?;
        if method == StorageMethod::Cookie {
            cookie::check_value(value)?;
        }
        tracing::debug!(%method, key, "storage set");

        match method {
            StorageMethod::Ephemeral => self.host.ephemeral_mut().set(key, value),
            StorageMethod::Persistent => self.host.persistent_mut().set(key, value),
            StorageMethod::Cookie => self
                .host
                .require_document_host_mut()?
                .cookies_mut()
                .store(key, value),
        }
    }

    /// Alias for [`Storage::set`].
    pub fn put(&mut self, method: StorageMethod, key: &str, value: &str) -> Result<()> {
        self.set(method, key, value)
    }

    /// Remove `key`. Removing a key that is not present succeeds.
    ///
    /// # Errors
    ///
    /// Same as [`Storage::get`].
    pub fn remove(&mut self, method: StorageMethod, key: &str) -> Result<()> {
        require_key(method, key)?;
        tracing::debug!(%method, key, "storage remove");

        match method {
            StorageMethod::Ephemeral => self.host.ephemeral_mut().remove(key),
            StorageMethod::Persistent => self.host.persistent_mut().remove(key),
            StorageMethod::Cookie => self
                .host
                .require_document_host_mut()?
                .cookies_mut()
                .expire(key),
        }
    }

    /// Remove every entry reachable through `method`.
    ///
    /// # Errors
    ///
    /// - `KvError::HostMismatch` for `Cookie` under a script host
    /// - `KvError::Storage` if the host store fails
    pub fn clear(&mut self, method: StorageMethod) -> Result<()> {
        tracing::debug!(%method, "storage clear");

        match method {
            StorageMethod::Ephemeral => self.host.ephemeral_mut().clear(),
            StorageMethod::Persistent => self.host.persistent_mut().clear(),
            StorageMethod::Cookie => self.host.require_document_host_mut()?.cookies_mut().clear(),
        }
    }

    // --- Text selector entry points ---
    //
    // The method name is parsed before anything else, so an unrecognized
    // selector fails with `InvalidMethod` without touching a store.

    pub fn get_with(&self, method: &str, key: &str) -> Result<Option<String>> {
        self.get(method.parse()?, key)
    }

    pub fn set_with(&mut self, method: &str, key: &str, value: &str) -> Result<()> {
        self.set(method.parse()?, key, value)
    }

    pub fn remove_with(&mut self, method: &str, key: &str) -> Result<()> {
        self.remove(method.parse()?, key)
    }

    pub fn clear_with(&mut self, method: &str) -> Result<()> {
        self.clear(method.parse()?)
    }
}

fn require_key(method: StorageMethod, key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(KvError::InvalidArgument("key must not be empty".to_string()));
    }
    if method == StorageMethod::Cookie {
        cookie::check_name(key)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MemoryCookieJar, MemoryStore};
    use crate::host::{DocumentHost, HostKind, ScriptHost};

    fn script_host() -> Host {
        Host::Script(ScriptHost::new(MemoryStore::new(), MemoryStore::new()))
    }

    fn document_host(jar: &str) -> Host {
        Host::Document(DocumentHost::new(
            MemoryStore::new(),
            MemoryStore::new(),
            MemoryCookieJar::from_jar(jar),
        ))
    }

    #[test]
    fn test_methods_are_isolated() {
        let mut host = document_host("");
        let mut storage = Storage::new(&mut host);

        storage.set(StorageMethod::Ephemeral, "k", "session").unwrap();
        storage.set(StorageMethod::Persistent, "k", "local").unwrap();
        storage.set(StorageMethod::Cookie, "k", "jar").unwrap();

        assert_eq!(storage.get(StorageMethod::Ephemeral, "k").unwrap().as_deref(), Some("session"));
        assert_eq!(storage.get(StorageMethod::Persistent, "k").unwrap().as_deref(), Some("local"));
        assert_eq!(storage.get(StorageMethod::Cookie, "k").unwrap().as_deref(), Some("jar"));

        storage.clear(StorageMethod::Persistent).unwrap();
        assert_eq!(storage.get(StorageMethod::Persistent, "k").unwrap(), None);
        assert!(storage.get(StorageMethod::Ephemeral, "k").unwrap().is_some());
        assert!(storage.get(StorageMethod::Cookie, "k").unwrap().is_some());
    }

    #[test]
    fn test_clear_returns_ok_after_matching_branch() {
        let mut host = script_host();
        let mut storage = Storage::new(&mut host);
        for method in [StorageMethod::Ephemeral, StorageMethod::Persistent] {
            storage.clear(method).unwrap();
        }
    }

    #[test]
    fn test_cookie_under_script_host_is_host_mismatch() {
        let mut host = script_host();
        let mut storage = Storage::new(&mut host);

        let err = storage.get(StorageMethod::Cookie, "a").unwrap_err();
        assert!(matches!(
            err,
            KvError::HostMismatch {
                required: HostKind::Document,
                actual: HostKind::Script
            }
        ));
        assert!(matches!(
            storage.set(StorageMethod::Cookie, "a", "1"),
            Err(KvError::HostMismatch { .. })
        ));
        assert!(matches!(
            storage.clear(StorageMethod::Cookie),
            Err(KvError::HostMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_key_checked_before_host() {
        let mut host = script_host();
        let mut storage = Storage::new(&mut host);
        assert!(matches!(
            storage.get(StorageMethod::Cookie, ""),
            Err(KvError::InvalidArgument(_))
        ));
        assert!(matches!(
            storage.remove(StorageMethod::Persistent, ""),
            Err(KvError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_text_selector_rejects_unknown_method() {
        let mut host = script_host();
        let mut storage = Storage::new(&mut host);

        assert!(matches!(storage.set_with("disk", "a", "1"), Err(KvError::InvalidMethod(_))));
        assert!(matches!(storage.get_with("disk", ""), Err(KvError::InvalidMethod(_))));
        assert!(matches!(storage.get_with("local", "a"), Err(KvError::InvalidMethod(_))));
        assert_eq!(storage.get_with("persistent", "a").unwrap(), None);
    }

    #[test]
    fn test_cookie_syntax_rejected_before_jar_is_touched() {
        let mut host = document_host("a=1");
        let mut storage = Storage::new(&mut host);

        for (key, value) in [("a", "1;b=2"), ("a=b", "1"), (" k", "v"), ("k;x", "v")] {
            assert!(
                matches!(
                    storage.set(StorageMethod::Cookie, key, value),
                    Err(KvError::InvalidArgument(_))
                ),
                "{key:?}={value:?}"
            );
        }
        assert!(matches!(
            storage.get(StorageMethod::Cookie, "a=b"),
            Err(KvError::InvalidArgument(_))
        ));
        assert!(matches!(
            storage.remove(StorageMethod::Cookie, " a"),
            Err(KvError::InvalidArgument(_))
        ));

        assert_eq!(storage.get(StorageMethod::Cookie, "a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get(StorageMethod::Cookie, "b").unwrap(), None);
    }

    #[test]
    fn test_cookie_name_checked_before_host() {
        let mut host = script_host();
        let mut storage = Storage::new(&mut host);
        assert!(matches!(
            storage.set(StorageMethod::Cookie, "a=b", "1"),
            Err(KvError::InvalidArgument(_))
        ));
        // Other methods take any non-empty key.
        storage.set(StorageMethod::Persistent, "a=b; c", "1;2").unwrap();
        assert_eq!(
            storage.get(StorageMethod::Persistent, "a=b; c").unwrap().as_deref(),
            Some("1;2")
        );
    }

    #[test]
    fn test_put_is_set() {
        let mut host = script_host();
        let mut storage = Storage::new(&mut host);
        storage.put(StorageMethod::default(), "a", "1").unwrap();
        assert_eq!(storage.get(StorageMethod::Persistent, "a").unwrap().as_deref(), Some("1"));
    }
}
