//! Capability handles for each host kind.

use std::fmt;

use super::{current_kind, os, HostConfig, HostKind};
use crate::backend::{CookieJar, KeyValueStore};
use crate::error::{KvError, Result};

/// Stores a script host provides.
pub struct ScriptHost {
    ephemeral: Box<dyn KeyValueStore>,
    persistent: Box<dyn KeyValueStore>,
}

impl ScriptHost {
    pub fn new(
        ephemeral: impl KeyValueStore + 'static,
        persistent: impl KeyValueStore + 'static,
    ) -> Self {
        Self {
            ephemeral: Box::new(ephemeral),
            persistent: Box::new(persistent),
        }
    }

    pub fn ephemeral(&self) -> &dyn KeyValueStore {
        self.ephemeral.as_ref()
    }

    pub fn ephemeral_mut(&mut self) -> &mut dyn KeyValueStore {
        self.ephemeral.as_mut()
    }

    pub fn persistent(&self) -> &dyn KeyValueStore {
        self.persistent.as_ref()
    }

    pub fn persistent_mut(&mut self) -> &mut dyn KeyValueStore {
        self.persistent.as_mut()
    }
}

impl fmt::Debug for ScriptHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptHost").finish_non_exhaustive()
    }
}

/// Stores a document host provides, including its cookie jar.
pub struct DocumentHost {
    ephemeral: Box<dyn KeyValueStore>,
    persistent: Box<dyn KeyValueStore>,
    cookies: Box<dyn CookieJar>,
}

impl DocumentHost {
    pub fn new(
        ephemeral: impl KeyValueStore + 'static,
        persistent: impl KeyValueStore + 'static,
        cookies: impl CookieJar + 'static,
    ) -> Self {
        Self {
            ephemeral: Box::new(ephemeral),
            persistent: Box::new(persistent),
            cookies: Box::new(cookies),
        }
    }

    pub fn ephemeral(&self) -> &dyn KeyValueStore {
        self.ephemeral.as_ref()
    }

    pub fn ephemeral_mut(&mut self) -> &mut dyn KeyValueStore {
        self.ephemeral.as_mut()
    }

    pub fn persistent(&self) -> &dyn KeyValueStore {
        self.persistent.as_ref()
    }

    pub fn persistent_mut(&mut self) -> &mut dyn KeyValueStore {
        self.persistent.as_mut()
    }

    pub fn cookies(&self) -> &dyn CookieJar {
        self.cookies.as_ref()
    }

    pub fn cookies_mut(&mut self) -> &mut dyn CookieJar {
        self.cookies.as_mut()
    }
}

impl fmt::Debug for DocumentHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentHost").finish_non_exhaustive()
    }
}

/// The capability handle of exactly one host kind.
///
/// Build one with [`Host::detect`] for the running process, or construct a
/// variant directly to inject fake backends.
#[derive(Debug)]
pub enum Host {
    Script(ScriptHost),
    Document(DocumentHost),
}

impl Host {
    /// Build the handle for the running process.
    ///
    /// # Errors
    ///
    /// Returns `KvError::Storage` if a host store cannot be opened (for
    /// example a corrupt persistent file, or storage disabled in the
    /// browser).
    pub fn detect(config: &HostConfig) -> Result<Self> {
        let kind = current_kind();
        let host = Self::build(kind, config)?;
        tracing::debug!(host = %kind, "built host capabilities");
        Ok(host)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn build(_kind: HostKind, config: &HostConfig) -> Result<Self> {
        use crate::backend::{FileStore, MemoryStore};

        let persistent = FileStore::open(&config.persistent_path)?;
        Ok(Host::Script(ScriptHost::new(MemoryStore::new(), persistent)))
    }

    #[cfg(target_arch = "wasm32")]
    fn build(kind: HostKind, _config: &HostConfig) -> Result<Self> {
        use crate::backend::{DocumentCookies, WebStorage};

        let ephemeral = WebStorage::session()?;
        let persistent = WebStorage::local()?;
        Ok(match kind {
            HostKind::Script => Host::Script(ScriptHost::new(ephemeral, persistent)),
            HostKind::Document => Host::Document(DocumentHost::new(
                ephemeral,
                persistent,
                DocumentCookies::from_window()?,
            )),
        })
    }

    pub fn kind(&self) -> HostKind {
        match self {
            Host::Script(_) => HostKind::Script,
            Host::Document(_) => HostKind::Document,
        }
    }

    pub fn is_script_host(&self) -> bool {
        self.kind() == HostKind::Script
    }

    pub fn is_document_host(&self) -> bool {
        !self.is_script_host()
    }

    /// Session-scoped map. Both host kinds provide one.
    pub fn ephemeral(&self) -> &dyn KeyValueStore {
        match self {
            Host::Script(script) => script.ephemeral(),
            Host::Document(document) => document.ephemeral(),
        }
    }

    pub fn ephemeral_mut(&mut self) -> &mut dyn KeyValueStore {
        match self {
            Host::Script(script) => script.ephemeral_mut(),
            Host::Document(document) => document.ephemeral_mut(),
        }
    }

    /// Durable map. Both host kinds provide one.
    pub fn persistent(&self) -> &dyn KeyValueStore {
        match self {
            Host::Script(script) => script.persistent(),
            Host::Document(document) => document.persistent(),
        }
    }

    pub fn persistent_mut(&mut self) -> &mut dyn KeyValueStore {
        match self {
            Host::Script(script) => script.persistent_mut(),
            Host::Document(document) => document.persistent_mut(),
        }
    }

    /// Normalized name of the operating system the host runs on.
    pub fn os_name(&self) -> &'static str {
        os::os_name(self.kind())
    }

    /// The script host handle, or `HostMismatch` under a document host.
    pub fn require_script_host(&self) -> Result<&ScriptHost> {
        match self {
            Host::Script(script) => Ok(script),
            Host::Document(_) => Err(self.mismatch(HostKind::Script)),
        }
    }

    pub fn require_script_host_mut(&mut self) -> Result<&mut ScriptHost> {
        let err = self.mismatch(HostKind::Script);
        match self {
            Host::Script(script) => Ok(script),
            Host::Document(_) => Err(err),
        }
    }

    /// The document host handle, or `HostMismatch` under a script host.
    pub fn require_document_host(&self) -> Result<&DocumentHost> {
        match self {
            Host::Document(document) => Ok(document),
            Host::Script(_) => Err(self.mismatch(HostKind::Document)),
        }
    }

    pub fn require_document_host_mut(&mut self) -> Result<&mut DocumentHost> {
        let err = self.mismatch(HostKind::Document);
        match self {
            Host::Document(document) => Ok(document),
            Host::Script(_) => Err(err),
        }
    }

    fn mismatch(&self, required: HostKind) -> KvError {
        KvError::host_mismatch(required, self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MemoryCookieJar, MemoryStore};

    fn script() -> Host {
        Host::Script(ScriptHost::new(MemoryStore::new(), MemoryStore::new()))
    }

    fn document() -> Host {
        Host::Document(DocumentHost::new(
            MemoryStore::new(),
            MemoryStore::new(),
            MemoryCookieJar::new(),
        ))
    }

    #[test]
    fn test_script_host_accessors() {
        let mut host = script();
        assert_eq!(host.kind(), HostKind::Script);
        assert!(host.is_script_host());
        assert!(host.require_script_host().is_ok());
        assert!(host.require_script_host_mut().is_ok());

        let err = host.require_document_host().unwrap_err();
        assert!(matches!(
            err,
            KvError::HostMismatch {
                required: HostKind::Document,
                actual: HostKind::Script
            }
        ));
        assert!(host.require_document_host_mut().is_err());
    }

    #[test]
    fn test_document_host_accessors() {
        let mut host = document();
        assert!(host.is_document_host());
        assert!(host.require_document_host_mut().is_ok());
        assert!(matches!(
            host.require_script_host(),
            Err(KvError::HostMismatch {
                required: HostKind::Script,
                actual: HostKind::Document
            })
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_detect_native_builds_file_backed_script_host() {
        let dir = tempfile::tempdir().unwrap();
        let config = HostConfig::new(dir.path().join("store.json"));

        let mut host = Host::detect(&config).unwrap();
        assert!(host.is_script_host());

        let script = host.require_script_host_mut().unwrap();
        script.persistent_mut().set("k", "v").unwrap();
        assert!(config.persistent_path.exists());
    }
}
