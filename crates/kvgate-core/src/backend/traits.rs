//! Backend trait definitions.
//!
//! The host environment owns the actual stores. These traits are the seam
//! the facade addresses them through, so the same dispatch logic runs over
//! a JSON file on a native host, `localStorage` in a browser, or an
//! in-memory fake in tests.

use crate::error::Result;

/// A string-keyed map of text values owned by the host.
///
/// Implementations must ensure:
/// - A single `set`/`remove`/`clear` call is atomic
/// - `get` after a successful `set` on the same key observes the new value
/// - Keys are never interpreted; any non-empty text is a valid key
pub trait KeyValueStore {
    /// Get the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(value))` if found, `Ok(None)` if not found.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `KvError::Storage` if the host refuses the write (quota,
    /// permissions, disk failure).
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a key that is not present succeeds.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Remove every entry in the store.
    fn clear(&mut self) -> Result<()>;

    /// Every key currently stored, in the store's native order.
    fn keys(&self) -> Result<Vec<String>>;

    /// Number of stored entries.
    fn len(&self) -> Result<usize> {
        Ok(self.keys()?.len())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// The host's cookie jar, exposed as one `key=value; key2=value2` string.
///
/// Writes go through the host so that it can apply its own attribute and
/// size rules; the facade never assumes a write is reflected verbatim.
pub trait CookieJar {
    /// The full jar string as the host reports it.
    fn read(&self) -> Result<String>;

    /// Add or replace the cookie named `key`.
    fn store(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete the cookie named `key`.
    fn expire(&mut self, key: &str) -> Result<()>;

    /// Delete every cookie in the jar.
    fn clear(&mut self) -> Result<()> {
        let jar = self.read()?;
        for key in crate::cookie::keys(&jar) {
            self.expire(key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traits_are_object_safe() {
        fn _accepts_store(_store: &dyn KeyValueStore) {}
        fn _accepts_jar(_jar: &dyn CookieJar) {}
    }
}
