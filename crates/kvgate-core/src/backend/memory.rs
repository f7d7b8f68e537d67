//! In-process backends.
//!
//! `MemoryStore` is the script host's session store: it lives exactly as
//! long as the process. `MemoryCookieJar` keeps a jar string the way a
//! browser would report it, for embedders without a real document.

use std::collections::BTreeMap;

use super::traits::{CookieJar, KeyValueStore};
use crate::cookie;
use crate::error::Result;

/// Ordered in-memory map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.entries.len())
    }
}

/// A cookie jar held as its raw string form.
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    jar: String,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing jar string, kept verbatim until the first write.
    pub fn from_jar(jar: impl Into<String>) -> Self {
        Self { jar: jar.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.jar
    }
}

impl CookieJar for MemoryCookieJar {
    fn read(&self) -> Result<String> {
        Ok(self.jar.clone())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        self.jar = cookie::upsert(&self.jar, key, value);
        Ok(())
    }

    fn expire(&mut self, key: &str) -> Result<()> {
        self.jar = cookie::without(&self.jar, key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.jar.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));

        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        store.remove("a").unwrap();
    }

    #[test]
    fn test_memory_store_clear_and_len() {
        let mut store: MemoryStore = [("b", "2"), ("a", "1")].into_iter().collect();
        assert_eq!(store.len().unwrap(), 2);
        assert_eq!(store.keys().unwrap(), vec!["a", "b"]);

        store.clear().unwrap();
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_cookie_jar_store_and_expire() {
        let mut jar = MemoryCookieJar::from_jar("a=1;b=2");
        jar.store("b", "3").unwrap();
        jar.store("c", "4").unwrap();
        assert_eq!(jar.as_str(), "a=1; b=3; c=4");

        jar.expire("a").unwrap();
        assert_eq!(jar.as_str(), "b=3; c=4");
    }

    #[test]
    fn test_cookie_jar_clear_empties_jar() {
        let mut jar = MemoryCookieJar::from_jar("a=1;b=2");
        jar.clear().unwrap();
        assert_eq!(jar.read().unwrap(), "");
    }
}
