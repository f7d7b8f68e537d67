//! Browser-provided backends (wasm32 only).
//!
//! Thin wrappers over the Web Storage API and `document.cookie`. The host
//! owns the underlying objects; these types only hold JS handles to them.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, Storage};

use super::traits::{CookieJar, KeyValueStore};
use crate::cookie;
use crate::error::{KvError, Result};

/// Expiry attribute that makes the host drop a cookie immediately.
const EXPIRED: &str = "expires=Thu, 01 Jan 1970 00:00:00 GMT";

/// Cookies written here are visible to every page on the site.
const SITE_PATH: &str = "path=/";

/// `localStorage` or `sessionStorage`.
#[derive(Debug, Clone)]
pub struct WebStorage {
    storage: Storage,
}

impl WebStorage {
    /// Look up a `Storage` object by its global property name.
    ///
    /// Works under both a browser window and Deno, which exposes the same
    /// globals.
    pub fn from_global(name: &str) -> Result<Self> {
        let value = Reflect::get(&js_sys::global(), &JsValue::from_str(name))?;
        if value.is_undefined() || value.is_null() {
            return Err(KvError::Storage(format!("{name} is not available")));
        }
        let storage = value
            .dyn_into::<Storage>()
            .map_err(|_| KvError::Storage(format!("{name} is not a Storage object")))?;
        Ok(Self { storage })
    }

    pub fn local() -> Result<Self> {
        Self::from_global("localStorage")
    }

    pub fn session() -> Result<Self> {
        Self::from_global("sessionStorage")
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.storage.get_item(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        Ok(self.storage.set_item(key, value)?)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        Ok(self.storage.remove_item(key)?)
    }

    fn clear(&mut self) -> Result<()> {
        Ok(self.storage.clear()?)
    }

    fn keys(&self) -> Result<Vec<String>> {
        let len = self.storage.length()?;
        let mut keys = Vec::with_capacity(len as usize);
        for index in 0..len {
            if let Some(key) = self.storage.key(index)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    fn len(&self) -> Result<usize> {
        Ok(self.storage.length()? as usize)
    }
}

/// The window document's cookie jar.
#[derive(Debug, Clone)]
pub struct DocumentCookies {
    document: HtmlDocument,
}

impl DocumentCookies {
    pub fn new(document: HtmlDocument) -> Self {
        Self { document }
    }

    /// Jar of the current window's document.
    pub fn from_window() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| KvError::Storage("window.document is not available".to_string()))?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| KvError::Storage("document is not an HTML document".to_string()))?;
        Ok(Self::new(document))
    }
}

impl CookieJar for DocumentCookies {
    fn read(&self) -> Result<String> {
        Ok(self.document.cookie()?)
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        // The host replaces a same-named cookie with the same path.
        let segment = format!("{}; {SITE_PATH}", cookie::format_segment(key, value));
        Ok(self.document.set_cookie(&segment)?)
    }

    /// Expire `key` at the site root and at the page's default path.
    ///
    /// Cookies scoped to any other path are out of reach from this page and
    /// stay readable wherever that path applies.
    fn expire(&mut self, key: &str) -> Result<()> {
        let expired = format!("{}; {EXPIRED}", cookie::format_segment(key, ""));
        self.document.set_cookie(&format!("{expired}; {SITE_PATH}"))?;
        Ok(self.document.set_cookie(&expired)?)
    }
}
