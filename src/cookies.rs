//! Credential storage backed by browser cookies.
//!
//! The sidebar only ever reads the two token cookies and, on rotation,
//! rewrites the access token with a fresh max-age.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::error::StorageError;

/// Cookie holding the Spotify access token.
pub const ACCESS_TOKEN_COOKIE: &str = "acct";
/// Cookie holding the Spotify refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "reft";

pub trait CredentialStore {
    fn get(&self, name: &str) -> Option<String>;

    /// Write `name=value` expiring after `max_age_secs` seconds.
    fn set(&self, name: &str, value: &str, max_age_secs: u64) -> Result<(), StorageError>;
}

/// `document.cookie` accessor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCookies;

impl DocumentCookies {
    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }
}

impl CredentialStore for DocumentCookies {
    fn get(&self, name: &str) -> Option<String> {
        let raw = Self::document()?.cookie().ok()?;
        find_cookie(&raw, name)
    }

    fn set(&self, name: &str, value: &str, max_age_secs: u64) -> Result<(), StorageError> {
        let doc = Self::document().ok_or(StorageError::NoDocument)?;
        doc.set_cookie(&format_cookie(name, value, max_age_secs))
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Look up `name` in a `document.cookie` string, URI-decoding its value.
pub fn find_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
}

/// Serialize a cookie assignment for `document.cookie`.
pub fn format_cookie(name: &str, value: &str, max_age_secs: u64) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/",
        name,
        urlencoding::encode(value),
        max_age_secs
    )
}

#[cfg(test)]
pub use memory::MemoryStore;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_cookie_among_many() {
        let raw = "theme=dark; acct=BQD123; reft=AQB456";
        assert_eq!(find_cookie(raw, "acct").as_deref(), Some("BQD123"));
        assert_eq!(find_cookie(raw, "reft").as_deref(), Some("AQB456"));
    }

    #[test]
    fn test_find_cookie_missing() {
        assert_eq!(find_cookie("theme=dark", "acct"), None);
        assert_eq!(find_cookie("", "acct"), None);
    }

    #[test]
    fn test_find_cookie_does_not_match_prefix() {
        assert_eq!(find_cookie("xacct=nope; acct=yes", "acct").as_deref(), Some("yes"));
    }

    #[test]
    fn test_find_cookie_decodes_value() {
        assert_eq!(find_cookie("acct=a%2Fb%3Dc", "acct").as_deref(), Some("a/b=c"));
    }

    #[test]
    fn test_format_cookie_sets_max_age_and_path() {
        assert_eq!(
            format_cookie("acct", "BQD/new=", 3600),
            "acct=BQD%2Fnew%3D; Max-Age=3600; Path=/"
        );
    }

    #[test]
    fn test_memory_store_records_writes() {
        let store = MemoryStore::with(&[("acct", "old")]);
        store.set("acct", "new", 60).unwrap();
        assert_eq!(store.get("acct").as_deref(), Some("new"));
        assert_eq!(store.writes.borrow().len(), 1);
    }

    #[test]
    fn test_memory_store_clones_share_writes() {
        let store = MemoryStore::default();
        let handle = store.clone();
        store.set("acct", "new", 60).unwrap();
        assert_eq!(handle.get("acct").as_deref(), Some("new"));
        assert_eq!(handle.writes.borrow().len(), 1);
    }
}
