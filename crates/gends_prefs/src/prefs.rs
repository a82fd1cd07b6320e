//! Lightweight preference storage contract and in-process adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors raised by preference stores and the typed helpers.
pub enum PrefsError {
    /// The backing storage could not be reached (no window, storage disabled, private mode).
    #[error("preference storage unavailable")]
    Unavailable,
    /// The backing storage rejected a read or write.
    #[error("preference storage {operation} failed for `{key}`: {detail}")]
    Backend {
        /// Storage operation that failed.
        operation: &'static str,
        /// Preference key involved.
        key: String,
        /// Backend-provided failure detail.
        detail: String,
    },
    /// A value could not be encoded or decoded as JSON.
    #[error("preference `{key}` is not valid json: {detail}")]
    Serde {
        /// Preference key involved.
        key: String,
        /// Serializer failure detail.
        detail: String,
    },
}

/// Storage service for small preference values (raw text stored per key).
///
/// Calls are synchronous; the theme context reads its preference before the first render.
pub trait PrefsStore {
    /// Loads the raw stored text for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or the read fails.
    fn load_pref(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Saves raw text for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or the write fails.
    fn save_pref(&self, key: &str, raw: &str) -> Result<(), PrefsError>;

    /// Deletes a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or the delete fails.
    fn delete_pref(&self, key: &str) -> Result<(), PrefsError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, PrefsError> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _raw: &str) -> Result<(), PrefsError> {
        Ok(())
    }

    fn delete_pref(&self, _key: &str) -> Result<(), PrefsError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string. Clones share the same map.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store seeded with one entry.
    pub fn with_entry(key: impl Into<String>, raw: impl Into<String>) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().insert(key.into(), raw.into());
        store
    }

    /// Returns the raw stored text for `key`, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), PrefsError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn delete_pref(&self, key: &str) -> Result<(), PrefsError> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store read or JSON deserialization fails.
pub fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, PrefsError> {
    let Some(raw) = store.load_pref(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| PrefsError::Serde {
        key: key.to_string(),
        detail: e.to_string(),
    })?;
    Ok(Some(value))
}

/// Serializes and saves a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), PrefsError> {
    let raw = serde_json::to_string(value).map_err(|e| PrefsError::Serde {
        key: key.to_string(),
        detail: e.to_string(),
    })?;
    store.save_pref(key, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct GalleryPrefs {
        last_route: String,
        reduced_motion: bool,
    }

    #[test]
    fn memory_prefs_store_round_trip_and_delete() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        store_obj.save_pref("gends-theme", "\"light\"").expect("save");
        assert_eq!(
            store_obj.load_pref("gends-theme").expect("load"),
            Some("\"light\"".to_string())
        );
        store_obj.delete_pref("gends-theme").expect("delete");
        assert_eq!(store_obj.load_pref("gends-theme").expect("load"), None);
    }

    #[test]
    fn memory_prefs_store_clones_share_entries() {
        let store = MemoryPrefsStore::with_entry("k", "1");
        let clone = store.clone();
        clone.save_pref("k", "2").expect("save");
        assert_eq!(store.raw("k"), Some("2".to_string()));
    }

    #[test]
    fn typed_pref_helpers_round_trip() {
        let store = MemoryPrefsStore::default();
        save_pref_with(
            &store,
            "gallery",
            &GalleryPrefs {
                last_route: "/tokens".to_string(),
                reduced_motion: true,
            },
        )
        .expect("save typed pref");

        let loaded: Option<GalleryPrefs> =
            load_pref_with(&store, "gallery").expect("load typed pref");
        assert_eq!(
            loaded,
            Some(GalleryPrefs {
                last_route: "/tokens".to_string(),
                reduced_motion: true,
            })
        );
    }

    #[test]
    fn typed_load_reports_malformed_json() {
        let store = MemoryPrefsStore::with_entry("gallery", "{not json");
        let err = load_pref_with::<_, GalleryPrefs>(&store, "gallery").expect_err("malformed");
        assert!(matches!(err, PrefsError::Serde { ref key, .. } if key == "gallery"));
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(store_obj.load_pref("k").expect("load"), None);
        store_obj.save_pref("k", "{}").expect("save");
        store_obj.delete_pref("k").expect("delete");
        assert_eq!(
            load_pref_with::<_, bool>(&store, "k").expect("load typed"),
            None
        );
    }
}
