//! `localStorage`-backed preference store.
//!
//! On non-wasm targets every read misses and every write succeeds, so native tests and tools can
//! hold a [`WebPrefsStore`] without a browser.

use crate::prefs::{PrefsError, PrefsStore};

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, PrefsError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(PrefsError::Unavailable)
}

impl PrefsStore for WebPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| PrefsError::Backend {
                    operation: "get_item",
                    key: key.to_string(),
                    detail: format!("{e:?}"),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, raw)
                .map_err(|e| PrefsError::Backend {
                    operation: "set_item",
                    key: key.to_string(),
                    detail: format!("{e:?}"),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw);
            Ok(())
        }
    }

    fn delete_pref(&self, key: &str) -> Result<(), PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| PrefsError::Backend {
                    operation: "remove_item",
                    key: key.to_string(),
                    detail: format!("{e:?}"),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{load_pref_with, save_pref_with};

    #[test]
    fn native_web_store_misses_reads_and_accepts_writes() {
        let store = WebPrefsStore;
        save_pref_with(&store, "gends-theme", &"light").expect("save");
        assert_eq!(store.load_pref("gends-theme").expect("load"), None);
        assert_eq!(
            load_pref_with::<_, String>(&store, "gends-theme").expect("typed load"),
            None
        );
        store.delete_pref("gends-theme").expect("delete");
    }
}
