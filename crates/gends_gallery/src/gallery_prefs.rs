//! Gallery layout preferences persisted next to the theme.

use gends_prefs::{load_pref_with, save_pref_with, PrefsStore};
use leptos::logging;
use serde::{Deserialize, Serialize};

/// Storage key for [`GalleryPrefs`].
pub const GALLERY_PREFS_KEY: &str = "gends-gallery";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Layout choices that survive reloads.
pub struct GalleryPrefs {
    /// Whether the navigation sidebar is collapsed.
    pub nav_collapsed: bool,
}

impl GalleryPrefs {
    /// Reads stored preferences. Missing or unreadable values give the defaults.
    pub fn load(store: &dyn PrefsStore) -> Self {
        match load_pref_with(store, GALLERY_PREFS_KEY) {
            Ok(prefs) => prefs.unwrap_or_default(),
            Err(err) => {
                logging::warn!("gallery preference load failed: {err}");
                Self::default()
            }
        }
    }

    /// Writes the preferences, logging failures.
    pub fn save(self, store: &dyn PrefsStore) {
        if let Err(err) = save_pref_with(store, GALLERY_PREFS_KEY, &self) {
            logging::warn!("gallery preference save failed: {err}");
        }
    }

    /// Copy with the sidebar collapse flipped.
    pub fn toggled_nav(self) -> Self {
        Self {
            nav_collapsed: !self.nav_collapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use gends_prefs::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn collapsed_nav_survives_a_reload() {
        let store = MemoryPrefsStore::default();
        assert_eq!(GalleryPrefs::load(&store), GalleryPrefs::default());

        GalleryPrefs::default().toggled_nav().save(&store);
        assert_eq!(
            store.raw(GALLERY_PREFS_KEY).as_deref(),
            Some(r#"{"nav_collapsed":true}"#)
        );
        assert!(GalleryPrefs::load(&store).nav_collapsed);
    }

    #[test]
    fn unreadable_prefs_fall_back_to_defaults() {
        let store = MemoryPrefsStore::with_entry(GALLERY_PREFS_KEY, "{broken");
        assert_eq!(GalleryPrefs::load(&store), GalleryPrefs::default());

        let store = MemoryPrefsStore::with_entry(GALLERY_PREFS_KEY, "{}");
        assert_eq!(GalleryPrefs::load(&store), GalleryPrefs::default());
    }
}
