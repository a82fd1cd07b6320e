//! Preference storage contracts and adapters for the GenDS component library.
//!
//! The crate exposes the [`PrefsStore`] contract used by the theme context, an in-memory and a
//! no-op adapter for tests and unsupported targets, and the browser [`WebPrefsStore`] backed by
//! `window.localStorage`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod local_prefs;
mod prefs;

pub use local_prefs::WebPrefsStore;
pub use prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsError, PrefsStore,
};
