//! GenDS component gallery.
//!
//! Renders one route per primitive family plus the design token catalog, all under a
//! [`gends_ui::ThemeProvider`] so every story can be reviewed in both themes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod gallery_app;
mod gallery_prefs;
mod pages;

pub use gallery_app::{GalleryApp, GalleryPage};
pub use gallery_prefs::{GalleryPrefs, GALLERY_PREFS_KEY};

/// Mounts the gallery into the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <GalleryApp /> })
}
