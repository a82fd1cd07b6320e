//! Dark/light theme context with preference persistence.
//!
//! [`ThemeStore`] is the plain state holder: it reads the persisted preference on
//! [`ThemeStore::init`], writes it on every change, and fans changes out to subscribers.
//! [`ThemeProvider`] wraps one store in a Leptos context for the component tree and keeps the
//! document's `data-theme` attribute in sync; [`use_theme`] reads that context.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use gends_prefs::{NoopPrefsStore, PrefsStore, WebPrefsStore};
use leptos::*;
use serde::{Deserialize, Serialize};

/// Local-storage key the theme preference is persisted under.
pub const THEME_STORAGE_KEY: &str = "gends-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Color scheme applied at the document root.
pub enum Theme {
    /// Dark scheme; the stylesheet's base tokens.
    Dark,
    /// Light scheme; selected by `data-theme="light"` on the root element.
    Light,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

impl Theme {
    /// Stable token used for persistence and DOM attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Parses a persisted value. Accepts the bare token and its JSON-quoted form.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let raw = raw
            .strip_prefix('"')
            .and_then(|inner| inner.strip_suffix('"'))
            .unwrap_or(raw);
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Value of the root `data-theme` attribute; `None` means the attribute is removed.
    pub fn root_attribute(self) -> Option<&'static str> {
        match self {
            Self::Dark => None,
            Self::Light => Some("light"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Theme persistence settings.
pub struct ThemeConfig {
    /// Preference key.
    pub storage_key: String,
    /// Theme used when nothing valid is persisted.
    pub default_theme: Theme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_string(),
            default_theme: Theme::Dark,
        }
    }
}

type Listener = Rc<dyn Fn(Theme)>;

struct ThemeStoreInner {
    config: ThemeConfig,
    prefs: Rc<dyn PrefsStore>,
    theme: Cell<Theme>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener: Cell<u64>,
}

#[derive(Clone)]
/// Theme state holder shared by handle. Clones observe the same theme.
pub struct ThemeStore {
    inner: Rc<ThemeStoreInner>,
}

impl ThemeStore {
    /// Loads the persisted theme (falling back to the configured default) and returns the store.
    pub fn init(config: ThemeConfig, prefs: Rc<dyn PrefsStore>) -> Self {
        let theme = match prefs.load_pref(&config.storage_key) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                logging::warn!(
                    "ignoring unknown persisted theme `{raw}` under `{}`",
                    config.storage_key
                );
                config.default_theme
            }),
            Ok(None) => config.default_theme,
            Err(err) => {
                logging::warn!("theme preference load failed: {err}");
                config.default_theme
            }
        };

        Self {
            inner: Rc::new(ThemeStoreInner {
                config,
                prefs,
                theme: Cell::new(theme),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
            }),
        }
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.inner.theme.get()
    }

    /// Active configuration.
    pub fn config(&self) -> &ThemeConfig {
        &self.inner.config
    }

    /// Switches theme, persists it, and notifies subscribers. Setting the current theme is a no-op.
    pub fn set(&self, theme: Theme) {
        if self.theme() == theme {
            return;
        }

        if let Err(err) = self
            .inner
            .prefs
            .save_pref(&self.inner.config.storage_key, theme.token())
        {
            logging::warn!("theme preference save failed: {err}");
        }
        self.switch(theme);
    }

    /// Forgets the persisted preference and returns to the configured default theme.
    pub fn reset(&self) {
        if let Err(err) = self.inner.prefs.delete_pref(&self.inner.config.storage_key) {
            logging::warn!("theme preference reset failed: {err}");
        }
        self.switch(self.inner.config.default_theme);
    }

    fn switch(&self, theme: Theme) {
        if self.inner.theme.replace(theme) == theme {
            return;
        }

        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(theme);
        }
    }

    /// Flips between dark and light.
    pub fn toggle(&self) {
        self.set(self.theme().toggled());
    }

    /// Registers a change listener. It stays registered until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(Theme) + 'static) -> Subscription {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }
}

/// Keeps a [`ThemeStore::subscribe`] listener registered; unsubscribes on drop.
pub struct Subscription {
    store: Weak<ThemeStoreInner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Sets or clears `data-theme` on the document element.
pub fn apply_document_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let result = match theme.root_attribute() {
            Some(value) => root.set_attribute("data-theme", value),
            None => root.remove_attribute("data-theme"),
        };
        if let Err(err) = result {
            logging::warn!("theme attribute update failed: {err:?}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

#[derive(Clone, Copy)]
/// Reactive theme handle provided by [`ThemeProvider`].
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    store: StoredValue<ThemeStore>,
}

impl ThemeContext {
    /// Binds a store to a reactive signal. The signal follows the store while the returned
    /// subscription is alive.
    pub fn new(store: ThemeStore) -> (Self, Subscription) {
        let theme = create_rw_signal(store.theme());
        let subscription = store.subscribe(move |next| theme.set(next));
        (
            Self {
                theme,
                store: store_value(store),
            },
            subscription,
        )
    }

    /// Current theme, tracked.
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Current theme as a read-only signal.
    pub fn signal(&self) -> Signal<Theme> {
        self.theme.into()
    }

    /// Whether the dark theme is active. Tracked.
    pub fn is_dark(&self) -> bool {
        self.theme() == Theme::Dark
    }

    /// Whether the light theme is active. Tracked.
    pub fn is_light(&self) -> bool {
        self.theme() == Theme::Light
    }

    /// Switches theme.
    pub fn set(&self, theme: Theme) {
        self.store.get_value().set(theme);
    }

    /// Flips between dark and light.
    pub fn toggle(&self) {
        self.store.get_value().toggle();
    }

    /// Drops the persisted choice and returns to the default theme.
    pub fn reset(&self) {
        self.store.get_value().reset();
    }
}

/// Preference backend for a provider. Without persistence nothing is read or written.
fn provider_prefs(persist: bool, prefs: Option<Rc<dyn PrefsStore>>) -> Rc<dyn PrefsStore> {
    match (persist, prefs) {
        (false, _) => Rc::new(NoopPrefsStore),
        (true, Some(prefs)) => prefs,
        (true, None) => Rc::new(WebPrefsStore),
    }
}

#[component]
/// Root provider that owns the theme for everything rendered inside it.
pub fn ThemeProvider(
    /// Persistence settings. Defaults to the `gends-theme` key and the dark theme.
    #[prop(optional)]
    config: Option<ThemeConfig>,
    /// Preference backend. Defaults to browser local storage.
    #[prop(optional)]
    prefs: Option<Rc<dyn PrefsStore>>,
    /// Whether the choice survives reloads. When off the theme starts from the default.
    #[prop(default = true)]
    persist: bool,
    children: Children,
) -> impl IntoView {
    let store = ThemeStore::init(config.unwrap_or_default(), provider_prefs(persist, prefs));
    apply_document_theme(store.theme());

    let document_sync = store.subscribe(apply_document_theme);
    let (context, signal_sync) = ThemeContext::new(store);
    let subscriptions = store_value(Some((document_sync, signal_sync)));
    on_cleanup(move || subscriptions.set_value(None));

    provide_context(context);
    children()
}

/// Returns the theme context of the nearest [`ThemeProvider`].
///
/// # Panics
///
/// Panics if called outside a [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}

#[cfg(test)]
mod tests {
    use gends_prefs::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    fn store_with(raw: Option<&str>) -> (ThemeStore, MemoryPrefsStore) {
        let prefs = match raw {
            Some(raw) => MemoryPrefsStore::with_entry(THEME_STORAGE_KEY, raw),
            None => MemoryPrefsStore::default(),
        };
        let store = ThemeStore::init(ThemeConfig::default(), Rc::new(prefs.clone()));
        (store, prefs)
    }

    #[test]
    fn parse_accepts_bare_and_quoted_tokens() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("\"dark\""), Some(Theme::Dark));
        assert_eq!(Theme::parse(" light\n"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn init_reads_persisted_theme_or_falls_back() {
        assert_eq!(store_with(Some("light")).0.theme(), Theme::Light);
        assert_eq!(store_with(Some("\"light\"")).0.theme(), Theme::Light);
        assert_eq!(store_with(Some("neon")).0.theme(), Theme::Dark);
        assert_eq!(store_with(None).0.theme(), Theme::Dark);

        let store = ThemeStore::init(
            ThemeConfig {
                storage_key: "custom".to_string(),
                default_theme: Theme::Light,
            },
            Rc::new(MemoryPrefsStore::default()),
        );
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn every_change_is_persisted_as_bare_token() {
        let (store, prefs) = store_with(None);
        assert_eq!(prefs.raw(THEME_STORAGE_KEY), None);

        store.set(Theme::Light);
        assert_eq!(prefs.raw(THEME_STORAGE_KEY), Some("light".to_string()));
        store.toggle();
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(prefs.raw(THEME_STORAGE_KEY), Some("dark".to_string()));
    }

    #[test]
    fn subscribers_see_changes_until_dropped() {
        let (store, _) = store_with(None);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let subscription = store.subscribe(move |theme| sink.borrow_mut().push(theme));
        store.set(Theme::Light);
        store.set(Theme::Light);
        store.toggle();
        drop(subscription);
        store.toggle();

        assert_eq!(*seen.borrow(), vec![Theme::Light, Theme::Dark]);
    }

    #[test]
    fn reset_forgets_the_stored_choice() {
        let (store, prefs) = store_with(Some("light"));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _subscription = store.subscribe(move |theme| sink.borrow_mut().push(theme));

        store.reset();
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(prefs.raw(THEME_STORAGE_KEY), None);

        store.reset();
        assert_eq!(*seen.borrow(), vec![Theme::Dark]);
    }

    #[test]
    fn unpersisted_provider_ignores_stored_choice() {
        let prefs = MemoryPrefsStore::with_entry(THEME_STORAGE_KEY, "light");
        let backend: Rc<dyn PrefsStore> = Rc::new(prefs.clone());

        let store = ThemeStore::init(ThemeConfig::default(), provider_prefs(false, Some(backend)));
        assert_eq!(store.theme(), Theme::Dark);
        store.set(Theme::Light);
        store.set(Theme::Dark);
        assert_eq!(prefs.raw(THEME_STORAGE_KEY), Some("light".to_string()));

        let backend: Rc<dyn PrefsStore> = Rc::new(prefs.clone());
        let store = ThemeStore::init(ThemeConfig::default(), provider_prefs(true, Some(backend)));
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn root_attribute_only_marks_light() {
        assert_eq!(Theme::Light.root_attribute(), Some("light"));
        assert_eq!(Theme::Dark.root_attribute(), None);
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn context_signal_follows_store() {
        let runtime = create_runtime();

        let (store, prefs) = store_with(Some("dark"));
        let (context, _subscription) = ThemeContext::new(store);
        assert!(context.is_dark());

        context.toggle();
        assert!(context.is_light());
        assert_eq!(context.signal().get_untracked(), Theme::Light);
        assert_eq!(prefs.raw(THEME_STORAGE_KEY), Some("light".to_string()));

        context.set(Theme::Dark);
        assert_eq!(context.theme(), Theme::Dark);

        runtime.dispose();
    }

    #[test]
    fn config_serializes_with_lowercase_theme() {
        let json = serde_json::to_string(&ThemeConfig::default()).expect("serialize");
        assert_eq!(
            json,
            r#"{"storage_key":"gends-theme","default_theme":"dark"}"#
        );
    }
}
