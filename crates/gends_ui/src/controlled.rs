//! Controlled/uncontrolled value ownership shared by stateful primitives.
//!
//! A primitive is *controlled* when the caller passes `value` (or `open`, `checked`, ...) and
//! *uncontrolled* when it only passes a default. [`Controllable`] hides the difference: reads
//! return the caller's value when present, and writes always notify the caller while only
//! touching internal state in uncontrolled mode.

use leptos::*;

/// Picks the value a primitive renders: the caller-owned value when present, otherwise its own.
pub fn resolve<T>(external: Option<T>, internal: T) -> T {
    external.unwrap_or(internal)
}

/// Reactive value owned either by the caller or by the primitive itself.
pub struct Controllable<T: 'static> {
    external: Option<Signal<T>>,
    internal: RwSignal<T>,
    on_change: Option<Callback<T>>,
}

impl<T: 'static> Clone for Controllable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Controllable<T> {}

impl<T: Clone + 'static> Controllable<T> {
    /// Creates a controllable value. `external` wins over `default_value` whenever it is set.
    pub fn new(
        external: Option<MaybeSignal<T>>,
        default_value: T,
        on_change: Option<Callback<T>>,
    ) -> Self {
        Self {
            external: external.map(|value| Signal::derive(move || value.get())),
            internal: create_rw_signal(default_value),
            on_change,
        }
    }

    /// Whether the caller owns the value.
    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    /// Current effective value, tracked.
    pub fn get(&self) -> T {
        resolve(self.external.map(|value| value.get()), self.internal.get())
    }

    /// Current effective value, untracked. Use inside event handlers.
    pub fn get_untracked(&self) -> T {
        resolve(
            self.external.map(|value| value.get_untracked()),
            self.internal.get_untracked(),
        )
    }

    /// Applies a user-driven change: notifies the caller and, when uncontrolled, stores it.
    pub fn set(&self, value: T) {
        if self.external.is_none() {
            self.internal.set(value.clone());
        }
        if let Some(on_change) = self.on_change.as_ref() {
            on_change.call(value);
        }
    }

    /// Applies `next` like [`Controllable::set`] and returns the value to show instead when the
    /// caller kept a different one. `None` means the view already matches `next`.
    pub fn set_reconciled(&self, next: T) -> Option<T>
    where
        T: PartialEq,
    {
        self.set(next.clone());
        let shown = self.get_untracked();
        (shown != next).then_some(shown)
    }

    /// Effective value as a derived signal.
    pub fn signal(&self) -> Signal<T> {
        let this = *self;
        Signal::derive(move || this.get())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resolve_prefers_external_value() {
        assert_eq!(resolve(Some(3), 7), 3);
        assert_eq!(resolve(None, 7), 7);
    }

    #[test]
    fn uncontrolled_value_tracks_its_own_changes() {
        let runtime = create_runtime();

        let seen = create_rw_signal(Vec::<bool>::new());
        let checked = Controllable::new(
            None,
            false,
            Some(Callback::new(move |next| seen.update(|calls| calls.push(next)))),
        );

        assert!(!checked.is_controlled());
        assert!(!checked.get_untracked());
        checked.set(true);
        assert!(checked.get_untracked());
        assert_eq!(seen.get_untracked(), vec![true]);

        runtime.dispose();
    }

    #[test]
    fn controlled_value_ignores_internal_changes_but_notifies() {
        let runtime = create_runtime();

        let owner = create_rw_signal("b".to_string());
        let seen = create_rw_signal(Vec::<String>::new());
        let selected = Controllable::new(
            Some(MaybeSignal::from(Signal::from(owner))),
            "a".to_string(),
            Some(Callback::new(move |next| seen.update(|calls| calls.push(next)))),
        );

        assert!(selected.is_controlled());
        assert_eq!(selected.get_untracked(), "b");
        selected.set("c".to_string());
        assert_eq!(selected.get_untracked(), "b");
        assert_eq!(seen.get_untracked(), vec!["c".to_string()]);

        owner.set("c".to_string());
        assert_eq!(selected.get_untracked(), "c");
        assert_eq!(selected.signal().get_untracked(), "c");

        runtime.dispose();
    }

    #[test]
    fn rejected_edit_reports_the_owned_value() {
        let runtime = create_runtime();

        let owner = create_rw_signal("draft".to_string());
        let text = Controllable::new(
            Some(MaybeSignal::from(Signal::from(owner))),
            String::new(),
            Some(Callback::new(|_: String| {})),
        );
        assert_eq!(text.set_reconciled("drafts".to_string()), Some("draft".to_string()));

        let accepting = Controllable::new(
            Some(MaybeSignal::from(Signal::from(owner))),
            String::new(),
            Some(Callback::new(move |next| owner.set(next))),
        );
        assert_eq!(accepting.set_reconciled("drafts".to_string()), None);
        assert_eq!(owner.get_untracked(), "drafts");

        let own = Controllable::new(None, String::new(), None);
        assert_eq!(own.set_reconciled("x".to_string()), None);

        runtime.dispose();
    }

    #[test]
    fn uncontrolled_without_callback_still_updates() {
        let runtime = create_runtime();

        let value = Controllable::new(None, 50.0_f64, None);
        value.set(60.0);
        assert_eq!(value.get_untracked(), 60.0);

        runtime.dispose();
    }
}
