//! Dismissible overlay state and window listeners scoped to the open state.
//!
//! Dropdowns, popovers, selects, the color picker, and dialogs all close on Escape or on a
//! pointer-down outside their container. The listeners for that live only while the overlay is
//! open: [`ScopedListeners`] attaches them when the overlay enters [`OverlayState::Open`] and
//! drops the guard (detaching them) when it leaves, or when the owning component is torn down.

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::controlled::Controllable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Open/closed state of a dismissible overlay.
pub enum OverlayState {
    /// Hidden; no window listeners attached.
    Closed,
    /// Visible; Escape and outside pointer-down listeners attached.
    Open,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::Closed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs that drive an overlay between states.
pub enum OverlayEvent {
    /// The trigger was activated (click, Enter, Space).
    Trigger,
    /// Escape was pressed anywhere in the window.
    Escape,
    /// A pointer went down outside the overlay container.
    PointerDownOutside,
    /// A pointer went down inside the overlay container.
    PointerDownInside,
    /// Explicit close (item selected, close button, caller request).
    Close,
    /// Explicit open (caller request, ArrowDown on a select trigger).
    Open,
}

impl OverlayState {
    /// Builds the state for a boolean `open` flag.
    pub fn from_open(open: bool) -> Self {
        if open {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// Whether the overlay is visible.
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Returns the state after `event`.
    pub fn apply(self, event: OverlayEvent) -> Self {
        match (self, event) {
            (_, OverlayEvent::Open) | (Self::Closed, OverlayEvent::Trigger) => Self::Open,
            (_, OverlayEvent::Close)
            | (Self::Open, OverlayEvent::Trigger)
            | (Self::Open, OverlayEvent::Escape)
            | (Self::Open, OverlayEvent::PointerDownOutside) => Self::Closed,
            (state, OverlayEvent::PointerDownInside)
            | (state @ Self::Closed, OverlayEvent::Escape)
            | (state @ Self::Closed, OverlayEvent::PointerDownOutside) => state,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why an overlay asked to be dismissed.
pub enum DismissReason {
    /// Escape key.
    Escape,
    /// Pointer-down outside the container.
    OutsidePointer,
}

impl DismissReason {
    /// The state-machine event this dismissal corresponds to.
    pub fn event(self) -> OverlayEvent {
        match self {
            Self::Escape => OverlayEvent::Escape,
            Self::OutsidePointer => OverlayEvent::PointerDownOutside,
        }
    }
}

/// Applies `event` to a controllable open flag. Only real transitions reach `set`, so
/// `on_open_change` never fires for no-op events.
pub fn apply_overlay_event(open: Controllable<bool>, event: OverlayEvent) {
    let current = OverlayState::from_open(open.get_untracked());
    let next = current.apply(event);
    if next != current {
        open.set(next.is_open());
    }
}

/// Something that can attach a set of listeners and hand back a guard that detaches them on drop.
pub trait ListenerScope {
    /// Detaches the listeners when dropped.
    type Guard;

    /// Attaches the listeners.
    fn attach(&self) -> Self::Guard;
}

/// Keeps a [`ListenerScope`] attached exactly while it is armed.
///
/// [`ScopedListeners::sync`] is idempotent: syncing `true` twice attaches once, syncing `false`
/// drops the guard. Dropping the whole value releases whatever is attached.
pub struct ScopedListeners<S: ListenerScope> {
    scope: S,
    guard: Option<S::Guard>,
}

impl<S: ListenerScope> ScopedListeners<S> {
    /// Wraps a scope; nothing is attached yet.
    pub fn new(scope: S) -> Self {
        Self { scope, guard: None }
    }

    /// Attaches when `armed` and nothing is attached; detaches when not `armed`.
    pub fn sync(&mut self, armed: bool) {
        match (armed, self.guard.is_some()) {
            (true, false) => self.guard = Some(self.scope.attach()),
            (false, true) => self.guard = None,
            _ => {}
        }
    }

    /// Detaches unconditionally.
    pub fn release(&mut self) {
        self.guard = None;
    }

    /// Whether listeners are currently attached.
    pub fn is_armed(&self) -> bool {
        self.guard.is_some()
    }
}

/// Window listener handles removed together on drop.
pub struct WindowListenerGuard {
    handles: Vec<WindowListenerHandle>,
}

impl WindowListenerGuard {
    pub(crate) fn new(handles: Vec<WindowListenerHandle>) -> Self {
        Self { handles }
    }
}

impl Drop for WindowListenerGuard {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which dismissal paths an overlay listens for.
pub struct DismissOptions {
    /// Close on Escape.
    pub escape: bool,
    /// Close on pointer-down outside the container.
    pub outside_pointer: bool,
}

impl Default for DismissOptions {
    fn default() -> Self {
        Self {
            escape: true,
            outside_pointer: true,
        }
    }
}

struct WindowDismissScope {
    container: NodeRef<html::Div>,
    options: DismissOptions,
    on_dismiss: Callback<DismissReason>,
}

impl ListenerScope for WindowDismissScope {
    type Guard = WindowListenerGuard;

    fn attach(&self) -> WindowListenerGuard {
        let mut handles = Vec::with_capacity(2);
        let on_dismiss = self.on_dismiss;

        if self.options.escape {
            handles.push(window_event_listener(ev::keydown, move |ev| {
                if ev.default_prevented() || ev.key() != "Escape" {
                    return;
                }
                on_dismiss.call(DismissReason::Escape);
            }));
        }

        if self.options.outside_pointer {
            let container = self.container;
            handles.push(window_event_listener(ev::pointerdown, move |ev| {
                if !event_within(container, &ev) {
                    on_dismiss.call(DismissReason::OutsidePointer);
                }
            }));
        }

        WindowListenerGuard::new(handles)
    }
}

/// Whether an event's target sits inside `container`'s subtree.
pub(crate) fn event_within(container: NodeRef<html::Div>, ev: &web_sys::Event) -> bool {
    let Some(root) = container.get_untracked() else {
        return false;
    };
    let Some(target) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
    else {
        return false;
    };
    root.contains(Some(&target))
}

/// Wires Escape and outside pointer-down dismissal to `open` for the current component.
///
/// Listeners are attached while `open` is true and removed as soon as it turns false or the
/// component is cleaned up. `on_dismiss` receives the reason; the caller decides what closing
/// means (usually `Controllable::set(false)`).
pub fn use_dismissible(
    open: Signal<bool>,
    container: NodeRef<html::Div>,
    options: DismissOptions,
    on_dismiss: Callback<DismissReason>,
) {
    let listeners = store_value(ScopedListeners::new(WindowDismissScope {
        container,
        options,
        on_dismiss,
    }));

    create_effect(move |_| {
        let armed = open.get();
        listeners.update_value(|listeners| listeners.sync(armed));
    });

    on_cleanup(move || listeners.update_value(ScopedListeners::release));
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct CountingScope {
        live: Rc<Cell<i32>>,
        attaches: Rc<Cell<u32>>,
    }

    struct CountingGuard(Rc<Cell<i32>>);

    impl Drop for CountingGuard {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    impl ListenerScope for CountingScope {
        type Guard = CountingGuard;

        fn attach(&self) -> CountingGuard {
            self.live.set(self.live.get() + 1);
            self.attaches.set(self.attaches.get() + 1);
            CountingGuard(self.live.clone())
        }
    }

    #[test]
    fn trigger_toggles_and_dismissals_close() {
        let state = OverlayState::default();
        assert_eq!(state, OverlayState::Closed);

        let open = state.apply(OverlayEvent::Trigger);
        assert_eq!(open, OverlayState::Open);
        assert_eq!(open.apply(OverlayEvent::Escape), OverlayState::Closed);
        assert_eq!(
            open.apply(OverlayEvent::PointerDownOutside),
            OverlayState::Closed
        );
        assert_eq!(open.apply(OverlayEvent::PointerDownInside), OverlayState::Open);
        assert_eq!(open.apply(OverlayEvent::Close), OverlayState::Closed);
        assert_eq!(open.apply(OverlayEvent::Trigger), OverlayState::Closed);
    }

    #[test]
    fn closed_overlay_ignores_dismissals() {
        let closed = OverlayState::Closed;
        for event in [
            OverlayEvent::Escape,
            OverlayEvent::PointerDownOutside,
            OverlayEvent::PointerDownInside,
            OverlayEvent::Close,
        ] {
            assert_eq!(closed.apply(event), OverlayState::Closed, "{event:?}");
        }
        assert_eq!(closed.apply(OverlayEvent::Open), OverlayState::Open);
        assert_eq!(
            OverlayState::Open.apply(OverlayEvent::Open),
            OverlayState::Open
        );
    }

    #[test]
    fn dismiss_reasons_map_to_closing_events() {
        for reason in [DismissReason::Escape, DismissReason::OutsidePointer] {
            assert_eq!(
                OverlayState::Open.apply(reason.event()),
                OverlayState::Closed
            );
        }
        assert!(OverlayState::from_open(true).is_open());
        assert!(!OverlayState::from_open(false).is_open());
    }

    #[test]
    fn listeners_attach_only_while_armed_and_rearm_idempotently() {
        let scope = CountingScope::default();
        let live = scope.live.clone();
        let attaches = scope.attaches.clone();
        let mut listeners = ScopedListeners::new(scope);

        listeners.sync(false);
        assert_eq!(live.get(), 0);

        listeners.sync(true);
        listeners.sync(true);
        assert!(listeners.is_armed());
        assert_eq!(live.get(), 1);
        assert_eq!(attaches.get(), 1);

        listeners.sync(false);
        assert!(!listeners.is_armed());
        assert_eq!(live.get(), 0);

        for _ in 0..3 {
            listeners.sync(true);
            listeners.sync(false);
        }
        assert_eq!(live.get(), 0);
        assert_eq!(attaches.get(), 4);
    }

    #[test]
    fn teardown_releases_attached_listeners() {
        let scope = CountingScope::default();
        let live = scope.live.clone();

        let mut listeners = ScopedListeners::new(scope);
        listeners.sync(true);
        listeners.release();
        assert_eq!(live.get(), 0);

        listeners.sync(true);
        drop(listeners);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn overlay_events_drive_uncontrolled_flag() {
        let runtime = create_runtime();
        let changes = create_rw_signal(Vec::<bool>::new());
        let open = Controllable::new(
            None,
            false,
            Some(Callback::new(move |next| changes.update(|changes| changes.push(next)))),
        );

        apply_overlay_event(open, OverlayEvent::Trigger);
        assert!(open.get_untracked());
        apply_overlay_event(open, OverlayEvent::PointerDownInside);
        assert!(open.get_untracked());
        apply_overlay_event(open, OverlayEvent::PointerDownOutside);
        assert!(!open.get_untracked());
        apply_overlay_event(open, OverlayEvent::Escape);

        assert_eq!(changes.get_untracked(), vec![true, false]);
        runtime.dispose();
    }

    #[test]
    fn controlled_flag_only_reports_requests() {
        let runtime = create_runtime();
        let requested = create_rw_signal(None::<bool>);
        let open = Controllable::new(
            Some(MaybeSignal::Static(true)),
            false,
            Some(Callback::new(move |next| requested.set(Some(next)))),
        );

        apply_overlay_event(open, OverlayEvent::Escape);
        assert!(open.get_untracked());
        assert_eq!(requested.get_untracked(), Some(false));
        runtime.dispose();
    }
}
