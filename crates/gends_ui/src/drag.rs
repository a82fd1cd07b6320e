//! Pointer drags for value surfaces (slider track, color picker box and hue strip).
//!
//! A drag starts on a pointer-down over the surface. From then until pointer-up the window's
//! pointermove/pointerup listeners are attached through the same [`ScopedListeners`] guard the
//! overlays use, so a drag that ends (or a component that unmounts mid-drag) never leaks them.

use leptos::*;

use crate::overlay::{ListenerScope, ScopedListeners, WindowListenerGuard};

#[derive(Debug, Clone, Copy, PartialEq)]
/// Pointer position in client coordinates.
pub struct PointerPosition {
    /// Horizontal client coordinate.
    pub x: f64,
    /// Vertical client coordinate.
    pub y: f64,
}

impl PointerPosition {
    /// Reads the client position of a pointer or mouse event.
    pub fn of(ev: &web_sys::MouseEvent) -> Self {
        Self {
            x: f64::from(ev.client_x()),
            y: f64::from(ev.client_y()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Axis-aligned box of a drag surface in client coordinates.
pub struct SurfaceRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl SurfaceRect {
    /// Measures an element's bounding box.
    pub fn of(element: &web_sys::Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    /// Horizontal and vertical position of `point` as fractions in `0.0..=1.0`.
    pub fn ratios(&self, point: PointerPosition) -> (f64, f64) {
        (
            axis_ratio(point.x, self.left, self.width),
            axis_ratio(point.y, self.top, self.height),
        )
    }
}

/// Fraction of `extent` that `position` lies past `start`, clamped to `0.0..=1.0`.
///
/// Degenerate surfaces (zero or negative extent) report `0.0`.
pub fn axis_ratio(position: f64, start: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !extent.is_finite() {
        return 0.0;
    }
    ((position - start) / extent).clamp(0.0, 1.0)
}

struct WindowDragScope {
    dragging: RwSignal<bool>,
    on_move: Callback<PointerPosition>,
    on_end: Callback<PointerPosition>,
}

impl ListenerScope for WindowDragScope {
    type Guard = WindowListenerGuard;

    fn attach(&self) -> WindowListenerGuard {
        let dragging = self.dragging;
        let on_move = self.on_move;
        let on_end = self.on_end;

        let moving = window_event_listener(ev::pointermove, move |ev| {
            on_move.call(PointerPosition::of(&ev));
        });
        let ending = window_event_listener(ev::pointerup, move |ev| {
            on_end.call(PointerPosition::of(&ev));
            dragging.set(false);
        });

        WindowListenerGuard::new(vec![moving, ending])
    }
}

/// Tracks a pointer drag for the current component.
///
/// Set the returned signal to `true` from the surface's pointer-down handler. Window-level move
/// and up listeners then report positions to `on_move` and the final position to `on_end`, after
/// which the signal resets and the listeners detach.
pub fn use_pointer_drag(
    on_move: Callback<PointerPosition>,
    on_end: Callback<PointerPosition>,
) -> RwSignal<bool> {
    let dragging = create_rw_signal(false);
    let listeners = store_value(ScopedListeners::new(WindowDragScope {
        dragging,
        on_move,
        on_end,
    }));

    create_effect(move |_| {
        let armed = dragging.get();
        listeners.update_value(|listeners| listeners.sync(armed));
    });

    on_cleanup(move || listeners.update_value(ScopedListeners::release));

    dragging
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn axis_ratio_clamps_to_the_surface() {
        assert_eq!(axis_ratio(150.0, 100.0, 200.0), 0.25);
        assert_eq!(axis_ratio(50.0, 100.0, 200.0), 0.0);
        assert_eq!(axis_ratio(400.0, 100.0, 200.0), 1.0);
        assert_eq!(axis_ratio(120.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn surface_ratios_cover_both_axes() {
        let rect = SurfaceRect {
            left: 10.0,
            top: 20.0,
            width: 100.0,
            height: 50.0,
        };
        assert_eq!(
            rect.ratios(PointerPosition { x: 60.0, y: 45.0 }),
            (0.5, 0.5)
        );
        assert_eq!(
            rect.ratios(PointerPosition { x: -5.0, y: 90.0 }),
            (0.0, 1.0)
        );
    }
}
