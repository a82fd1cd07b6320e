use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;

use super::*;

/// Auto-dismiss delay applied when a toast does not set one.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;
/// Exit animation length between a close request and `on_close`.
pub const TOAST_EXIT_MS: u32 = 200;

#[derive(Clone)]
/// Inline action button rendered inside a toast.
pub struct ToastAction {
    /// Button text.
    pub label: String,
    /// Click handler.
    pub on_click: Callback<()>,
}

#[derive(Clone)]
/// One notification. `id` is assigned by [`ToastQueue::push`].
pub struct ToastData {
    /// Queue-assigned identifier.
    pub id: u64,
    /// Bold first line.
    pub title: Option<String>,
    /// Body text.
    pub message: Option<String>,
    /// Semantic tone and leading icon.
    pub variant: Tone,
    /// Auto-dismiss delay; `0` keeps the toast until closed.
    pub duration_ms: u32,
    /// Whether a close button is shown.
    pub closable: bool,
    /// Optional action button.
    pub action: Option<ToastAction>,
}

impl ToastData {
    /// Toast with the given tone and default timing.
    pub fn new(variant: Tone) -> Self {
        Self {
            id: 0,
            title: None,
            message: None,
            variant,
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            closable: true,
            action: None,
        }
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the auto-dismiss delay.
    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Keeps the toast until it is closed explicitly.
    pub fn sticky(self) -> Self {
        self.duration_ms(0)
    }

    /// Hides the close button.
    pub fn not_closable(mut self) -> Self {
        self.closable = false;
        self
    }

    /// Adds an action button.
    pub fn action(mut self, label: impl Into<String>, on_click: Callback<()>) -> Self {
        self.action = Some(ToastAction {
            label: label.into(),
            on_click,
        });
        self
    }
}

impl Default for ToastData {
    fn default() -> Self {
        Self::new(Tone::Default)
    }
}

#[derive(Clone, Default)]
/// Ordered list of live toasts with monotonic ids.
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<ToastData>,
}

impl ToastQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast and returns its assigned id.
    pub fn push(&mut self, mut toast: ToastData) -> u64 {
        self.next_id += 1;
        toast.id = self.next_id;
        self.toasts.push(toast);
        self.next_id
    }

    /// Removes the toast with `id`. Returns `false` when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Removes every toast. Ids keep increasing afterwards.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Live toasts in insertion order.
    pub fn toasts(&self) -> &[ToastData] {
        &self.toasts
    }

    /// Number of live toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether no toast is live.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Lifecycle phase of a rendered toast.
pub enum ToastPhase {
    /// On screen.
    Visible,
    /// Playing the exit animation before `on_close`.
    Exiting,
}

impl ToastPhase {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Exiting => "exiting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Viewport corner or edge the toast stack is pinned to.
pub enum ToastPosition {
    /// Top-left corner.
    TopLeft,
    /// Top edge, centered.
    TopCenter,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom edge, centered.
    BottomCenter,
    /// Bottom-right corner.
    BottomRight,
}

impl Default for ToastPosition {
    fn default() -> Self {
        Self::TopRight
    }
}

impl ToastPosition {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }
}

fn schedule(
    timers: StoredValue<Vec<TimeoutHandle>>,
    delay_ms: u32,
    callback: impl FnOnce() + 'static,
) {
    match set_timeout_with_handle(callback, Duration::from_millis(u64::from(delay_ms))) {
        Ok(handle) => timers.update_value(|timers| timers.push(handle)),
        Err(err) => logging::warn!("toast timer failed: {err:?}"),
    }
}

#[component]
/// Single notification. Closing plays a short exit phase, then reports the id to `on_close`.
pub fn Toast(
    toast: ToastData,
    #[prop(optional)] on_close: Option<Callback<u64>>,
) -> impl IntoView {
    let ToastData {
        id,
        title,
        message,
        variant,
        duration_ms,
        closable,
        action,
    } = toast;
    let phase = create_rw_signal(ToastPhase::Visible);
    let timers = store_value(Vec::<TimeoutHandle>::new());

    let close = move || {
        if phase.get_untracked() == ToastPhase::Exiting {
            return;
        }
        phase.set(ToastPhase::Exiting);
        schedule(timers, TOAST_EXIT_MS, move || {
            if let Some(on_close) = on_close.as_ref() {
                on_close.call(id);
            }
        });
    };

    if duration_ms > 0 {
        schedule(timers, duration_ms, close);
    }

    on_cleanup(move || {
        timers.update_value(|timers| {
            for handle in timers.drain(..) {
                handle.clear();
            }
        });
    });

    view! {
        <div
            class="ui-toast"
            role="alert"
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-variant=variant.token()
            data-ui-state=move || phase.get().token()
        >
            {variant.icon().map(|icon| view! {
                <span data-ui-slot="icon"><Icon icon size=IconSize::Md /></span>
            })}
            <div data-ui-slot="content">
                {title.map(|text| view! { <p data-ui-slot="title">{text}</p> })}
                {message.map(|text| view! { <p data-ui-slot="message">{text}</p> })}
                {action.map(|ToastAction { label, on_click }| view! {
                    <div data-ui-slot="action">
                        <button type="button" on:click=move |_| on_click.call(())>
                            {label}
                        </button>
                    </div>
                })}
            </div>
            {closable.then(|| view! {
                <button type="button" data-ui-slot="close" aria-label="Close" on:click=move |_| close()>
                    <Icon icon=IconName::Close size=IconSize::Sm />
                </button>
            })}
        </div>
    }
}

#[component]
/// Fixed-position stack of toasts. Renders nothing while the list is empty.
pub fn ToastContainer(
    #[prop(into)] toasts: Signal<Vec<ToastData>>,
    #[prop(default = ToastPosition::TopRight)] position: ToastPosition,
    #[prop(optional)] on_close: Option<Callback<u64>>,
) -> impl IntoView {
    view! {
        <Show when=move || toasts.with(|toasts| !toasts.is_empty())>
            <div
                class="ui-toast-container"
                aria-live="polite"
                data-ui-primitive="true"
                data-ui-kind="toast-container"
                data-ui-placement=position.token()
            >
                <For
                    each=move || toasts.get()
                    key=|toast| toast.id
                    children=move |toast| match on_close {
                        Some(on_close) => view! { <Toast toast on_close /> }.into_view(),
                        None => view! { <Toast toast /> }.into_view(),
                    }
                />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn queue_assigns_monotonic_ids() {
        let mut queue = ToastQueue::new();
        let first = queue.push(ToastData::new(Tone::Success).title("Saved"));
        let second = queue.push(ToastData::new(Tone::Error).message("Upload failed"));
        assert_eq!((first, second), (1, 2));

        assert!(queue.dismiss(first));
        let third = queue.push(ToastData::default());
        assert_eq!(third, 3);

        queue.clear();
        assert_eq!(queue.push(ToastData::default()), 4);
    }

    #[test]
    fn dismiss_keeps_order_of_remaining_toasts() {
        let mut queue = ToastQueue::new();
        let ids: Vec<u64> = (0..3).map(|_| queue.push(ToastData::default())).collect();
        assert!(queue.dismiss(ids[1]));
        assert!(!queue.dismiss(ids[1]));

        let remaining: Vec<u64> = queue.toasts().iter().map(|toast| toast.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2]]);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn toast_defaults() {
        let toast = ToastData::new(Tone::Info);
        assert_eq!(toast.duration_ms, DEFAULT_TOAST_DURATION_MS);
        assert!(toast.closable);
        assert_eq!(toast.sticky().duration_ms, 0);
        assert_eq!(ToastPosition::default().token(), "top-right");
    }
}
