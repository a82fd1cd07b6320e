use std::{cell::Cell, rc::Rc};

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Card surface treatments.
pub enum CardVariant {
    /// Raised surface with a subtle border.
    Default,
    /// Border only.
    Outlined,
    /// Shadowed surface.
    Elevated,
    /// Transparent until hovered.
    Ghost,
}

impl Default for CardVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl CardVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outlined => "outlined",
            Self::Elevated => "elevated",
            Self::Ghost => "ghost",
        }
    }
}

#[component]
/// Content card. Interactive cards are focusable and report clicks.
pub fn Card(
    #[prop(default = CardVariant::Default)] variant: CardVariant,
    #[prop(default = Spacing::None)] padding: Spacing,
    #[prop(optional)] interactive: bool,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-card", layout_class)
            tabindex=interactive.then_some(0)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-variant=variant.token()
            data-ui-padding=padding.token()
            data-ui-interactive=bool_token(interactive)
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Card heading. Custom `children` replace the title/subtitle layout.
pub fn CardHeader(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] action: Option<ViewFn>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    if let Some(children) = children {
        return view! { <div data-ui-slot="card-header">{children()}</div> }.into_view();
    }

    view! {
        <div data-ui-slot="card-header">
            <div data-ui-slot="card-header-content">
                {title.map(|text| view! { <h3 data-ui-slot="title">{text}</h3> })}
                {subtitle.map(|text| view! { <p data-ui-slot="subtitle">{text}</p> })}
            </div>
            {action.map(|action| view! { <div data-ui-slot="card-header-action">{action.run()}</div> })}
        </div>
    }
    .into_view()
}

#[component]
/// Card content region.
pub fn CardBody(children: Children) -> impl IntoView {
    view! { <div data-ui-slot="card-body">{children()}</div> }
}

#[component]
/// Card action row.
pub fn CardFooter(
    #[prop(default = FooterAlign::Right)] align: FooterAlign,
    children: Children,
) -> impl IntoView {
    view! {
        <div data-ui-slot="card-footer" data-ui-align=align.token()>
            {children()}
        </div>
    }
}

#[component]
/// Full-bleed image at the top of a card.
pub fn CardImage(#[prop(into)] src: String, #[prop(optional, into)] alt: String) -> impl IntoView {
    view! { <img data-ui-slot="card-image" data-ui-position="top" src=src alt=alt /> }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where a panel sits relative to the page.
pub enum PanelPosition {
    /// In normal flow.
    Static,
    /// Floating against the left edge.
    Left,
    /// Floating against the right edge.
    Right,
}

impl Default for PanelPosition {
    fn default() -> Self {
        Self::Static
    }
}

impl PanelPosition {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[component]
/// Tool/property panel surface.
pub fn Panel(
    #[prop(default = PanelPosition::Static)] position: PanelPosition,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-position=position.token()
            data-ui-floating=bool_token(position != PanelPosition::Static)
        >
            {children()}
        </div>
    }
}

#[component]
/// Panel title row with optional trailing actions.
pub fn PanelHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] actions: Option<ViewFn>,
) -> impl IntoView {
    view! {
        <div data-ui-slot="panel-header">
            <h3 data-ui-slot="title">{title}</h3>
            {actions.map(|actions| view! { <div data-ui-slot="panel-actions">{actions.run()}</div> })}
        </div>
    }
}

#[component]
/// Scrollable panel content.
pub fn PanelBody(#[prop(optional)] no_padding: bool, children: Children) -> impl IntoView {
    view! {
        <div data-ui-slot="panel-body" data-ui-padding=if no_padding { "none" } else { "md" }>
            {children()}
        </div>
    }
}

#[component]
/// Panel footer row.
pub fn PanelFooter(children: Children) -> impl IntoView {
    view! { <div data-ui-slot="panel-footer">{children()}</div> }
}

#[component]
/// Titled group inside a panel body.
pub fn PanelSection(
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div data-ui-slot="panel-section">
            {title.map(|text| view! { <h4 data-ui-slot="section-title">{text}</h4> })}
            {children()}
        </div>
    }
}

#[component]
/// Section whose content folds behind its title button.
pub fn CollapsibleSection(
    #[prop(into)] title: String,
    #[prop(default = true)] default_open: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let open = create_rw_signal(default_open);

    view! {
        <div
            class=merge_layout_class("ui-collapsible", layout_class)
            data-ui-kind="collapsible-section"
            data-ui-state=move || if open.get() { "open" } else { "closed" }
        >
            <button
                type="button"
                data-ui-slot="collapsible-header"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|open| *open = !*open)
            >
                {title}
                <span data-ui-slot="collapsible-icon"><Icon icon=IconName::ChevronDown size=IconSize::Sm /></span>
            </button>
            <Show when=move || open.get()>
                <div data-ui-slot="collapsible-content">{children()}</div>
            </Show>
        </div>
    }
}

#[component]
/// Horizontal or vertical rule. A label is only drawn on horizontal dividers.
pub fn Divider(
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(default = Spacing::Md)] spacing: Spacing,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let class = merge_layout_class("ui-divider", layout_class);
    match label.filter(|_| orientation == Orientation::Horizontal) {
        Some(label) => view! {
            <div
                class=class
                role="separator"
                data-ui-primitive="true"
                data-ui-kind="divider"
                data-ui-orientation=orientation.token()
                data-ui-spacing=spacing.token()
            >
                <div data-ui-slot="line"></div>
                <span data-ui-slot="label">{label}</span>
                <div data-ui-slot="line"></div>
            </div>
        }
        .into_view(),
        None => view! {
            <hr
                class=class
                role="separator"
                aria-orientation=orientation.token()
                data-ui-primitive="true"
                data-ui-kind="divider"
                data-ui-orientation=orientation.token()
                data-ui-spacing=spacing.token()
            />
        }
        .into_view(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Modal widths.
pub enum ModalSize {
    /// Narrow dialog.
    Sm,
    /// Default dialog.
    Md,
    /// Wide dialog.
    Lg,
    /// Extra wide dialog.
    Xl,
    /// Covers the viewport.
    Fullscreen,
}

impl Default for ModalSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ModalSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Fullscreen => "fullscreen",
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn set_body_overflow(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(err) = body.style().set_property("overflow", value) {
        logging::warn!("body scroll lock failed: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_body_overflow(_locked: bool) {}

thread_local! {
    static SCROLL_LOCK_HOLDERS: Cell<usize> = const { Cell::new(0) };
}

/// Number of open dialogs currently holding the body scroll lock.
pub(crate) fn scroll_lock_holders() -> usize {
    SCROLL_LOCK_HOLDERS.with(Cell::get)
}

/// One dialog's share of the body scroll lock. The body unlocks when the last holder lets go.
pub(crate) struct BodyScrollLock {
    held: Cell<bool>,
}

impl BodyScrollLock {
    pub(crate) fn new() -> Self {
        Self {
            held: Cell::new(false),
        }
    }

    /// Takes or releases this holder's share. Repeated calls with the same flag do nothing.
    pub(crate) fn sync(&self, locked: bool) {
        if self.held.replace(locked) == locked {
            return;
        }
        let holders = SCROLL_LOCK_HOLDERS.with(|holders| {
            let next = if locked {
                holders.get() + 1
            } else {
                holders.get().saturating_sub(1)
            };
            holders.set(next);
            next
        });
        match (locked, holders) {
            (true, 1) => set_body_overflow(true),
            (false, 0) => set_body_overflow(false),
            _ => {}
        }
    }
}

impl Drop for BodyScrollLock {
    fn drop(&mut self) {
        self.sync(false);
    }
}

/// Holds the body scroll lock while `open` is true and releases it on cleanup.
pub(crate) fn use_body_scroll_lock(open: Signal<bool>) {
    let lock = Rc::new(BodyScrollLock::new());
    let tracked = Rc::clone(&lock);
    create_effect(move |_| tracked.sync(open.get()));
    on_cleanup(move || lock.sync(false));
}

#[component]
/// Modal dialog over a dimmed backdrop. The page behind stops scrolling while it is open.
///
/// Escape and pointer-down on the backdrop call `on_close` unless disabled through
/// `close_on_escape` / `close_on_overlay_click`.
pub fn Modal(
    #[prop(into)] open: MaybeSignal<bool>,
    on_close: Callback<()>,
    #[prop(default = ModalSize::Md)] size: ModalSize,
    #[prop(default = "modal")] id: &'static str,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(default = true)] show_close_button: bool,
    #[prop(default = true)] close_on_overlay_click: bool,
    #[prop(default = true)] close_on_escape: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let dialog_ref = create_node_ref::<html::Div>();
    let open = Signal::derive(move || open.get());
    let title_id = format!("{id}-title");
    let description_id = format!("{id}-description");

    use_dismissible(
        open,
        dialog_ref,
        DismissOptions {
            escape: close_on_escape,
            outside_pointer: close_on_overlay_click,
        },
        Callback::new(move |_: DismissReason| on_close.call(())),
    );

    use_body_scroll_lock(open);

    let title = store_value(title);
    let description = store_value(description);
    let children = store_value(children);
    let has_header = title.with_value(Option::is_some) || show_close_button;

    view! {
        <Show when=move || open.get()>
            <div class="ui-modal-overlay" data-ui-kind="modal-overlay">
                <div
                    node_ref=dialog_ref
                    class=merge_layout_class("ui-modal", layout_class)
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=title.with_value(Option::is_some).then(|| title_id.clone())
                    aria-describedby=description.with_value(Option::is_some).then(|| description_id.clone())
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                    data-ui-size=size.token()
                >
                    {has_header.then(|| view! {
                        <div data-ui-slot="modal-header">
                            <div data-ui-slot="modal-header-content">
                                {title.get_value().map(|text| view! {
                                    <h2 id=title_id.clone() data-ui-slot="title">{text}</h2>
                                })}
                                {description.get_value().map(|text| view! {
                                    <p id=description_id.clone() data-ui-slot="description">{text}</p>
                                })}
                            </div>
                            {show_close_button.then(|| view! {
                                <IconButton
                                    icon=IconName::Close
                                    aria_label="Close modal"
                                    variant=IconButtonVariant::Ghost
                                    size=IconButtonSize::Sm
                                    ui_slot="close"
                                    on_click=Callback::new(move |_| on_close.call(()))
                                />
                            })}
                        </div>
                    })}
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}

#[component]
/// Modal content region.
pub fn ModalBody(#[prop(optional)] no_padding: bool, children: Children) -> impl IntoView {
    view! {
        <div data-ui-slot="modal-body" data-ui-padding=if no_padding { "none" } else { "md" }>
            {children()}
        </div>
    }
}

#[component]
/// Modal action row.
pub fn ModalFooter(
    #[prop(default = FooterAlign::Right)] align: FooterAlign,
    children: Children,
) -> impl IntoView {
    view! {
        <div data-ui-slot="modal-footer" data-ui-align=align.token()>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn container_defaults() {
        assert_eq!(CardVariant::default().token(), "default");
        assert_eq!(ModalSize::default().token(), "md");
        assert_eq!(ModalSize::Fullscreen.token(), "fullscreen");
        assert_eq!(PanelPosition::default().token(), "static");
    }

    #[test]
    fn nested_dialogs_share_the_scroll_lock() {
        let modal = BodyScrollLock::new();
        let alert = BodyScrollLock::new();
        let never_opened = BodyScrollLock::new();

        modal.sync(true);
        alert.sync(true);
        alert.sync(true);
        assert_eq!(scroll_lock_holders(), 2);

        alert.sync(false);
        assert_eq!(scroll_lock_holders(), 1);
        never_opened.sync(false);
        drop(never_opened);
        assert_eq!(scroll_lock_holders(), 1);

        drop(modal);
        assert_eq!(scroll_lock_holders(), 0);
        drop(alert);
        assert_eq!(scroll_lock_holders(), 0);
    }

    #[test]
    fn scroll_lock_follows_open_signal() {
        let runtime = create_runtime();
        let open = create_rw_signal(false);
        use_body_scroll_lock(open.into());
        assert_eq!(scroll_lock_holders(), 0);

        open.set(true);
        assert_eq!(scroll_lock_holders(), 1);
        open.set(false);
        assert_eq!(scroll_lock_holders(), 0);
        runtime.dispose();
    }
}
