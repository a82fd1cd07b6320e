use super::containers::use_body_scroll_lock;
use super::*;
use crate::overlay::{apply_overlay_event, OverlayEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Severity of a confirmation dialog.
pub enum AlertVariant {
    /// Destructive confirmation; the confirm button uses [`ButtonVariant::Danger`].
    Danger,
    /// Risky but recoverable.
    Warning,
    /// Informational confirmation.
    Info,
}

impl Default for AlertVariant {
    fn default() -> Self {
        Self::Danger
    }
}

impl AlertVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Button variant used for the confirm action.
    pub fn confirm_variant(self) -> ButtonVariant {
        match self {
            Self::Danger => ButtonVariant::Danger,
            Self::Warning | Self::Info => ButtonVariant::Primary,
        }
    }
}

#[component]
/// Confirmation dialog with cancel/confirm actions.
///
/// While `loading` is set the confirm button spins, cancel is disabled, and neither Escape nor a
/// backdrop pointer-down closes the dialog.
pub fn AlertDialog(
    #[prop(into)] open: MaybeSignal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(default = AlertVariant::Danger)] variant: AlertVariant,
    #[prop(default = true)] show_icon: bool,
    #[prop(default = "Confirm".into(), into)] confirm_label: String,
    #[prop(default = "Cancel".into(), into)] cancel_label: String,
    #[prop(optional)] on_confirm: Option<Callback<()>>,
    #[prop(optional)] stack_buttons: bool,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(default = "alert")] id: &'static str,
) -> impl IntoView {
    let dialog_ref = create_node_ref::<html::Div>();
    let open = Signal::derive(move || open.get());

    use_dismissible(
        open,
        dialog_ref,
        DismissOptions::default(),
        Callback::new(move |_: DismissReason| {
            if !loading.get_untracked() {
                on_close.call(());
            }
        }),
    );

    use_body_scroll_lock(open);

    let title_id = format!("{id}-title");
    let description_id = format!("{id}-description");
    let has_description = description.is_some();
    let title = store_value(title);
    let description = store_value(description);
    let labels = store_value((cancel_label, confirm_label));

    view! {
        <Show when=move || open.get()>
            <div class="ui-alert-overlay" data-ui-kind="alert-overlay">
                <div
                    node_ref=dialog_ref
                    class="ui-alert-dialog"
                    role="alertdialog"
                    aria-modal="true"
                    aria-labelledby=title_id.clone()
                    aria-describedby=has_description.then(|| description_id.clone())
                    data-ui-primitive="true"
                    data-ui-kind="alert-dialog"
                    data-ui-variant=variant.token()
                >
                    {show_icon.then(|| view! {
                        <div data-ui-slot="icon" data-ui-variant=variant.token()>
                            <Icon icon=IconName::Warning size=IconSize::Lg />
                        </div>
                    })}
                    <h2 id=title_id.clone() data-ui-slot="title">{title.get_value()}</h2>
                    {description.get_value().map(|text| view! {
                        <p id=description_id.clone() data-ui-slot="description">{text}</p>
                    })}
                    <div
                        data-ui-slot="actions"
                        data-ui-layout=if stack_buttons { "stacked" } else { "inline" }
                    >
                        <Button
                            variant=ButtonVariant::Secondary
                            disabled=loading
                            full_width=stack_buttons
                            on_click=Callback::new(move |_| on_close.call(()))
                        >
                            {labels.with_value(|(cancel, _)| cancel.clone())}
                        </Button>
                        <Button
                            variant=variant.confirm_variant()
                            is_loading=loading
                            full_width=stack_buttons
                            on_click=Callback::new(move |_| {
                                if let Some(on_confirm) = on_confirm.as_ref() {
                                    on_confirm.call(());
                                }
                            })
                        >
                            {labels.with_value(|(_, confirm)| confirm.clone())}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where a dropdown menu opens relative to its trigger.
pub enum DropdownPosition {
    /// Above, aligned to the start edge.
    TopStart,
    /// Above, aligned to the end edge.
    TopEnd,
    /// Below, aligned to the start edge.
    BottomStart,
    /// Below, aligned to the end edge.
    BottomEnd,
    /// Left, aligned to the top edge.
    LeftStart,
    /// Right, aligned to the top edge.
    RightStart,
}

impl Default for DropdownPosition {
    fn default() -> Self {
        Self::BottomStart
    }
}

impl DropdownPosition {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::LeftStart => "left-start",
            Self::RightStart => "right-start",
        }
    }
}

#[derive(Clone, Copy)]
struct DropdownContext {
    open: Controllable<bool>,
}

#[component]
/// Menu button. `trigger` renders inside the toggle button; the menu closes on Escape, on an
/// outside pointer-down, and after any [`DropdownItem`] is chosen.
pub fn Dropdown(
    #[prop(into)] trigger: ViewFn,
    #[prop(default = ButtonVariant::Secondary)] trigger_variant: ButtonVariant,
    #[prop(default = ControlSize::Md)] trigger_size: ControlSize,
    #[prop(optional, into)] trigger_label: MaybeSignal<String>,
    #[prop(default = DropdownPosition::BottomStart)] position: DropdownPosition,
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let open = Controllable::new(open, false, on_open_change);
    let wrapper_ref = create_node_ref::<html::Div>();
    let is_open = open.signal();

    use_dismissible(
        is_open,
        wrapper_ref,
        DismissOptions::default(),
        Callback::new(move |reason: DismissReason| apply_overlay_event(open, reason.event())),
    );

    provide_context(DropdownContext { open });

    view! {
        <div
            node_ref=wrapper_ref
            class=merge_layout_class("ui-dropdown", layout_class)
            data-ui-primitive="true"
            data-ui-kind="dropdown"
            data-ui-state=move || if is_open.get() { "open" } else { "closed" }
        >
            <Button
                variant=trigger_variant
                size=trigger_size
                aria_label=trigger_label
                aria_haspopup="menu"
                aria_expanded=is_open
                ui_slot="trigger"
                on_click=Callback::new(move |_| apply_overlay_event(open, OverlayEvent::Trigger))
            >
                {trigger.run()}
            </Button>
            <Show when=move || is_open.get()>
                <div role="menu" data-ui-slot="menu" data-ui-placement=position.token()>
                    {children()}
                </div>
            </Show>
        </div>
    }
}

#[component]
/// Menu entry. Choosing it runs `on_click` and closes the enclosing [`Dropdown`].
pub fn DropdownItem(
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] shortcut: Option<String>,
    #[prop(optional)] danger: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let context = use_context::<DropdownContext>();

    view! {
        <button
            type="button"
            role="menuitem"
            data-ui-slot="menu-item"
            data-ui-variant=if danger { "danger" } else { "default" }
            data-ui-disabled=move || bool_token(disabled.get())
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(());
                }
                if let Some(context) = context {
                    apply_overlay_event(context.open, OverlayEvent::Close);
                }
            }
        >
            {icon.map(|icon| view! { <span data-ui-slot="item-icon"><Icon icon size=IconSize::Sm /></span> })}
            <span data-ui-slot="item-label">{children()}</span>
            {shortcut.map(|text| view! { <span data-ui-slot="item-shortcut">{text}</span> })}
        </button>
    }
}

#[component]
/// Rule between menu groups.
pub fn DropdownSeparator() -> impl IntoView {
    view! { <div role="separator" data-ui-slot="menu-separator"></div> }
}

#[component]
/// Non-interactive group heading inside a menu.
pub fn DropdownLabel(children: Children) -> impl IntoView {
    view! { <div data-ui-slot="menu-label">{children()}</div> }
}

#[component]
/// Anchored dialog surface opened from a trigger button.
pub fn Popover(
    #[prop(into)] trigger: ViewFn,
    #[prop(default = ButtonVariant::Secondary)] trigger_variant: ButtonVariant,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = Placement::Bottom)] position: Placement,
    #[prop(default = true)] show_arrow: bool,
    #[prop(default = true)] show_close_button: bool,
    #[prop(optional, into)] open: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_open_change: Option<Callback<bool>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let open = Controllable::new(open, false, on_open_change);
    let wrapper_ref = create_node_ref::<html::Div>();
    let is_open = open.signal();

    use_dismissible(
        is_open,
        wrapper_ref,
        DismissOptions::default(),
        Callback::new(move |reason: DismissReason| apply_overlay_event(open, reason.event())),
    );

    let has_header = title.is_some() || show_close_button;
    let title = store_value(title);

    view! {
        <div
            node_ref=wrapper_ref
            class=merge_layout_class("ui-popover", layout_class)
            data-ui-primitive="true"
            data-ui-kind="popover"
            data-ui-state=move || if is_open.get() { "open" } else { "closed" }
        >
            <Button
                variant=trigger_variant
                aria_haspopup="dialog"
                aria_expanded=is_open
                ui_slot="trigger"
                on_click=Callback::new(move |_| apply_overlay_event(open, OverlayEvent::Trigger))
            >
                {trigger.run()}
            </Button>
            <Show when=move || is_open.get()>
                <div role="dialog" data-ui-slot="surface" data-ui-placement=position.token()>
                    {show_arrow.then(|| view! { <div data-ui-slot="arrow" aria-hidden="true"></div> })}
                    {has_header.then(|| view! {
                        <div data-ui-slot="popover-header">
                            {title.get_value().map(|text| view! { <h3 data-ui-slot="title">{text}</h3> })}
                            {show_close_button.then(|| view! {
                                <IconButton
                                    icon=IconName::Close
                                    aria_label="Close"
                                    variant=IconButtonVariant::Ghost
                                    size=IconButtonSize::Xs
                                    ui_slot="close"
                                    on_click=Callback::new(move |_| apply_overlay_event(open, OverlayEvent::Close))
                                />
                            })}
                        </div>
                    })}
                    <div data-ui-slot="popover-content">{children()}</div>
                </div>
            </Show>
        </div>
    }
}

#[component]
/// Action row at the bottom of a popover.
pub fn PopoverFooter(children: Children) -> impl IntoView {
    view! { <div data-ui-slot="popover-footer">{children()}</div> }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn only_danger_alerts_confirm_with_danger_button() {
        assert_eq!(AlertVariant::Danger.confirm_variant(), ButtonVariant::Danger);
        assert_eq!(AlertVariant::Warning.confirm_variant(), ButtonVariant::Primary);
        assert_eq!(AlertVariant::Info.confirm_variant(), ButtonVariant::Primary);
    }

    #[test]
    fn dropdown_opens_below_start_by_default() {
        assert_eq!(DropdownPosition::default().token(), "bottom-start");
        assert_eq!(DropdownPosition::RightStart.token(), "right-start");
    }
}
