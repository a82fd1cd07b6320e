use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon button variants.
pub enum IconButtonVariant {
    /// Bordered surface button.
    Default,
    /// Borderless button.
    Ghost,
    /// Solid filled button.
    Filled,
    /// Destructive action.
    Danger,
}

impl Default for IconButtonVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl IconButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ghost => "ghost",
            Self::Filled => "filled",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon button sizing tokens.
pub enum IconButtonSize {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Default.
    Md,
    /// Large.
    Lg,
}

impl Default for IconButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn icon_size(self) -> IconSize {
        match self {
            Self::Xs => IconSize::Xs,
            Self::Sm => IconSize::Sm,
            Self::Md => IconSize::Md,
            Self::Lg => IconSize::Lg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon button outline.
pub enum IconButtonShape {
    /// Round button.
    Circular,
    /// Rounded-square button.
    Square,
}

impl Default for IconButtonShape {
    fn default() -> Self {
        Self::Square
    }
}

impl IconButtonShape {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Circular => "circular",
            Self::Square => "square",
        }
    }
}

#[component]
pub(crate) fn ButtonSpinner() -> impl IntoView {
    view! {
        <svg
            data-ui-slot="spinner"
            width="16"
            height="16"
            viewBox="0 0 24 24"
            fill="none"
            aria-hidden="true"
        >
            <circle
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width="3"
                stroke-linecap="round"
                opacity="0.25"
            ></circle>
            <path
                d="M12 2C6.477 2 2 6.477 2 12"
                stroke="currentColor"
                stroke-width="3"
                stroke-linecap="round"
            ></path>
        </svg>
    }
}

#[component]
/// Shared button primitive with variants, sizes, loading state, and icon slots.
///
/// While `is_loading` is set the button is disabled, marked `aria-busy`, and shows a spinner
/// ahead of its content.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_controls: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] aria_haspopup: MaybeSignal<String>,
    #[prop(optional, into)] aria_selected: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] tabindex: MaybeSignal<Option<i32>>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] is_loading: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] icon_only: bool,
    #[prop(optional)] submit: bool,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] right_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let class = merge_layout_class("ui-button", layout_class);
    let icon_size = size.icon_size();

    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=class
            id=id
            role=role
            aria-label=move || {
                let label = aria_label.get();
                (!label.is_empty()).then_some(label)
            }
            aria-controls=move || {
                let controls = aria_controls.get();
                (!controls.is_empty()).then_some(controls)
            }
            aria-expanded=move || aria_expanded.map(|expanded| expanded.get().to_string())
            aria-haspopup=move || {
                let popup = aria_haspopup.get();
                (!popup.is_empty()).then_some(popup)
            }
            aria-selected=move || aria_selected.map(|selected| selected.get().to_string())
            aria-busy=move || is_loading.get().then_some("true")
            title=move || {
                let title = title.get();
                (!title.is_empty()).then_some(title)
            }
            tabindex=move || tabindex.get()
            disabled=move || disabled.get() || is_loading.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || {
                if is_loading.get() {
                    "loading"
                } else if selected.get() {
                    "selected"
                } else {
                    "idle"
                }
            }
            data-ui-full-width=bool_token(full_width)
            data-ui-icon-only=bool_token(icon_only)
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get() || is_loading.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            <Show when=move || is_loading.get()>
                <ButtonSpinner />
            </Show>
            {left_icon.map(|icon| view! {
                <span data-ui-slot="icon"><Icon icon size=icon_size /></span>
            })}
            {children.map(|children| children())}
            {right_icon.map(|icon| view! {
                <span data-ui-slot="icon"><Icon icon size=icon_size /></span>
            })}
        </button>
    }
}

#[component]
/// Icon-only action button. `aria_label` is required because there is no visible text.
pub fn IconButton(
    icon: IconName,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(default = IconButtonVariant::Default)] variant: IconButtonVariant,
    #[prop(default = IconButtonSize::Md)] size: IconButtonSize,
    #[prop(default = IconButtonShape::Square)] shape: IconButtonShape,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] is_active: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || aria_label.get()
            aria-pressed=move || is_active.get().to_string()
            title=move || {
                let title = title.get();
                (!title.is_empty()).then_some(title)
            }
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-shape=shape.token()
            data-ui-selected=move || bool_token(is_active.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=size.icon_size() />
        </button>
    }
}
