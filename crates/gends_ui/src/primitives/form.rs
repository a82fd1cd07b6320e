use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Character counter state of a length-limited text area.
pub enum CharCountStatus {
    /// Comfortably under the limit, or no limit.
    Normal,
    /// At or above 90% of the limit without exceeding it.
    NearLimit,
    /// Over the limit.
    Exceeded,
}

impl CharCountStatus {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::NearLimit => "near-limit",
            Self::Exceeded => "exceeded",
        }
    }
}

/// Classifies a character count against an optional maximum.
pub fn char_count_status(count: usize, max_length: Option<usize>) -> CharCountStatus {
    let Some(max) = max_length.filter(|max| *max > 0) else {
        return CharCountStatus::Normal;
    };
    if count > max {
        CharCountStatus::Exceeded
    } else if count * 10 >= max * 9 {
        CharCountStatus::NearLimit
    } else {
        CharCountStatus::Normal
    }
}

#[component]
fn FieldLabel(#[prop(into)] text: String, required: bool) -> impl IntoView {
    view! {
        <label data-ui-slot="label" data-ui-required=bool_token(required)>
            {text}
        </label>
    }
}

#[component]
/// Single-line text input with label, helper text, validation state, and icon slots.
///
/// An `error_message` always wins over `state` and replaces the helper text.
pub fn Input(
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(default = FieldState::Default)] state: FieldState,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error_message: MaybeSignal<Option<String>>,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] right_icon: Option<IconName>,
    #[prop(optional)] required: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let value = Controllable::new(value, default_value, on_input);
    let error_message_for_state = error_message.clone();
    let final_state = Signal::derive(move || {
        error_message_for_state.with(|message| state.with_error(message.as_deref()))
    });
    let helper = Signal::derive(move || {
        error_message
            .get()
            .filter(|message| !message.is_empty())
            .or_else(|| helper_text.clone())
    });

    view! {
        <div
            class=merge_layout_class("ui-input", layout_class)
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-size=size.token()
            data-ui-state=move || final_state.get().token()
            data-ui-full-width=bool_token(full_width)
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {label.map(|text| view! { <FieldLabel text required /> })}
            <div data-ui-slot="control">
                {left_icon.map(|icon| view! {
                    <span data-ui-slot="left-icon"><Icon icon size=size.icon_size() /></span>
                })}
                <input
                    node_ref=node_ref
                    type=input_type
                    id=id
                    name=name
                    placeholder=placeholder
                    required=required
                    disabled=move || disabled.get()
                    aria-invalid=move || (final_state.get() == FieldState::Error).to_string()
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        if let Some(shown) = value.set_reconciled(event_target_value(&ev)) {
                            event_target::<web_sys::HtmlInputElement>(&ev).set_value(&shown);
                        }
                    }
                    on:keydown=move |ev| {
                        if let Some(on_keydown) = on_keydown.as_ref() {
                            on_keydown.call(ev);
                        }
                    }
                />
                {right_icon.map(|icon| view! {
                    <span data-ui-slot="right-icon"><Icon icon size=size.icon_size() /></span>
                })}
            </div>
            {move || helper.get().map(|text| view! { <span data-ui-slot="helper">{text}</span> })}
        </div>
    }
}

#[component]
/// Multi-line text input with an optional live character counter.
pub fn TextArea(
    #[prop(default = FieldState::Default)] state: FieldState,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error_message: Option<String>,
    #[prop(optional)] show_char_count: bool,
    #[prop(optional)] max_length: Option<usize>,
    #[prop(default = 4)] rows: u32,
    #[prop(optional)] no_resize: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let value = Controllable::new(value, default_value, on_input);
    let final_state = state.with_error(error_message.as_deref());
    let helper = error_message.filter(|m| !m.is_empty()).or(helper_text);
    let count = Signal::derive(move || value.get().chars().count());
    let status = Signal::derive(move || char_count_status(count.get(), max_length));
    let show_footer = helper.is_some() || show_char_count;

    view! {
        <div
            class=merge_layout_class("ui-textarea", layout_class)
            data-ui-primitive="true"
            data-ui-kind="textarea"
            data-ui-state=final_state.token()
            data-ui-no-resize=bool_token(no_resize)
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {label.map(|text| view! { <FieldLabel text required /> })}
            <textarea
                id=id
                rows=rows
                placeholder=placeholder
                maxlength=max_length
                required=required
                disabled=move || disabled.get()
                aria-invalid=(final_state == FieldState::Error).to_string()
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(shown) = value.set_reconciled(event_target_value(&ev)) {
                        event_target::<web_sys::HtmlTextAreaElement>(&ev).set_value(&shown);
                    }
                }
            ></textarea>
            {show_footer.then(|| view! {
                <div data-ui-slot="footer">
                    {helper.map(|text| view! { <span data-ui-slot="helper">{text}</span> })}
                    {show_char_count.then(|| view! {
                        <span data-ui-slot="char-count" data-ui-state=move || status.get().token()>
                            {move || match max_length {
                                Some(max) => format!("{} / {max}", count.get()),
                                None => count.get().to_string(),
                            }}
                        </span>
                    })}
                </div>
            })}
        </div>
    }
}

#[component]
/// Checkbox with optional label, helper text, and an indeterminate display state.
pub fn Checkbox(
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] checked: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_checked: bool,
    #[prop(optional, into)] indeterminate: MaybeSignal<bool>,
    #[prop(optional)] error: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let checked = Controllable::new(checked, default_checked, on_change);
    let has_content = label.is_some() || helper_text.is_some();

    view! {
        <label
            class=merge_layout_class("ui-checkbox", layout_class)
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-size=size.token()
            data-ui-state=move || {
                if indeterminate.get() {
                    "indeterminate"
                } else if checked.get() {
                    "checked"
                } else {
                    "unchecked"
                }
            }
            data-ui-selected=move || bool_token(checked.get())
            data-ui-disabled=move || bool_token(disabled.get())
            data-ui-error=bool_token(error)
        >
            <input
                type="checkbox"
                data-ui-slot="native"
                id=id
                name=name
                disabled=move || disabled.get()
                prop:checked=move || checked.get()
                prop:indeterminate=move || indeterminate.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <span data-ui-slot="box" aria-hidden="true">
                {move || {
                    let icon = if indeterminate.get() { IconName::Minus } else { IconName::Check };
                    view! { <Icon icon size=size.icon_size() /> }
                }}
            </span>
            {has_content.then(|| view! {
                <span data-ui-slot="content">
                    {label.map(|text| view! { <span data-ui-slot="label">{text}</span> })}
                    {helper_text.map(|text| view! { <span data-ui-slot="helper">{text}</span> })}
                </span>
            })}
        </label>
    }
}

#[derive(Clone, Copy)]
struct RadioGroupContext {
    name: StoredValue<String>,
    value: Controllable<Option<String>>,
    disabled: MaybeSignal<bool>,
}

#[component]
/// Radio button. Inside a [`RadioGroup`] it reads and writes the group's selection; standalone
/// it manages its own `checked` state.
pub fn Radio(
    #[prop(into)] value: String,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] checked: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_checked: bool,
    #[prop(optional)] error: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let group = use_context::<RadioGroupContext>();
    let own = Controllable::new(checked, default_checked, on_change);
    let option_value = store_value(value.clone());

    let is_checked = Signal::derive(move || match group {
        Some(group) => option_value.with_value(|value| group.value.get().as_deref() == Some(value)),
        None => own.get(),
    });
    let is_disabled = Signal::derive(move || {
        disabled.get() || group.map(|group| group.disabled.get()).unwrap_or(false)
    });
    let name = name.or_else(|| group.map(|group| group.name.get_value()));
    let has_content = label.is_some() || description.is_some();

    let select = move || {
        if is_disabled.get_untracked() {
            return;
        }
        match group {
            Some(group) => group.value.set(Some(option_value.get_value())),
            None => own.set(true),
        }
    };

    view! {
        <label
            class=merge_layout_class("ui-radio", layout_class)
            data-ui-primitive="true"
            data-ui-kind="radio"
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(is_checked.get())
            data-ui-disabled=move || bool_token(is_disabled.get())
            data-ui-error=bool_token(error)
        >
            <input
                type="radio"
                data-ui-slot="native"
                name=name
                value=value
                disabled=move || is_disabled.get()
                prop:checked=move || is_checked.get()
                on:change=move |_| select()
            />
            <span data-ui-slot="circle" aria-hidden="true">
                <span data-ui-slot="dot"></span>
            </span>
            {has_content.then(|| view! {
                <span data-ui-slot="content">
                    {label.map(|text| view! { <span data-ui-slot="label">{text}</span> })}
                    {description.map(|text| view! { <span data-ui-slot="description">{text}</span> })}
                </span>
            })}
        </label>
    }
}

#[component]
/// Group of [`Radio`] options sharing one selected value.
pub fn RadioGroup(
    #[prop(into)] name: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] horizontal: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] value: Option<MaybeSignal<Option<String>>>,
    #[prop(optional, into)] default_value: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<Option<String>>>,
    children: Children,
) -> impl IntoView {
    provide_context(RadioGroupContext {
        name: store_value(name),
        value: Controllable::new(value, default_value, on_change),
        disabled,
    });

    let orientation = if horizontal {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };

    view! {
        <div
            class=merge_layout_class("ui-radio-group", layout_class)
            role="radiogroup"
            aria-label=label.clone()
            data-ui-primitive="true"
            data-ui-kind="radio-group"
            data-ui-orientation=orientation.token()
        >
            {label.map(|text| view! { <div data-ui-slot="group-label">{text}</div> })}
            <div data-ui-slot="options">{children()}</div>
        </div>
    }
}

#[component]
/// On/off switch rendered as a `role="switch"` checkbox.
pub fn Toggle(
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] label_left: bool,
    #[prop(optional, into)] checked: Option<MaybeSignal<bool>>,
    #[prop(optional)] default_checked: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let checked = Controllable::new(checked, default_checked, on_change);

    view! {
        <label
            class=merge_layout_class("ui-toggle", layout_class)
            data-ui-primitive="true"
            data-ui-kind="toggle"
            data-ui-size=size.token()
            data-ui-label-left=bool_token(label_left)
            data-ui-selected=move || bool_token(checked.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <input
                type="checkbox"
                role="switch"
                data-ui-slot="native"
                id=id
                disabled=move || disabled.get()
                aria-checked=move || checked.get().to_string()
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <span data-ui-slot="track" aria-hidden="true">
                <span data-ui-slot="thumb"></span>
            </span>
            {label.map(|text| view! { <span data-ui-slot="label">{text}</span> })}
        </label>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn char_count_thresholds() {
        assert_eq!(char_count_status(10, None), CharCountStatus::Normal);
        assert_eq!(char_count_status(89, Some(100)), CharCountStatus::Normal);
        assert_eq!(char_count_status(90, Some(100)), CharCountStatus::NearLimit);
        assert_eq!(char_count_status(100, Some(100)), CharCountStatus::NearLimit);
        assert_eq!(char_count_status(101, Some(100)), CharCountStatus::Exceeded);
        assert_eq!(char_count_status(5, Some(0)), CharCountStatus::Normal);
    }

    #[test]
    fn char_count_tokens() {
        assert_eq!(CharCountStatus::NearLimit.token(), "near-limit");
        assert_eq!(CharCountStatus::Exceeded.token(), "exceeded");
    }
}
