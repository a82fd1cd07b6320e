use super::*;

fn email_error(value: &str) -> Option<String> {
    if value.is_empty() || value.contains('@') {
        None
    } else {
        Some("Enter a valid email address".to_string())
    }
}

#[component]
/// Text fields, choices, and picker stories.
pub fn FormPage() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let email_message = Signal::derive(move || email.with(|value| email_error(value)));
    let bio = create_rw_signal(String::from("Designer and occasional Rust hobbyist."));
    let terms = create_rw_signal(false);
    let plan = create_rw_signal(Some("pro".to_string()));
    let notifications = create_rw_signal(true);
    let framework = create_rw_signal(String::new());
    let volume = create_rw_signal(40.0);
    let committed_volume = create_rw_signal(40.0);
    let accent = create_rw_signal("#8b5cf6".to_string());

    let frameworks = vec![
        SelectOption::new("leptos", "Leptos"),
        SelectOption::new("yew", "Yew"),
        SelectOption::new("dioxus", "Dioxus"),
        SelectOption::new("sycamore", "Sycamore").disabled(),
    ];

    view! {
        <section class="gallery-page">
            <Story title="Input" description="Labels, helper text, icons, and validation.">
                <Input label="Full name" placeholder="Jane Smith" helper_text="As shown on your profile." />
                <Input
                    label="Email"
                    input_type="email"
                    left_icon=IconName::Mail
                    required=true
                    value=email
                    error_message=email_message
                    on_input=Callback::new(move |next| email.set(next))
                />
                <Input label="Password" input_type="password" left_icon=IconName::Lock state=FieldState::Success />
                <Input label="Disabled" default_value="Read only" disabled=true size=ControlSize::Sm />
            </Story>

            <Story title="TextArea" description="Character counter with a soft limit.">
                <TextArea
                    label="Bio"
                    show_char_count=true
                    max_length=60
                    value=bio
                    on_input=Callback::new(move |next| bio.set(next))
                />
                <TextArea label="Notes" placeholder="Uncontrolled, fixed size" no_resize=true rows=3 />
            </Story>

            <Story title="Checkbox" description="Controlled, uncontrolled, and indeterminate.">
                <Checkbox
                    label="Accept terms"
                    checked=terms
                    on_change=Callback::new(move |next| terms.set(next))
                />
                <Checkbox label="Subscribe" default_checked=true helper_text="Weekly digest." />
                <Checkbox label="Select all" indeterminate=true />
                <Checkbox label="Required" error=true />
            </Story>

            <Story title="Radio" description="Group-managed selection.">
                <RadioGroup
                    name="plan"
                    label="Plan"
                    horizontal=true
                    value=plan
                    on_change=Callback::new(move |next| plan.set(next))
                >
                    <Radio value="free" label="Free" />
                    <Radio value="pro" label="Pro" description="Most popular" />
                    <Radio value="team" label="Team" disabled=true />
                </RadioGroup>
                <p>{move || format!("Selected plan: {}", plan.get().unwrap_or_else(|| "none".into()))}</p>
            </Story>

            <Story title="Toggle" description="Switches with labels on either side.">
                <Toggle
                    label="Notifications"
                    checked=notifications
                    on_change=Callback::new(move |next| notifications.set(next))
                />
                <Toggle label="Compact mode" label_left=true size=ControlSize::Sm />
                <Toggle label="Locked" default_checked=true disabled=true />
            </Story>

            <Story title="Select" description="Keyboard-operable listbox.">
                <Select
                    label="Framework"
                    options=frameworks
                    value=framework
                    on_change=Callback::new(move |next| framework.set(next))
                    helper_text="Sycamore is unavailable."
                />
                <Select label="Empty" options=Vec::new() error_message="Nothing to choose" />
            </Story>

            <Story title="Slider" description="Drag or use the arrow keys.">
                <Slider
                    label="Volume"
                    value=volume
                    step=5.0
                    on_change=Callback::new(move |next| volume.set(next))
                    on_change_end=Callback::new(move |next| committed_volume.set(next))
                    format_value=Callback::new(|value: f64| format!("{value:.0}%"))
                    marks=vec![SliderMark::at(0.0), SliderMark::labelled(50.0, "Half"), SliderMark::at(100.0)]
                />
                <p>{move || format!("Committed: {}", committed_volume.get())}</p>
                <Slider label="Disabled" default_value=30.0 disabled=true size=ControlSize::Sm />
            </Story>

            <Story title="ColorPicker" description="Saturation box, hue strip, hex entry, and presets.">
                <ColorPicker
                    label="Accent"
                    value=accent
                    on_change=Callback::new(move |next| accent.set(next))
                />
                <ColorPicker label="Uncontrolled" show_input=false />
            </Story>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn email_validation_waits_for_input() {
        assert_eq!(email_error(""), None);
        assert_eq!(email_error("jane@example.com"), None);
        assert_eq!(
            email_error("jane"),
            Some("Enter a valid email address".to_string())
        );
    }
}
