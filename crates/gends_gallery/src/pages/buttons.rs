use super::*;

#[component]
/// Button and icon button stories.
pub fn ButtonsPage() -> impl IntoView {
    let loading = create_rw_signal(false);
    let clicks = create_rw_signal(0_u32);
    let locked = create_rw_signal(false);

    view! {
        <section class="gallery-page">
            <Story title="Variants" description="Primary, secondary, ghost, danger, and success.">
                <Button variant=ButtonVariant::Primary>"Primary"</Button>
                <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                <Button variant=ButtonVariant::Ghost>"Ghost"</Button>
                <Button variant=ButtonVariant::Danger>"Danger"</Button>
                <Button variant=ButtonVariant::Success>"Success"</Button>
            </Story>

            <Story title="Sizes" description="Small, medium, and large controls.">
                <Button size=ControlSize::Sm>"Small"</Button>
                <Button size=ControlSize::Md>"Medium"</Button>
                <Button size=ControlSize::Lg>"Large"</Button>
            </Story>

            <Story title="Icons" description="Leading and trailing icons plus icon-only buttons.">
                <Button left_icon=IconName::Plus>"New file"</Button>
                <Button variant=ButtonVariant::Secondary right_icon=IconName::ArrowRight>"Continue"</Button>
                <Button variant=ButtonVariant::Ghost icon_only=true left_icon=IconName::Trash aria_label="Delete" />
            </Story>

            <Story title="States" description="Disabled, loading, and full-width buttons.">
                <Button disabled=true>"Disabled"</Button>
                <Button
                    is_loading=loading
                    on_click=Callback::new(move |_| {
                        loading.set(true);
                        clicks.update(|count| *count += 1);
                        set_timeout(move || loading.set(false), std::time::Duration::from_millis(1200));
                    })
                >
                    {move || format!("Save ({})", clicks.get())}
                </Button>
                <Button variant=ButtonVariant::Secondary full_width=true>"Full width"</Button>
            </Story>

            <Story title="Icon buttons" description="Variants, sizes, shapes, and the active state.">
                <IconButton icon=IconName::Edit aria_label="Edit" />
                <IconButton icon=IconName::Share aria_label="Share" variant=IconButtonVariant::Ghost />
                <IconButton icon=IconName::Copy aria_label="Copy" variant=IconButtonVariant::Filled />
                <IconButton icon=IconName::Trash aria_label="Delete" variant=IconButtonVariant::Danger />
                <IconButton icon=IconName::Plus aria_label="Add" size=IconButtonSize::Xs shape=IconButtonShape::Circular />
                <IconButton icon=IconName::Plus aria_label="Add" size=IconButtonSize::Lg shape=IconButtonShape::Circular />
                <IconButton
                    icon=IconName::Lock
                    aria_label="Lock"
                    title="Toggle lock"
                    is_active=locked
                    on_click=Callback::new(move |_| locked.update(|active| *active = !*active))
                />
                <IconButton icon=IconName::Mail aria_label="Mail" disabled=true />
            </Story>
        </section>
    }
}
