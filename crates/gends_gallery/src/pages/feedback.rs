use super::*;

#[component]
/// Badge, loading, progress, skeleton, empty state, tooltip, and toast stories.
pub fn FeedbackPage() -> impl IntoView {
    let toasts = GalleryToasts::from_context();
    let progress = create_rw_signal(35.0);
    let tags = create_rw_signal(vec!["design", "rust", "leptos"]);

    let bump_progress = move |_: ev::MouseEvent| {
        progress.update(|value| *value = if *value >= 100.0 { 0.0 } else { *value + 15.0 });
    };

    view! {
        <section class="gallery-page">
            <Story title="Badge" description="Tones, sizes, outline, dot, and removable chips.">
                <Badge>"Default"</Badge>
                <Badge variant=Tone::Success dot=true>"Online"</Badge>
                <Badge variant=Tone::Error outlined=true>"Failed"</Badge>
                <Badge variant=Tone::Warning size=ControlSize::Sm>"Beta"</Badge>
                <Badge variant=Tone::Info size=ControlSize::Lg>"New"</Badge>
                <For each=move || tags.get() key=|tag| *tag let:tag>
                    <Badge
                        removable=true
                        on_remove=Callback::new(move |_| tags.update(|tags| tags.retain(|item| *item != tag)))
                    >
                        {tag}
                    </Badge>
                </For>
            </Story>

            <Story title="Spinner" description="Sizes, colors, and the dots variant.">
                <Spinner size=SpinnerSize::Xs />
                <Spinner size=SpinnerSize::Md />
                <Spinner size=SpinnerSize::Xl color=SpinnerColor::Current label="Fetching" />
                <LoadingDots />
            </Story>

            <Story title="Progress" description="Linear and circular, determinate and indeterminate.">
                <Progress value=progress label="Upload" show_value=true />
                <Progress indeterminate=true color=ProgressColor::Warning size=ControlSize::Sm />
                <ProgressCircular value=progress show_value=true color=ProgressColor::Success />
                <ProgressCircular indeterminate=true size=32 stroke_width=3 />
                <Button variant=ButtonVariant::Secondary size=ControlSize::Sm on_click=Callback::new(bump_progress)>
                    "Advance"
                </Button>
            </Story>

            <Story title="Skeleton" description="Loading placeholders.">
                <Skeleton width=240_u32 height=16_u32 />
                <Skeleton variant=SkeletonVariant::Circle width=48_u32 height=48_u32 />
                <Skeleton variant=SkeletonVariant::Rectangle width="100%" height=80_u32 />
                <SkeletonText lines=4 />
                <SkeletonAvatar with_text=true />
                <SkeletonListItem />
                <SkeletonCard />
            </Story>

            <Story title="EmptyState" description="Icon, copy, and actions.">
                <EmptyState
                    title="No files yet"
                    icon=IconName::Folder
                    description="Upload a file to get started."
                    actions=|| view! { <Button left_icon=IconName::Plus>"Upload"</Button> }
                />
            </Story>

            <Story title="Tooltip" description="Placements, multiline content, and a show delay.">
                <Tooltip content="Above">
                    <Button variant=ButtonVariant::Secondary>"Top"</Button>
                </Tooltip>
                <Tooltip content="Below" position=Placement::Bottom>
                    <Button variant=ButtonVariant::Secondary>"Bottom"</Button>
                </Tooltip>
                <Tooltip content="Shown after half a second" position=Placement::Right delay_ms=500>
                    <Button variant=ButtonVariant::Secondary>"Delayed"</Button>
                </Tooltip>
                <Tooltip
                    content="Multiline tooltips wrap long help text instead of growing past the viewport."
                    position=Placement::Left
                    multiline=true
                >
                    <Button variant=ButtonVariant::Secondary>"Multiline"</Button>
                </Tooltip>
            </Story>

            <Story title="Toast" description="Auto-dismissing notifications with actions.">
                <Button
                    variant=ButtonVariant::Success
                    on_click=Callback::new(move |_| {
                        toasts.push(ToastData::new(Tone::Success).title("Saved").message("Your changes are live."));
                    })
                >
                    "Success"
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    on_click=Callback::new(move |_| {
                        toasts.push(
                            ToastData::new(Tone::Error)
                                .title("Upload failed")
                                .message("The server rejected the file.")
                                .action("Retry", Callback::new(move |_| {
                                    toasts.push(ToastData::new(Tone::Info).message("Retrying upload"));
                                })),
                        );
                    })
                >
                    "Error with action"
                </Button>
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| {
                        toasts.push(ToastData::new(Tone::Warning).title("Sticky").message("Close me manually.").sticky());
                    })
                >
                    "Sticky"
                </Button>
                <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_| toasts.clear())>
                    "Clear all"
                </Button>
            </Story>
        </section>
    }
}
