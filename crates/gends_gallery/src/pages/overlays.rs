use super::*;

#[component]
/// Alert dialog, dropdown, and popover stories.
pub fn OverlaysPage() -> impl IntoView {
    let toasts = GalleryToasts::from_context();
    let delete_open = create_rw_signal(false);
    let deleting = create_rw_signal(false);
    let publish_open = create_rw_signal(false);
    let menu_open = create_rw_signal(false);
    let popover_open = create_rw_signal(false);

    let confirm_delete = Callback::new(move |_: ()| {
        deleting.set(true);
        set_timeout(
            move || {
                deleting.set(false);
                delete_open.set(false);
                toasts.push(ToastData::new(Tone::Success).message("Project deleted"));
            },
            std::time::Duration::from_millis(1000),
        );
    });

    let notify = move |message: &'static str| {
        Callback::new(move |_: ()| toasts.push(ToastData::new(Tone::Info).message(message)))
    };

    view! {
        <section class="gallery-page">
            <Story title="AlertDialog" description="Confirmation with a loading state and variants.">
                <Button variant=ButtonVariant::Danger on_click=Callback::new(move |_| delete_open.set(true))>
                    "Delete project"
                </Button>
                <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |_| publish_open.set(true))>
                    "Publish"
                </Button>
                <AlertDialog
                    open=delete_open
                    on_close=Callback::new(move |_| delete_open.set(false))
                    title="Delete project?"
                    description="This permanently removes the project and its files."
                    confirm_label="Delete"
                    on_confirm=confirm_delete
                    loading=deleting
                    id="delete-project"
                />
                <AlertDialog
                    open=publish_open
                    on_close=Callback::new(move |_| publish_open.set(false))
                    title="Publish changes?"
                    description="Everyone with access will see the update."
                    variant=AlertVariant::Info
                    confirm_label="Publish"
                    stack_buttons=true
                    on_confirm=Callback::new(move |_| {
                        publish_open.set(false);
                        toasts.push(ToastData::new(Tone::Success).message("Published"));
                    })
                    id="publish"
                />
            </Story>

            <Story title="Dropdown" description="Menus with icons, shortcuts, labels, and separators.">
                <Dropdown trigger=|| "Actions" trigger_label="Project actions">
                    <DropdownLabel>"File"</DropdownLabel>
                    <DropdownItem icon=IconName::Edit shortcut="Ctrl+R" on_click=notify("Rename")>"Rename"</DropdownItem>
                    <DropdownItem icon=IconName::Copy shortcut="Ctrl+D" on_click=notify("Duplicate")>"Duplicate"</DropdownItem>
                    <DropdownItem icon=IconName::Share disabled=true>"Share"</DropdownItem>
                    <DropdownSeparator />
                    <DropdownItem icon=IconName::Trash danger=true on_click=notify("Delete")>"Delete"</DropdownItem>
                </Dropdown>
                <Dropdown
                    trigger=|| view! { <Icon icon=IconName::More size=IconSize::Sm /> }
                    trigger_variant=ButtonVariant::Ghost
                    trigger_label="More"
                    position=DropdownPosition::BottomEnd
                    open=menu_open
                    on_open_change=Callback::new(move |next| menu_open.set(next))
                >
                    <DropdownItem on_click=notify("Archived")>"Archive"</DropdownItem>
                    <DropdownItem on_click=notify("Pinned")>"Pin"</DropdownItem>
                </Dropdown>
                <p>{move || format!("Controlled menu open: {}", menu_open.get())}</p>
            </Story>

            <Story title="Popover" description="Anchored panels with title, arrow, and footer.">
                <Popover trigger=|| "Details" title="File details">
                    <p>"quarterly-report.pdf, 2.4 MB"</p>
                </Popover>
                <Popover
                    trigger=|| "Share"
                    trigger_variant=ButtonVariant::Primary
                    position=Placement::Right
                    show_arrow=false
                    open=popover_open
                    on_open_change=Callback::new(move |next| popover_open.set(next))
                >
                    <Input label="Invite by email" placeholder="name@example.com" left_icon=IconName::Mail />
                    <PopoverFooter>
                        <Button size=ControlSize::Sm on_click=Callback::new(move |_| popover_open.set(false))>
                            "Send invite"
                        </Button>
                    </PopoverFooter>
                </Popover>
            </Story>
        </section>
    }
}
