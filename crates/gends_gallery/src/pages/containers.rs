use super::*;

#[component]
/// Card, panel, collapsible, divider, and modal stories.
pub fn ContainersPage() -> impl IntoView {
    let selected_card = create_rw_signal(false);
    let modal_open = create_rw_signal(false);
    let large_modal_open = create_rw_signal(false);

    view! {
        <section class="gallery-page">
            <Story title="Card" description="Variants, header actions, images, and selection.">
                <Card variant=CardVariant::Default padding=Spacing::Md>
                    <CardHeader
                        title="Quarterly report"
                        subtitle="Updated 2 hours ago"
                        action=|| view! { <IconButton icon=IconName::More aria_label="More actions" variant=IconButtonVariant::Ghost /> }
                    />
                    <CardBody>"Revenue grew 12% quarter over quarter."</CardBody>
                    <CardFooter align=FooterAlign::SpaceBetween>
                        <Button variant=ButtonVariant::Ghost size=ControlSize::Sm>"Dismiss"</Button>
                        <Button size=ControlSize::Sm>"Open"</Button>
                    </CardFooter>
                </Card>
                <Card variant=CardVariant::Elevated>
                    <CardImage src="https://picsum.photos/seed/gends/320/160" alt="Landscape" />
                    <CardBody>"Elevated card with a full-bleed image."</CardBody>
                </Card>
                <Card
                    variant=CardVariant::Outlined
                    padding=Spacing::Sm
                    interactive=true
                    selected=selected_card
                    aria_label="Selectable card"
                    on_click=Callback::new(move |_| selected_card.update(|selected| *selected = !*selected))
                >
                    <CardBody>{move || if selected_card.get() { "Selected" } else { "Click to select" }}</CardBody>
                </Card>
                <Card variant=CardVariant::Ghost padding=Spacing::Lg>
                    <CardHeader>
                        <strong>"Custom header content"</strong>
                    </CardHeader>
                </Card>
            </Story>

            <Story title="Panel" description="Header actions, sections, and footer.">
                <Panel>
                    <PanelHeader
                        title="Properties"
                        actions=|| view! { <IconButton icon=IconName::Close aria_label="Close panel" size=IconButtonSize::Sm /> }
                    />
                    <PanelBody>
                        <PanelSection title="Layout">"Width 320, height auto"</PanelSection>
                        <PanelSection title="Fill">"#3b82f6"</PanelSection>
                    </PanelBody>
                    <PanelFooter>
                        <Button size=ControlSize::Sm full_width=true>"Apply"</Button>
                    </PanelFooter>
                </Panel>
            </Story>

            <Story title="CollapsibleSection" description="Expandable content blocks.">
                <CollapsibleSection title="Advanced settings">
                    <p>"Hidden until expanded."</p>
                </CollapsibleSection>
                <CollapsibleSection title="Starts collapsed" default_open=false>
                    <p>"Opened on demand."</p>
                </CollapsibleSection>
            </Story>

            <Story title="Divider" description="Horizontal, vertical, and labelled.">
                <Divider />
                <Divider label="or" spacing=Spacing::Lg />
                <div class="gallery-inline">
                    "Left"
                    <Divider orientation=Orientation::Vertical spacing=Spacing::Sm />
                    "Right"
                </div>
            </Story>

            <Story title="Modal" description="Dialog dismissed by Escape, the backdrop, or the close button.">
                <Button on_click=Callback::new(move |_| modal_open.set(true))>"Open modal"</Button>
                <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |_| large_modal_open.set(true))>
                    "Open large modal"
                </Button>
                <Modal
                    open=modal_open
                    on_close=Callback::new(move |_| modal_open.set(false))
                    title="Rename file"
                    description="Choose a new name for quarterly-report.pdf."
                >
                    <ModalBody>
                        <Input label="File name" default_value="quarterly-report.pdf" />
                    </ModalBody>
                    <ModalFooter>
                        <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_| modal_open.set(false))>
                            "Cancel"
                        </Button>
                        <Button on_click=Callback::new(move |_| modal_open.set(false))>"Rename"</Button>
                    </ModalFooter>
                </Modal>
                <Modal
                    open=large_modal_open
                    on_close=Callback::new(move |_| large_modal_open.set(false))
                    size=ModalSize::Lg
                    id="large-modal"
                    title="Release notes"
                    close_on_overlay_click=false
                >
                    <ModalBody>
                        <p>"Only the close button and Escape dismiss this dialog."</p>
                    </ModalBody>
                </Modal>
            </Story>
        </section>
    }
}
