use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tool {
    Select,
    Edit,
    Copy,
    Delete,
}

impl Tool {
    const ALL: [Self; 4] = [Self::Select, Self::Edit, Self::Copy, Self::Delete];

    fn label(self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Edit => "Edit",
            Self::Copy => "Duplicate",
            Self::Delete => "Delete",
        }
    }

    fn icon(self) -> IconName {
        match self {
            Self::Select => IconName::Cursor,
            Self::Edit => IconName::Edit,
            Self::Copy => IconName::Copy,
            Self::Delete => IconName::Trash,
        }
    }
}

#[component]
/// Tabs, breadcrumb, sidebar, and toolbar stories.
pub fn NavigationPage() -> impl IntoView {
    let toasts = GalleryToasts::from_context();
    let active_tab = create_rw_signal("overview".to_string());
    let active_nav = create_rw_signal("inbox");
    let sidebar_collapsed = create_rw_signal(false);
    let active_tool = create_rw_signal(Tool::Select);

    let trail = move || {
        vec![
            BreadcrumbItem::new("Home").icon(IconName::Home).href("/"),
            BreadcrumbItem::new("Projects").on_click(Callback::new(move |_| {
                toasts.push(ToastData::new(Tone::Info).message("Projects clicked"));
            })),
            BreadcrumbItem::new("GenDS").href("#"),
            BreadcrumbItem::new("Components").href("#"),
            BreadcrumbItem::new("Navigation").href("#"),
            BreadcrumbItem::new("Breadcrumb"),
        ]
    };

    let nav_item = move |id: &'static str, label: &'static str, icon: IconName, badge: Option<&'static str>| {
        let badge_view = badge.map(|badge| badge.to_string());
        let active = Signal::derive(move || active_nav.get() == id);
        let on_click = Callback::new(move |_| active_nav.set(id));
        match badge_view {
            Some(badge) => view! { <SidebarNavItem label icon active on_click badge /> }.into_view(),
            None => view! { <SidebarNavItem label icon active on_click /> }.into_view(),
        }
    };

    view! {
        <section class="gallery-page">
            <Story title="Tabs" description="Controlled tabs in three styles.">
                <Tabs
                    value=active_tab
                    on_value_change=Callback::new(move |next| active_tab.set(next))
                >
                    <TabList>
                        <Tab value="overview" icon=IconName::Home>"Overview"</Tab>
                        <Tab value="activity" badge="3">"Activity"</Tab>
                        <Tab value="settings">"Settings"</Tab>
                        <Tab value="archived" disabled=true>"Archived"</Tab>
                    </TabList>
                    <TabPanel value="overview"><p>"Summary of the workspace."</p></TabPanel>
                    <TabPanel value="activity"><p>"Three new events."</p></TabPanel>
                    <TabPanel value="settings"><p>"Workspace preferences."</p></TabPanel>
                </Tabs>
                <Tabs variant=TabsVariant::Pills default_value="day">
                    <TabList>
                        <Tab value="day">"Day"</Tab>
                        <Tab value="week">"Week"</Tab>
                        <Tab value="month">"Month"</Tab>
                    </TabList>
                </Tabs>
                <Tabs variant=TabsVariant::Underline default_value="code">
                    <TabList>
                        <Tab value="code">"Code"</Tab>
                        <Tab value="issues">"Issues"</Tab>
                    </TabList>
                    <TabPanel value="code"><p>"Source browser."</p></TabPanel>
                    <TabPanel value="issues"><p>"Issue tracker."</p></TabPanel>
                </Tabs>
            </Story>

            <Story title="Breadcrumb" description="Full trail and a truncated trail.">
                <Breadcrumb items=trail() />
                <Breadcrumb items=trail() max_items=3 size=ControlSize::Sm />
            </Story>

            <Story title="Sidebar" description="Sections, badges, and a collapsed state.">
                <Toggle
                    label="Collapsed"
                    checked=sidebar_collapsed
                    on_change=Callback::new(move |next| sidebar_collapsed.set(next))
                />
                <Sidebar collapsed=sidebar_collapsed size=ControlSize::Sm>
                    <SidebarHeader
                        title="Mail"
                        actions=|| view! { <IconButton icon=IconName::Plus aria_label="Compose" size=IconButtonSize::Sm /> }
                    />
                    <SidebarContent>
                        <SidebarSection title="Folders">
                            {nav_item("inbox", "Inbox", IconName::Mail, Some("12"))}
                            {nav_item("drafts", "Drafts", IconName::Edit, None)}
                            {nav_item("trash", "Trash", IconName::Trash, None)}
                        </SidebarSection>
                        <SidebarDivider />
                        <SidebarSection>
                            {nav_item("shared", "Shared", IconName::Share, Some("2"))}
                        </SidebarSection>
                    </SidebarContent>
                    <SidebarFooter>
                        <Avatar name="Jane Smith" size=AvatarSize::Sm status=AvatarStatus::Online />
                    </SidebarFooter>
                </Sidebar>
            </Story>

            <Story title="ToolBar" description="Grouped tool buttons with tooltips.">
                <ToolBar aria_label="Editing tools">
                    <ToolGroup>
                        {Tool::ALL
                            .into_iter()
                            .map(|tool| view! {
                                <ToolButton
                                    icon=tool.icon()
                                    label=tool.label()
                                    active=Signal::derive(move || active_tool.get() == tool)
                                    on_click=Callback::new(move |_| active_tool.set(tool))
                                />
                            })
                            .collect_view()}
                    </ToolGroup>
                    <ToolDivider />
                    <ToolButton icon=IconName::Lock label="Locked" disabled=true />
                </ToolBar>
                <ToolBar
                    variant=ToolBarVariant::Floating
                    orientation=Orientation::Vertical
                    position=Placement::Right
                    size=ControlSize::Sm
                >
                    <ToolButton icon=IconName::Plus label="Zoom in" tooltip_position=Placement::Left />
                    <ToolButton icon=IconName::Minus label="Zoom out" tooltip_position=Placement::Left />
                    <ToolButton icon=IconName::Eye label="Preview" show_tooltip=false />
                </ToolBar>
            </Story>
        </section>
    }
}
