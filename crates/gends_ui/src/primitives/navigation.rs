use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Tab strip styles.
pub enum TabsVariant {
    /// Segmented control look.
    Default,
    /// Rounded pill tabs.
    Pills,
    /// Underlined text tabs.
    Underline,
}

impl Default for TabsVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl TabsVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pills => "pills",
            Self::Underline => "underline",
        }
    }
}

#[derive(Clone, Copy)]
/// Selection shared by [`Tabs`] with its list, tabs, and panels.
pub struct TabsContext {
    active: Controllable<String>,
    /// Visual style chosen on the enclosing [`Tabs`].
    pub variant: TabsVariant,
}

impl TabsContext {
    /// Value of the active tab, tracked.
    pub fn active(&self) -> String {
        self.active.get()
    }

    /// Whether `value` is the active tab, tracked.
    pub fn is_active(&self, value: &str) -> bool {
        self.active.get() == value
    }

    /// Activates `value`.
    pub fn select(&self, value: String) {
        self.active.set(value);
    }
}

/// Returns the enclosing [`Tabs`] context.
///
/// # Panics
///
/// Panics when called outside a [`Tabs`] component; tab parts cannot work without one.
pub fn use_tabs_context() -> TabsContext {
    use_context::<TabsContext>().expect("Tabs components must be used within a Tabs provider")
}

#[component]
/// Tab group root. Owns the active value, controlled through `value` or seeded by
/// `default_value`.
pub fn Tabs(
    #[prop(default = TabsVariant::Default)] variant: TabsVariant,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional, into)] default_value: String,
    #[prop(optional)] on_value_change: Option<Callback<String>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    provide_context(TabsContext {
        active: Controllable::new(value, default_value, on_value_change),
        variant,
    });

    view! {
        <div
            class=merge_layout_class("ui-tabs", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tabs"
            data-ui-variant=variant.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Row of [`Tab`] buttons.
pub fn TabList(children: Children) -> impl IntoView {
    let context = use_tabs_context();

    view! {
        <div role="tablist" data-ui-slot="tab-list" data-ui-variant=context.variant.token()>
            {children()}
        </div>
    }
}

#[component]
/// Tab button. Only the active tab is in the tab order.
pub fn Tab(
    #[prop(into)] value: String,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] badge: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    let context = use_tabs_context();
    let tab_value = store_value(value.clone());
    let is_active = Signal::derive(move || tab_value.with_value(|value| context.is_active(value)));

    view! {
        <button
            type="button"
            role="tab"
            id=format!("tab-{value}")
            aria-selected=move || is_active.get().to_string()
            aria-controls=format!("panel-{value}")
            tabindex=move || if is_active.get() { 0 } else { -1 }
            disabled=move || disabled.get()
            data-ui-slot="tab"
            data-ui-variant=context.variant.token()
            data-ui-selected=move || bool_token(is_active.get())
            on:click=move |_| context.select(tab_value.get_value())
        >
            {icon.map(|icon| view! { <span data-ui-slot="tab-icon"><Icon icon size=IconSize::Sm /></span> })}
            {children()}
            {badge.map(|text| view! { <span data-ui-slot="tab-badge">{text}</span> })}
        </button>
    }
}

#[component]
/// Content for one tab. Children are only mounted while the tab is active.
pub fn TabPanel(#[prop(into)] value: String, children: ChildrenFn) -> impl IntoView {
    let context = use_tabs_context();
    let panel_value = store_value(value.clone());
    let is_active =
        Signal::derive(move || panel_value.with_value(|value| context.is_active(value)));

    view! {
        <div
            id=format!("panel-{value}")
            role="tabpanel"
            aria-labelledby=format!("tab-{value}")
            hidden=move || !is_active.get()
            data-ui-slot="tab-panel"
            data-ui-state=move || if is_active.get() { "active" } else { "inactive" }
        >
            <Show when=move || is_active.get()>{children()}</Show>
        </div>
    }
}

#[derive(Clone)]
/// One breadcrumb entry. Entries with `href` or `on_click` render as links.
pub struct BreadcrumbItem {
    /// Visible text.
    pub label: String,
    /// Link target.
    pub href: Option<String>,
    /// Leading icon.
    pub icon: Option<IconName>,
    /// Click handler; suppresses navigation to `href`.
    pub on_click: Option<Callback<()>>,
}

impl BreadcrumbItem {
    /// Plain text entry.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            icon: None,
            on_click: None,
        }
    }

    /// Sets the link target.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Sets the leading icon.
    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the click handler.
    pub fn on_click(mut self, on_click: Callback<()>) -> Self {
        self.on_click = Some(on_click);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A rendered breadcrumb position.
pub enum Crumb<T> {
    /// A real entry.
    Item(T),
    /// Marker standing in for the hidden middle entries.
    Ellipsis,
}

/// Shortens a trail to at most `max_items` entries plus an ellipsis marker.
///
/// `max_items == 0` disables truncation. A longer trail keeps the first entry, then the ellipsis,
/// then the last `max_items - 1` entries.
pub fn truncate_crumbs<T: Clone>(items: &[T], max_items: usize) -> Vec<Crumb<T>> {
    if max_items == 0 || items.len() <= max_items {
        return items.iter().cloned().map(Crumb::Item).collect();
    }
    let mut crumbs = Vec::with_capacity(max_items + 1);
    crumbs.push(Crumb::Item(items[0].clone()));
    crumbs.push(Crumb::Ellipsis);
    let tail = max_items - 1;
    crumbs.extend(items[items.len() - tail..].iter().cloned().map(Crumb::Item));
    crumbs
}

#[component]
/// Navigation trail. The last entry is marked as the current page.
pub fn Breadcrumb(
    items: Vec<BreadcrumbItem>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] max_items: usize,
    #[prop(default = IconName::ChevronRight)] separator: IconName,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let crumbs = truncate_crumbs(&items, max_items);
    let last = crumbs.len().saturating_sub(1);
    let separator_view = move || {
        view! {
            <li data-ui-slot="separator" aria-hidden="true">
                <Icon icon=separator size=size.icon_size() />
            </li>
        }
    };

    view! {
        <nav
            class=merge_layout_class("ui-breadcrumb", layout_class)
            aria-label="Breadcrumb"
            data-ui-primitive="true"
            data-ui-kind="breadcrumb"
            data-ui-size=size.token()
        >
            <ol data-ui-slot="list">
                {crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(index, crumb)| {
                        let separator = (index > 0).then(separator_view);
                        let entry = match crumb {
                            Crumb::Ellipsis => view! {
                                <li data-ui-slot="ellipsis"><span>"..."</span></li>
                            }
                            .into_view(),
                            Crumb::Item(item) => breadcrumb_entry(item, index == last).into_view(),
                        };
                        view! { {separator} {entry} }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}

fn breadcrumb_entry(item: BreadcrumbItem, is_current: bool) -> impl IntoView {
    let BreadcrumbItem {
        label,
        href,
        icon,
        on_click,
    } = item;
    let aria_current = is_current.then_some("page");
    let icon = icon.map(|icon| view! { <span data-ui-slot="icon"><Icon icon size=IconSize::Sm /></span> });

    let content = if href.is_some() || on_click.is_some() {
        view! {
            <a
                data-ui-slot="link"
                href=href.unwrap_or_else(|| "#".to_string())
                aria-current=aria_current
                on:click=move |ev| {
                    if let Some(on_click) = on_click.as_ref() {
                        ev.prevent_default();
                        on_click.call(());
                    }
                }
            >
                {icon}
                {label}
            </a>
        }
        .into_view()
    } else {
        view! {
            <span data-ui-slot="link" aria-current=aria_current>
                {icon}
                {label}
            </span>
        }
        .into_view()
    };

    view! {
        <li data-ui-slot="item" data-ui-current=bool_token(is_current)>
            {content}
        </li>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Edge a sidebar is docked to.
pub enum SidebarPosition {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

impl Default for SidebarPosition {
    fn default() -> Self {
        Self::Left
    }
}

impl SidebarPosition {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[component]
/// Docked navigation column. A collapsed sidebar shrinks to the small width.
pub fn Sidebar(
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(default = SidebarPosition::Left)] position: SidebarPosition,
    #[prop(optional, into)] collapsed: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <aside
            class=merge_layout_class("ui-sidebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar"
            data-ui-size=move || if collapsed.get() { ControlSize::Sm.token() } else { size.token() }
            data-ui-position=position.token()
            data-ui-state=move || if collapsed.get() { "collapsed" } else { "expanded" }
        >
            {children()}
        </aside>
    }
}

#[component]
/// Sidebar heading with optional logo and actions.
pub fn SidebarHeader(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] logo: Option<ViewFn>,
    #[prop(optional, into)] actions: Option<ViewFn>,
) -> impl IntoView {
    view! {
        <div data-ui-slot="sidebar-header">
            {logo.map(|logo| logo.run())}
            {title.map(|text| view! { <h2 data-ui-slot="title">{text}</h2> })}
            {actions.map(|actions| view! { <div data-ui-slot="sidebar-actions">{actions.run()}</div> })}
        </div>
    }
}

#[component]
/// Scrollable sidebar body.
pub fn SidebarContent(#[prop(optional)] no_padding: bool, children: Children) -> impl IntoView {
    view! {
        <div data-ui-slot="sidebar-content" data-ui-padding=if no_padding { "none" } else { "md" }>
            {children()}
        </div>
    }
}

#[component]
/// Sidebar bottom row.
pub fn SidebarFooter(children: Children) -> impl IntoView {
    view! { <div data-ui-slot="sidebar-footer">{children()}</div> }
}

#[component]
/// Titled group of navigation items.
pub fn SidebarSection(
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div data-ui-slot="sidebar-section">
            {title.map(|text| view! { <div data-ui-slot="section-title">{text}</div> })}
            {children()}
        </div>
    }
}

#[component]
/// Sidebar navigation entry with optional icon and count badge.
pub fn SidebarNavItem(
    #[prop(into)] label: String,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] badge: Option<String>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            data-ui-slot="nav-item"
            aria-current=move || active.get().then_some("page")
            data-ui-selected=move || bool_token(active.get())
            on:click=move |_| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(());
                }
            }
        >
            {icon.map(|icon| view! { <span data-ui-slot="nav-icon"><Icon icon size=IconSize::Sm /></span> })}
            <span data-ui-slot="nav-label">{label}</span>
            {badge.map(|text| view! { <span data-ui-slot="nav-badge">{text}</span> })}
        </button>
    }
}

#[component]
/// Rule between sidebar groups.
pub fn SidebarDivider() -> impl IntoView {
    view! { <div data-ui-slot="sidebar-divider" role="separator"></div> }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Toolbar presentation.
pub enum ToolBarVariant {
    /// Detached shadowed bar pinned to a viewport edge.
    Floating,
    /// Bar in normal flow.
    Inline,
}

impl Default for ToolBarVariant {
    fn default() -> Self {
        Self::Inline
    }
}

impl ToolBarVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Floating => "floating",
            Self::Inline => "inline",
        }
    }
}

#[component]
/// Tool strip. `position` only applies to floating bars.
pub fn ToolBar(
    #[prop(default = ToolBarVariant::Inline)] variant: ToolBarVariant,
    #[prop(default = Placement::Bottom)] position: Placement,
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let placement = (variant == ToolBarVariant::Floating).then(|| position.token());

    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            role="toolbar"
            aria-label=aria_label
            aria-orientation=orientation.token()
            data-ui-primitive="true"
            data-ui-kind="toolbar"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-orientation=orientation.token()
            data-ui-placement=placement
        >
            {children()}
        </div>
    }
}

#[component]
/// Toggleable tool button labelled for assistive technology, with an optional hover hint.
pub fn ToolButton(
    icon: IconName,
    #[prop(into)] label: String,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(default = true)] show_tooltip: bool,
    #[prop(default = Placement::Bottom)] tooltip_position: Placement,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let button = {
        let label = label.clone();
        view! {
            <button
                type="button"
                data-ui-slot="tool-button"
                aria-label=label
                aria-pressed=move || active.get().to_string()
                disabled=move || disabled.get()
                data-ui-selected=move || bool_token(active.get())
                on:click=move |_| {
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(());
                    }
                }
            >
                <Icon icon size=IconSize::Md />
            </button>
        }
    };

    if !show_tooltip {
        return button.into_view();
    }

    view! {
        <Tooltip content=label position=tooltip_position>
            {button}
        </Tooltip>
    }
    .into_view()
}

#[component]
/// Rule between tool groups.
pub fn ToolDivider() -> impl IntoView {
    view! { <div data-ui-slot="tool-divider" role="separator"></div> }
}

#[component]
/// Cluster of related tool buttons.
pub fn ToolGroup(children: Children) -> impl IntoView {
    view! { <div data-ui-slot="tool-group" role="group">{children()}</div> }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn labels(crumbs: &[Crumb<&'static str>]) -> Vec<&'static str> {
        crumbs
            .iter()
            .map(|crumb| match crumb {
                Crumb::Item(label) => *label,
                Crumb::Ellipsis => "...",
            })
            .collect()
    }

    #[test]
    fn long_trails_keep_first_and_tail() {
        let items = ["A", "B", "C", "D", "E", "F"];
        assert_eq!(labels(&truncate_crumbs(&items, 3)), vec!["A", "...", "E", "F"]);
        assert_eq!(labels(&truncate_crumbs(&items, 2)), vec!["A", "...", "F"]);
    }

    #[test]
    fn short_or_unlimited_trails_are_untouched() {
        let items = ["Home", "Docs", "Page"];
        assert_eq!(labels(&truncate_crumbs(&items, 0)), vec!["Home", "Docs", "Page"]);
        assert_eq!(labels(&truncate_crumbs(&items, 3)), vec!["Home", "Docs", "Page"]);
        assert_eq!(labels(&truncate_crumbs(&items, 5)), vec!["Home", "Docs", "Page"]);
    }

    #[test]
    fn single_slot_trail_shows_first_entry_and_marker() {
        let items = ["A", "B", "C"];
        assert_eq!(labels(&truncate_crumbs(&items, 1)), vec!["A", "..."]);
    }

    #[test]
    fn tabs_context_tracks_uncontrolled_selection() {
        let runtime = create_runtime();
        let context = TabsContext {
            active: Controllable::new(None, "overview".to_string(), None),
            variant: TabsVariant::Pills,
        };

        assert!(context.is_active("overview"));
        context.select("settings".to_string());
        assert_eq!(context.active(), "settings");
        assert!(!context.is_active("overview"));
        runtime.dispose();
    }

    #[test]
    #[should_panic(expected = "Tabs components must be used within a Tabs provider")]
    fn tab_parts_panic_outside_tabs() {
        let runtime = create_runtime();
        let _ = use_tabs_context();
        runtime.dispose();
    }
}
