use gends_ui::prelude::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use gends_prefs::WebPrefsStore;

use crate::gallery_prefs::GalleryPrefs;
use crate::pages::{
    ButtonsPage, ContainersPage, DataDisplayPage, FeedbackPage, FormPage, GalleryToasts,
    NavigationPage, OverlaysPage, OverviewPage, TokensPage,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Top-level gallery routes, in navigation order.
pub enum GalleryPage {
    /// Landing page listing every family.
    Overview,
    /// Buttons and icon buttons.
    Buttons,
    /// Text fields, choices, and pickers.
    Form,
    /// Badges, progress, skeletons, tooltips, and toasts.
    Feedback,
    /// Cards, panels, dividers, and modals.
    Containers,
    /// Tabs, breadcrumbs, sidebar, and toolbar.
    Navigation,
    /// Alert dialogs, dropdowns, and popovers.
    Overlays,
    /// Avatars and file/folder cards.
    DataDisplay,
    /// Design token catalog.
    Tokens,
}

impl GalleryPage {
    /// Every page, in navigation order.
    pub const ALL: [Self; 9] = [
        Self::Overview,
        Self::Buttons,
        Self::Form,
        Self::Feedback,
        Self::Containers,
        Self::Navigation,
        Self::Overlays,
        Self::DataDisplay,
        Self::Tokens,
    ];

    /// Router path.
    pub fn path(self) -> &'static str {
        match self {
            Self::Overview => "/",
            Self::Buttons => "/buttons",
            Self::Form => "/form",
            Self::Feedback => "/feedback",
            Self::Containers => "/containers",
            Self::Navigation => "/navigation",
            Self::Overlays => "/overlays",
            Self::DataDisplay => "/data-display",
            Self::Tokens => "/tokens",
        }
    }

    /// Navigation label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Buttons => "Buttons",
            Self::Form => "Form",
            Self::Feedback => "Feedback",
            Self::Containers => "Containers",
            Self::Navigation => "Navigation",
            Self::Overlays => "Overlays",
            Self::DataDisplay => "Data Display",
            Self::Tokens => "Design Tokens",
        }
    }

    /// One-line summary shown on the overview.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Overview => "Every family at a glance.",
            Self::Buttons => "Variants, sizes, loading, and icon-only actions.",
            Self::Form => "Inputs, text areas, choices, select, slider, and color picker.",
            Self::Feedback => "Badges, spinners, progress, skeletons, tooltips, and toasts.",
            Self::Containers => "Cards, panels, collapsible sections, dividers, and modals.",
            Self::Navigation => "Tabs, breadcrumbs, sidebar, and toolbar.",
            Self::Overlays => "Alert dialogs, dropdown menus, and popovers.",
            Self::DataDisplay => "Avatars, avatar stacks, file cards, and folder cards.",
            Self::Tokens => "Colors, spacing, radii, shadows, type, motion, and layers.",
        }
    }

    /// Sidebar icon.
    pub fn icon(self) -> IconName {
        match self {
            Self::Overview => IconName::Home,
            Self::Buttons => IconName::Cursor,
            Self::Form => IconName::Edit,
            Self::Feedback => IconName::Info,
            Self::Containers => IconName::Copy,
            Self::Navigation => IconName::Menu,
            Self::Overlays => IconName::Eye,
            Self::DataDisplay => IconName::Folder,
            Self::Tokens => IconName::Share,
        }
    }

    /// Page matching a router pathname. Trailing slashes are ignored.
    pub fn from_path(pathname: &str) -> Option<Self> {
        let trimmed = pathname.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|page| page.path() == normalized)
    }
}

#[component]
/// Root gallery component: theme, router, navigation, and the toast layer.
pub fn GalleryApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="GenDS Gallery" />
        <Meta name="description" content="Interactive gallery of the GenDS design system primitives." />

        <ThemeProvider>
            <Router>
                <GalleryShell />
            </Router>
        </ThemeProvider>
    }
}

#[component]
fn GalleryShell() -> impl IntoView {
    let toasts = GalleryToasts::provide();
    let prefs = create_rw_signal(GalleryPrefs::load(&WebPrefsStore));
    let collapsed = Signal::derive(move || prefs.get().nav_collapsed);
    let toggle_nav = Callback::new(move |_: ()| {
        let next = prefs.get_untracked().toggled_nav();
        next.save(&WebPrefsStore);
        prefs.set(next);
    });

    view! {
        <div class="gallery-root">
            <GalleryNav collapsed />
            <main class="gallery-main">
                <GalleryHeader collapsed toggle_nav />
                <Routes>
                    <Route path="/" view=OverviewPage />
                    <Route path="/buttons" view=ButtonsPage />
                    <Route path="/form" view=FormPage />
                    <Route path="/feedback" view=FeedbackPage />
                    <Route path="/containers" view=ContainersPage />
                    <Route path="/navigation" view=NavigationPage />
                    <Route path="/overlays" view=OverlaysPage />
                    <Route path="/data-display" view=DataDisplayPage />
                    <Route path="/tokens" view=TokensPage />
                </Routes>
            </main>
            <ToastContainer
                toasts=toasts.signal()
                position=ToastPosition::BottomRight
                on_close=Callback::new(move |id| toasts.dismiss(id))
            />
        </div>
    }
}

#[component]
fn GalleryNav(collapsed: Signal<bool>) -> impl IntoView {
    let location = use_location();
    let current = Signal::derive(move || GalleryPage::from_path(&location.pathname.get()));

    view! {
        <Sidebar collapsed>
            <SidebarHeader title="GenDS" logo=|| view! { <Icon icon=IconName::Folder size=IconSize::Lg /> } />
            <SidebarContent>
                <SidebarSection title="Components">
                    {GalleryPage::ALL
                        .into_iter()
                        .map(|page| {
                            let navigate = use_navigate();
                            view! {
                                <SidebarNavItem
                                    label=page.title()
                                    icon=page.icon()
                                    active=Signal::derive(move || current.get() == Some(page))
                                    on_click=Callback::new(move |_| navigate(page.path(), Default::default()))
                                />
                            }
                        })
                        .collect_view()}
                </SidebarSection>
            </SidebarContent>
            <SidebarFooter>
                <Badge variant=Tone::Info size=ControlSize::Sm>"v0.1"</Badge>
            </SidebarFooter>
        </Sidebar>
    }
}

#[component]
fn GalleryHeader(collapsed: Signal<bool>, toggle_nav: Callback<()>) -> impl IntoView {
    let theme = use_theme();
    let location = use_location();
    let title = move || {
        GalleryPage::from_path(&location.pathname.get())
            .unwrap_or(GalleryPage::Overview)
            .title()
    };

    view! {
        <header class="gallery-header">
            <IconButton
                icon=IconName::Menu
                variant=IconButtonVariant::Ghost
                size=IconButtonSize::Sm
                aria_label=Signal::derive(move || {
                    if collapsed.get() { "Expand navigation" } else { "Collapse navigation" }.to_string()
                })
                is_active=collapsed
                on_click=Callback::new(move |_| toggle_nav.call(()))
            />
            <h1>{title}</h1>
            <Button
                variant=ButtonVariant::Ghost
                size=ControlSize::Sm
                aria_label=Signal::derive(move || {
                    if theme.is_dark() { "Switch to light theme" } else { "Switch to dark theme" }.to_string()
                })
                on_click=Callback::new(move |_| theme.toggle())
            >
                {move || if theme.is_dark() { "Light theme" } else { "Dark theme" }}
            </Button>
            <Button
                variant=ButtonVariant::Ghost
                size=ControlSize::Sm
                on_click=Callback::new(move |_| theme.reset())
            >
                "Reset theme"
            </Button>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn pathnames_resolve_to_pages() {
        assert_eq!(GalleryPage::from_path("/"), Some(GalleryPage::Overview));
        assert_eq!(GalleryPage::from_path(""), Some(GalleryPage::Overview));
        assert_eq!(GalleryPage::from_path("/form/"), Some(GalleryPage::Form));
        assert_eq!(
            GalleryPage::from_path("/data-display"),
            Some(GalleryPage::DataDisplay)
        );
        assert_eq!(GalleryPage::from_path("/missing"), None);
    }

    #[test]
    fn every_page_has_a_distinct_path() {
        for page in GalleryPage::ALL {
            assert_eq!(GalleryPage::from_path(page.path()), Some(page));
        }
    }
}
