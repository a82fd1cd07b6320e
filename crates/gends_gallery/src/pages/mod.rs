//! Story pages, one per primitive family.

use gends_ui::prelude::*;
use leptos::*;
use leptos_router::use_navigate;

use crate::GalleryPage;

mod buttons;
mod containers;
mod data_display;
mod feedback;
mod form;
mod navigation;
mod overlays;
mod tokens;

pub use buttons::ButtonsPage;
pub use containers::ContainersPage;
pub use data_display::DataDisplayPage;
pub use feedback::FeedbackPage;
pub use form::FormPage;
pub use navigation::NavigationPage;
pub use overlays::OverlaysPage;
pub use tokens::TokensPage;

#[derive(Clone, Copy)]
/// Shared toast queue rendered by the gallery shell.
pub struct GalleryToasts {
    queue: RwSignal<ToastQueue>,
}

impl GalleryToasts {
    /// Creates the queue and provides it to descendants.
    pub fn provide() -> Self {
        let toasts = Self {
            queue: create_rw_signal(ToastQueue::new()),
        };
        provide_context(toasts);
        toasts
    }

    /// Queue from the gallery shell.
    ///
    /// # Panics
    ///
    /// Panics outside the gallery shell.
    pub fn from_context() -> Self {
        use_context::<Self>().expect("GalleryToasts must be provided by the gallery shell")
    }

    /// Visible toasts, oldest first.
    pub fn signal(self) -> Signal<Vec<ToastData>> {
        let queue = self.queue;
        Signal::derive(move || queue.with(|queue| queue.toasts().to_vec()))
    }

    /// Queues a toast.
    pub fn push(self, toast: ToastData) {
        self.queue.update(|queue| {
            queue.push(toast);
        });
    }

    /// Removes a toast by id.
    pub fn dismiss(self, id: u64) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }

    /// Removes every toast.
    pub fn clear(self) {
        self.queue.update(ToastQueue::clear);
    }
}

#[component]
/// Titled card wrapping one story.
pub fn Story(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card variant=CardVariant::Outlined padding=Spacing::Md layout_class="gallery-story">
            <CardHeader title=title subtitle=description />
            <CardBody>
                <div class="gallery-story-row">{children()}</div>
            </CardBody>
        </Card>
    }
}

#[component]
/// Landing page with one interactive card per family.
pub fn OverviewPage() -> impl IntoView {
    view! {
        <section class="gallery-overview">
            {GalleryPage::ALL
                .into_iter()
                .filter(|page| *page != GalleryPage::Overview)
                .map(|page| {
                    let navigate = use_navigate();
                    view! {
                        <Card
                            interactive=true
                            padding=Spacing::Md
                            aria_label=page.title()
                            on_click=Callback::new(move |_| navigate(page.path(), Default::default()))
                        >
                            <CardHeader title=page.title() subtitle=page.summary() />
                            <CardFooter align=FooterAlign::Right>
                                <Icon icon=IconName::ArrowRight size=IconSize::Sm />
                            </CardFooter>
                        </Card>
                    }
                })
                .collect_view()}
        </section>
    }
}
