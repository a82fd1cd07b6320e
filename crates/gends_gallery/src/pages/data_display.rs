use super::*;

const FILES: [(&str, &str, &str, &str); 4] = [
    ("quarterly-report.pdf", "pdf", "2 hours ago", "2.4 MB"),
    ("team-offsite.jpg", "jpg", "Yesterday", "3.1 MB"),
    ("roadmap.md", "md", "Mar 3", "12 KB"),
    ("logo.svg", "svg", "Feb 14", "8 KB"),
];

#[component]
/// Avatar and file/folder card stories.
pub fn DataDisplayPage() -> impl IntoView {
    let toasts = GalleryToasts::from_context();
    let selected_file = create_rw_signal(None::<&'static str>);
    let layout = create_rw_signal(CardLayout::Grid);

    let team = vec![
        AvatarData::named("Jane Smith").status(AvatarStatus::Online),
        AvatarData::named("Omar Haddad").status(AvatarStatus::Busy),
        AvatarData::named("Li Wei"),
        AvatarData::named("Ana Souza").status(AvatarStatus::Away),
        AvatarData::named("Kai Muller"),
        AvatarData::named("Priya Nair"),
    ];

    view! {
        <section class="gallery-page">
            <Story title="Avatar" description="Sizes, shapes, presence, and fallbacks.">
                <Avatar name="Jane Smith" size=AvatarSize::Xs />
                <Avatar name="Jane Smith" size=AvatarSize::Sm status=AvatarStatus::Online />
                <Avatar name="Omar Haddad" status=AvatarStatus::Busy />
                <Avatar name="Li Wei" size=AvatarSize::Lg shape=AvatarShape::Square status=AvatarStatus::Away />
                <Avatar src="https://i.pravatar.cc/96?img=5" alt="Profile photo" size=AvatarSize::Xl />
                <Avatar src="https://invalid.example/missing.png" name="Broken Image" size=AvatarSize::Xxl />
                <Avatar status=AvatarStatus::Offline />
            </Story>

            <Story title="AvatarStack" description="Overlapping avatars with an overflow count.">
                <AvatarStack avatars=team.clone() />
                <AvatarStack avatars=team max=2 size=AvatarSize::Sm />
            </Story>

            <Story title="FileCard" description="Grid and list layouts with image detection.">
                <SegmentedLayout layout />
                <div class="gallery-card-grid">
                    {move || {
                        let layout = layout.get();
                        FILES
                            .into_iter()
                            .map(|(name, file_type, modified_at, file_size)| view! {
                                <FileCard
                                    name=name
                                    file_type=file_type
                                    modified_at=modified_at
                                    file_size=file_size
                                    layout
                                    selected=Signal::derive(move || selected_file.get() == Some(name))
                                    on_click=Callback::new(move |_| selected_file.set(Some(name)))
                                    on_double_click=Callback::new(move |_| {
                                        toasts.push(ToastData::new(Tone::Info).message(format!("Opening {name}")));
                                    })
                                    on_menu_click=Callback::new(move |_| {
                                        toasts.push(ToastData::new(Tone::Default).message(format!("Menu for {name}")));
                                    })
                                />
                            })
                            .collect_view()
                    }}
                </div>
            </Story>

            <Story title="FolderCard" description="Colors and item counts.">
                <FolderCard name="Documents" item_count=24 color=FolderColor::Blue />
                <FolderCard name="Photos" item_count=1 color=FolderColor::Green />
                <FolderCard name="Archive" meta="Read only" color=FolderColor::Orange layout=CardLayout::Grid />
                <FolderCard name="Empty" item_count=0 color=FolderColor::Pink size=ControlSize::Sm />
            </Story>
        </section>
    }
}

#[component]
fn SegmentedLayout(layout: RwSignal<CardLayout>) -> impl IntoView {
    let option = move |value: CardLayout, label: &'static str| {
        view! {
            <Button
                variant=ButtonVariant::Secondary
                size=ControlSize::Sm
                selected=Signal::derive(move || layout.get() == value)
                on_click=Callback::new(move |_| layout.set(value))
            >
                {label}
            </Button>
        }
    };

    view! {
        <div class="gallery-inline" role="group" aria-label="Card layout">
            {option(CardLayout::Grid, "Grid")}
            {option(CardLayout::List, "List")}
        </div>
    }
}
