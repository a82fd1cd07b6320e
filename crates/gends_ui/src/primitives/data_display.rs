use super::*;

/// Initials shown when an avatar has no usable image.
///
/// A single word yields its first two characters; several words yield the first character of the
/// first and last word. Blank names yield `None`.
pub fn avatar_initials(name: &str) -> Option<String> {
    let words: Vec<&str> = name.split_whitespace().collect();
    let initials: String = match words.as_slice() {
        [] => return None,
        [only] => only.chars().take(2).collect(),
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
    };
    Some(initials.to_uppercase())
}

/// Splits an avatar list into the count shown and the `+N` overflow.
pub fn stack_overflow(len: usize, max: usize) -> (usize, usize) {
    let visible = len.min(max);
    (visible, len - visible)
}

/// Whether a file extension names an image format the file card previews as a picture.
pub fn file_is_image(file_type: &str) -> bool {
    matches!(
        file_type.to_ascii_lowercase().as_str(),
        "jpg" | "jpeg" | "png" | "gif" | "svg" | "webp"
    )
}

/// Secondary line of a folder card: explicit `meta` wins, otherwise an item count.
pub fn folder_meta_text(meta: Option<&str>, item_count: Option<usize>) -> Option<String> {
    match (meta, item_count) {
        (Some(meta), _) if !meta.is_empty() => Some(meta.to_string()),
        (_, Some(1)) => Some("1 item".to_string()),
        (_, Some(count)) => Some(format!("{count} items")),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Avatar diameters.
pub enum AvatarSize {
    /// 24px.
    Xs,
    /// 32px.
    Sm,
    /// 40px.
    Md,
    /// 48px.
    Lg,
    /// 64px.
    Xl,
    /// 96px.
    Xxl,
}

impl Default for AvatarSize {
    fn default() -> Self {
        Self::Md
    }
}

impl AvatarSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }

    fn icon_size(self) -> IconSize {
        match self {
            Self::Xs => IconSize::Xs,
            Self::Sm => IconSize::Sm,
            Self::Md | Self::Lg => IconSize::Md,
            Self::Xl | Self::Xxl => IconSize::Lg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Presence dot drawn on an avatar.
pub enum AvatarStatus {
    /// Available.
    Online,
    /// Not connected.
    Offline,
    /// Do not disturb.
    Busy,
    /// Idle.
    Away,
}

impl AvatarStatus {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Busy => "busy",
            Self::Away => "away",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Avatar outline.
pub enum AvatarShape {
    /// Round.
    Circle,
    /// Rounded square.
    Square,
}

impl Default for AvatarShape {
    fn default() -> Self {
        Self::Circle
    }
}

impl AvatarShape {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Avatar description used by [`AvatarStack`].
pub struct AvatarData {
    /// Image URL.
    pub src: Option<String>,
    /// Image alt text; falls back to the name.
    pub alt: Option<String>,
    /// Person name used for alt text and initials.
    pub name: Option<String>,
    /// Presence dot.
    pub status: Option<AvatarStatus>,
    /// Outline.
    pub shape: AvatarShape,
}

impl AvatarData {
    /// Avatar for a named person.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the image URL.
    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Sets the presence dot.
    pub fn status(mut self, status: AvatarStatus) -> Self {
        self.status = Some(status);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What an avatar currently draws.
pub(crate) enum AvatarContent {
    /// The `src` image.
    Image,
    /// Initials derived from the name.
    Initials(String),
    /// Generic user glyph.
    Icon,
}

/// Picks the avatar content. A missing or failed image falls back to initials, then the glyph.
pub(crate) fn avatar_content(has_src: bool, failed: bool, initials: Option<&str>) -> AvatarContent {
    if has_src && !failed {
        return AvatarContent::Image;
    }
    initials.map_or(AvatarContent::Icon, |initials| {
        AvatarContent::Initials(initials.to_string())
    })
}

fn avatar_view(avatar: AvatarData, size: AvatarSize, layout_class: Option<&'static str>) -> View {
    let AvatarData {
        src,
        alt,
        name,
        status,
        shape,
    } = avatar;
    let image_failed = create_rw_signal(false);
    let initials = name.as_deref().and_then(avatar_initials);
    let alt = alt.or(name).unwrap_or_else(|| "Avatar".to_string());
    let has_src = src.is_some();
    let src = store_value(src);
    let content = create_memo(move |_| {
        avatar_content(has_src, image_failed.get(), initials.as_deref())
    });

    let body = move || match content.get() {
        AvatarContent::Image => view! {
            <img
                data-ui-slot="image"
                src=src.get_value()
                alt=alt.clone()
                on:error=move |_| image_failed.set(true)
            />
        }
        .into_view(),
        AvatarContent::Initials(initials) => {
            view! { <span data-ui-slot="initials">{initials}</span> }.into_view()
        }
        AvatarContent::Icon => view! {
            <span data-ui-slot="fallback-icon"><Icon icon=IconName::User size=size.icon_size() /></span>
        }
        .into_view(),
    };

    view! {
        <div
            class=merge_layout_class("ui-avatar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="avatar"
            data-ui-size=size.token()
            data-ui-shape=shape.token()
        >
            {body}
            {status.map(|status| view! {
                <span data-ui-slot="status" data-ui-status=status.token()></span>
            })}
        </div>
    }
    .into_view()
}

#[component]
/// User picture. Falls back to initials, then to a user glyph, when the image is missing or fails
/// to load.
pub fn Avatar(
    #[prop(optional, into)] src: Option<String>,
    #[prop(optional, into)] alt: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(default = AvatarSize::Md)] size: AvatarSize,
    #[prop(optional)] status: Option<AvatarStatus>,
    #[prop(default = AvatarShape::Circle)] shape: AvatarShape,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    avatar_view(
        AvatarData {
            src,
            alt,
            name,
            status,
            shape,
        },
        size,
        layout_class,
    )
}

#[component]
/// Overlapping avatars with a `+N` counter for the ones past `max`.
pub fn AvatarStack(
    avatars: Vec<AvatarData>,
    #[prop(default = 4)] max: usize,
    #[prop(default = AvatarSize::Md)] size: AvatarSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let (visible, remaining) = stack_overflow(avatars.len(), max);

    view! {
        <div
            class=merge_layout_class("ui-avatar-stack", layout_class)
            data-ui-primitive="true"
            data-ui-kind="avatar-stack"
        >
            {(remaining > 0).then(|| view! {
                <div data-ui-slot="stack-count" data-ui-size=size.token()>
                    {format!("+{remaining}")}
                </div>
            })}
            {avatars
                .into_iter()
                .take(visible)
                .rev()
                .map(|avatar| avatar_view(avatar, size, Some("ui-avatar-stack-item")))
                .collect_view()}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// File and folder card arrangement.
pub enum CardLayout {
    /// Tile with a large thumbnail.
    Grid,
    /// Compact row.
    List,
}

impl CardLayout {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

fn file_meta_parts(
    file_type: Option<&str>,
    size: Option<&str>,
    modified_at: Option<&str>,
    layout: CardLayout,
) -> Vec<String> {
    let type_label = file_type
        .filter(|_| layout == CardLayout::List)
        .map(str::to_uppercase);
    type_label
        .into_iter()
        .chain(size.map(str::to_string))
        .chain(modified_at.map(str::to_string))
        .collect()
}

fn meta_line(parts: Vec<String>) -> impl IntoView {
    parts
        .into_iter()
        .enumerate()
        .map(|(index, part)| {
            view! {
                {(index > 0).then(|| view! { <span data-ui-slot="meta-dot" aria-hidden="true"></span> })}
                <span>{part}</span>
            }
        })
        .collect_view()
}

fn menu_button(on_menu_click: Callback<MouseEvent>) -> impl IntoView {
    view! {
        <button
            type="button"
            data-ui-slot="menu"
            aria-label="More options"
            on:click=move |ev| {
                ev.stop_propagation();
                on_menu_click.call(ev);
            }
        >
            <Icon icon=IconName::More size=IconSize::Sm />
        </button>
    }
}

#[component]
/// Selectable file tile or row with thumbnail, type badge, and metadata.
pub fn FileCard(
    #[prop(into)] name: String,
    #[prop(optional, into)] thumbnail: Option<String>,
    #[prop(optional, into)] file_type: Option<String>,
    #[prop(optional, into)] modified_at: Option<String>,
    #[prop(optional, into)] file_size: Option<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(default = CardLayout::Grid)] layout: CardLayout,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional)] on_double_click: Option<Callback<()>>,
    #[prop(optional)] on_menu_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let is_image = thumbnail.is_some() || file_type.as_deref().is_some_and(file_is_image);
    let meta = file_meta_parts(
        file_type.as_deref(),
        file_size.as_deref(),
        modified_at.as_deref(),
        layout,
    );
    let grid_badge = file_type
        .filter(|_| layout == CardLayout::Grid)
        .map(|file_type| file_type.to_uppercase());
    let placeholder_icon = if is_image { IconName::Image } else { IconName::File };

    view! {
        <div
            class=merge_layout_class("ui-file-card", layout_class)
            role="button"
            tabindex="0"
            aria-pressed=move || selected.get().to_string()
            data-ui-primitive="true"
            data-ui-kind="file-card"
            data-ui-size=size.token()
            data-ui-layout=layout.token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |_| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(());
                }
            }
            on:dblclick=move |_| {
                if let Some(on_double_click) = on_double_click.as_ref() {
                    on_double_click.call(());
                }
            }
        >
            <div data-ui-slot="thumbnail">
                {match thumbnail {
                    Some(src) => view! { <img data-ui-slot="thumbnail-image" src=src alt=name.clone() /> }.into_view(),
                    None => view! {
                        <div data-ui-slot="thumbnail-placeholder"><Icon icon=placeholder_icon size=IconSize::Lg /></div>
                    }
                    .into_view(),
                }}
                {grid_badge.map(|badge| view! { <span data-ui-slot="type-badge">{badge}</span> })}
                {on_menu_click.filter(|_| layout == CardLayout::Grid).map(menu_button)}
            </div>
            <div data-ui-slot="info">
                <span data-ui-slot="name" title=name.clone()>{name.clone()}</span>
                <div data-ui-slot="meta">{meta_line(meta)}</div>
            </div>
            {on_menu_click.filter(|_| layout == CardLayout::List).map(menu_button)}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Folder glyph tints.
pub enum FolderColor {
    /// Neutral.
    Default,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Purple.
    Purple,
    /// Orange.
    Orange,
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Pink.
    Pink,
}

impl Default for FolderColor {
    fn default() -> Self {
        Self::Default
    }
}

impl FolderColor {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
        }
    }
}

#[component]
/// Selectable folder row or tile with a tinted glyph and item count.
pub fn FolderCard(
    #[prop(into)] name: String,
    #[prop(optional)] item_count: Option<usize>,
    #[prop(optional, into)] meta: Option<String>,
    #[prop(default = FolderColor::Default)] color: FolderColor,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(default = CardLayout::List)] layout: CardLayout,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional)] on_double_click: Option<Callback<()>>,
    #[prop(optional)] on_menu_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let meta_text = folder_meta_text(meta.as_deref(), item_count);

    view! {
        <div
            class=merge_layout_class("ui-folder-card", layout_class)
            role="button"
            tabindex="0"
            aria-pressed=move || selected.get().to_string()
            data-ui-primitive="true"
            data-ui-kind="folder-card"
            data-ui-size=size.token()
            data-ui-layout=layout.token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |_| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(());
                }
            }
            on:dblclick=move |_| {
                if let Some(on_double_click) = on_double_click.as_ref() {
                    on_double_click.call(());
                }
            }
        >
            <div data-ui-slot="icon" data-ui-color=color.token()>
                <Icon icon=IconName::Folder size=IconSize::Lg />
            </div>
            <div data-ui-slot="info">
                <span data-ui-slot="name" title=name.clone()>{name}</span>
                {meta_text.map(|text| view! { <span data-ui-slot="meta">{text}</span> })}
            </div>
            {on_menu_click.map(menu_button)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn initials_use_first_and_last_word() {
        assert_eq!(avatar_initials("Jane Smith").as_deref(), Some("JS"));
        assert_eq!(avatar_initials("  mary   ann  lee ").as_deref(), Some("ML"));
    }

    #[test]
    fn single_word_initials_take_two_characters() {
        assert_eq!(avatar_initials("alice").as_deref(), Some("AL"));
        assert_eq!(avatar_initials("Q").as_deref(), Some("Q"));
        assert_eq!(avatar_initials("   "), None);
    }

    #[test]
    fn avatar_falls_back_when_image_is_missing_or_fails() {
        assert_eq!(avatar_content(true, false, Some("JS")), AvatarContent::Image);
        assert_eq!(
            avatar_content(false, false, Some("JS")),
            AvatarContent::Initials("JS".to_string())
        );
        assert_eq!(
            avatar_content(true, true, Some("JS")),
            AvatarContent::Initials("JS".to_string())
        );
        assert_eq!(avatar_content(true, true, None), AvatarContent::Icon);
        assert_eq!(avatar_content(false, false, None), AvatarContent::Icon);
    }

    #[test]
    fn image_error_switches_rendered_avatar_to_initials() {
        let runtime = create_runtime();
        let failed = create_rw_signal(false);
        let content = create_memo(move |_| avatar_content(true, failed.get(), Some("JS")));
        assert_eq!(content.get_untracked(), AvatarContent::Image);

        failed.set(true);
        assert_eq!(content.get_untracked(), AvatarContent::Initials("JS".to_string()));
        runtime.dispose();
    }

    #[test]
    fn stack_overflow_counts_hidden_avatars() {
        assert_eq!(stack_overflow(6, 4), (4, 2));
        assert_eq!(stack_overflow(3, 4), (3, 0));
        assert_eq!(stack_overflow(0, 4), (0, 0));
    }

    #[test]
    fn image_extensions_are_case_insensitive() {
        assert!(file_is_image("PNG"));
        assert!(file_is_image("webp"));
        assert!(!file_is_image("pdf"));
        assert!(!file_is_image("png2"));
    }

    #[test]
    fn folder_meta_prefers_explicit_text() {
        assert_eq!(folder_meta_text(Some("Shared"), Some(3)).as_deref(), Some("Shared"));
        assert_eq!(folder_meta_text(None, Some(1)).as_deref(), Some("1 item"));
        assert_eq!(folder_meta_text(None, Some(0)).as_deref(), Some("0 items"));
        assert_eq!(folder_meta_text(Some(""), None), None);
    }

    #[test]
    fn list_layout_leads_meta_with_type() {
        assert_eq!(
            file_meta_parts(Some("pdf"), Some("2.4 MB"), Some("Yesterday"), CardLayout::List),
            vec!["PDF", "2.4 MB", "Yesterday"]
        );
        assert_eq!(
            file_meta_parts(Some("pdf"), None, Some("Yesterday"), CardLayout::Grid),
            vec!["Yesterday"]
        );
    }
}
