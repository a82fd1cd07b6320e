use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;

use super::*;

/// Clamps a progress value to `0..=100`. `NaN` reads as no progress.
pub fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// CSS length for placeholder dimensions. Plain numbers render as pixels.
pub enum CssLength {
    /// Pixel count.
    Px(u32),
    /// Any CSS length expression, passed through as written.
    Raw(String),
}

impl CssLength {
    /// CSS text for a `style` declaration.
    pub fn css(&self) -> String {
        match self {
            Self::Px(px) => format!("{px}px"),
            Self::Raw(raw) => raw.clone(),
        }
    }
}

impl From<u32> for CssLength {
    fn from(px: u32) -> Self {
        Self::Px(px)
    }
}

impl From<&str> for CssLength {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for CssLength {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

#[component]
/// Compact status label.
pub fn Badge(
    #[prop(default = Tone::Default)] variant: Tone,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] outlined: bool,
    #[prop(optional)] dot: bool,
    #[prop(optional)] removable: bool,
    #[prop(optional)] on_remove: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-outlined=bool_token(outlined)
        >
            {dot.then(|| view! { <span data-ui-slot="dot" aria-hidden="true"></span> })}
            {children()}
            {removable.then(|| view! {
                <button
                    type="button"
                    data-ui-slot="remove"
                    aria-label="Remove"
                    on:click=move |_| {
                        if let Some(on_remove) = on_remove.as_ref() {
                            on_remove.call(());
                        }
                    }
                >
                    <Icon icon=IconName::Close size=IconSize::Xs />
                </button>
            })}
        </span>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Spinner and loading-dot sizes.
pub enum SpinnerSize {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Default.
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

impl Default for SpinnerSize {
    fn default() -> Self {
        Self::Md
    }
}

impl SpinnerSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Spinner stroke color.
pub enum SpinnerColor {
    /// Accent color.
    Primary,
    /// White, for filled surfaces.
    White,
    /// Inherits `currentColor`.
    Current,
}

impl Default for SpinnerColor {
    fn default() -> Self {
        Self::Primary
    }
}

impl SpinnerColor {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::White => "white",
            Self::Current => "current",
        }
    }
}

#[component]
/// Rotating ring announced as a status region.
pub fn Spinner(
    #[prop(default = SpinnerSize::Md)] size: SpinnerSize,
    #[prop(default = SpinnerColor::Primary)] color: SpinnerColor,
    #[prop(default = "Loading")] label: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-spinner", layout_class)
            role="status"
            aria-label=label
            data-ui-primitive="true"
            data-ui-kind="spinner"
            data-ui-size=size.token()
            data-ui-color=color.token()
        ></div>
    }
}

#[component]
/// Three pulsing dots for inline loading.
pub fn LoadingDots(
    #[prop(default = SpinnerSize::Md)] size: SpinnerSize,
    #[prop(default = "Loading")] label: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-loading-dots", layout_class)
            role="status"
            aria-label=label
            data-ui-primitive="true"
            data-ui-kind="loading-dots"
            data-ui-size=size.token()
        >
            <span data-ui-slot="dot"></span>
            <span data-ui-slot="dot"></span>
            <span data-ui-slot="dot"></span>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Progress bar fill color.
pub enum ProgressColor {
    /// Accent color.
    Primary,
    /// Positive.
    Success,
    /// Attention.
    Warning,
    /// Failure.
    Error,
}

impl Default for ProgressColor {
    fn default() -> Self {
        Self::Primary
    }
}

impl ProgressColor {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[component]
/// Linear progress bar. An indeterminate bar drops `aria-valuenow` and the value label.
pub fn Progress(
    #[prop(optional, into)] value: MaybeSignal<f64>,
    #[prop(optional, into)] indeterminate: MaybeSignal<bool>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(default = ProgressColor::Primary)] color: ProgressColor,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] show_value: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let clamped = Signal::derive(move || clamp_progress(value.get()));
    let has_header = label.is_some() || show_value;

    view! {
        <div
            class=merge_layout_class("ui-progress", layout_class)
            data-ui-primitive="true"
            data-ui-kind="progress"
            data-ui-size=size.token()
            data-ui-color=color.token()
            data-ui-state=move || if indeterminate.get() { "indeterminate" } else { "determinate" }
        >
            {has_header.then(|| view! {
                <div data-ui-slot="label">
                    {label.map(|text| view! { <span>{text}</span> })}
                    {move || (show_value && !indeterminate.get())
                        .then(|| view! { <span data-ui-slot="value">{format!("{}%", clamped.get())}</span> })}
                </div>
            })}
            <div
                data-ui-slot="track"
                role="progressbar"
                aria-valuenow=move || (!indeterminate.get()).then(|| clamped.get())
                aria-valuemin="0"
                aria-valuemax="100"
            >
                <div
                    data-ui-slot="bar"
                    style:width=move || (!indeterminate.get()).then(|| format!("{}%", clamped.get()))
                ></div>
            </div>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct RingGeometry {
    radius: f64,
    circumference: f64,
    offset: f64,
}

impl RingGeometry {
    fn new(size: u32, stroke_width: u32, value: f64) -> Self {
        let radius = (f64::from(size) - f64::from(stroke_width)).max(0.0) / 2.0;
        let circumference = radius * 2.0 * std::f64::consts::PI;
        let offset = circumference - clamp_progress(value) / 100.0 * circumference;
        Self {
            radius,
            circumference,
            offset,
        }
    }
}

#[component]
/// Circular progress ring drawn with a dash offset.
pub fn ProgressCircular(
    #[prop(optional, into)] value: MaybeSignal<f64>,
    #[prop(optional, into)] indeterminate: MaybeSignal<bool>,
    #[prop(default = 48)] size: u32,
    #[prop(default = 4)] stroke_width: u32,
    #[prop(default = ProgressColor::Primary)] color: ProgressColor,
    #[prop(optional)] show_value: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let geometry = Signal::derive(move || RingGeometry::new(size, stroke_width, value.get()));
    let center = f64::from(size) / 2.0;

    view! {
        <div
            class=merge_layout_class("ui-progress-circular", layout_class)
            role="progressbar"
            aria-valuenow=move || (!indeterminate.get()).then(|| clamp_progress(value.get()))
            aria-valuemin="0"
            aria-valuemax="100"
            data-ui-primitive="true"
            data-ui-kind="progress-circular"
            data-ui-color=color.token()
            data-ui-state=move || if indeterminate.get() { "indeterminate" } else { "determinate" }
            style:width=format!("{size}px")
            style:height=format!("{size}px")
        >
            <svg width=size height=size viewBox=format!("0 0 {size} {size}") aria-hidden="true">
                <circle
                    data-ui-slot="track"
                    cx=center
                    cy=center
                    r=move || geometry.get().radius
                    fill="none"
                    stroke-width=stroke_width
                ></circle>
                <circle
                    data-ui-slot="bar"
                    cx=center
                    cy=center
                    r=move || geometry.get().radius
                    fill="none"
                    stroke-width=stroke_width
                    stroke-linecap="round"
                    stroke-dasharray=move || geometry.get().circumference
                    stroke-dashoffset=move || (!indeterminate.get()).then(|| geometry.get().offset)
                ></circle>
            </svg>
            {move || (show_value && !indeterminate.get()).then(|| view! {
                <div data-ui-slot="value" style:font-size=format!("{}px", f64::from(size) * 0.25)>
                    {format!("{}%", clamp_progress(value.get()))}
                </div>
            })}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Skeleton placeholder shape.
pub enum SkeletonVariant {
    /// Text line.
    Text,
    /// Circle.
    Circle,
    /// Rectangle.
    Rectangle,
}

impl Default for SkeletonVariant {
    fn default() -> Self {
        Self::Text
    }
}

impl SkeletonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
        }
    }
}

#[component]
/// Shimmering loading placeholder.
pub fn Skeleton(
    #[prop(default = SkeletonVariant::Text)] variant: SkeletonVariant,
    #[prop(optional, into)] width: Option<CssLength>,
    #[prop(optional, into)] height: Option<CssLength>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-skeleton", layout_class)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="skeleton"
            data-ui-variant=variant.token()
            style:width=width.map(|width| width.css())
            style:height=height.map(|height| height.css())
        ></div>
    }
}

#[component]
/// Stack of text-line skeletons; the last line is shortened to 60%.
pub fn SkeletonText(
    #[prop(default = 3)] lines: usize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class=merge_layout_class("ui-skeleton-text", layout_class) data-ui-kind="skeleton-text">
            {(0..lines)
                .map(|line| {
                    let width = if line + 1 == lines { "60%" } else { "100%" };
                    view! { <Skeleton width=width height=16u32 /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
/// Circular avatar skeleton, optionally followed by two text lines.
pub fn SkeletonAvatar(
    #[prop(default = 40)] size: u32,
    #[prop(optional)] with_text: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    if !with_text {
        return view! {
            <Skeleton variant=SkeletonVariant::Circle width=size height=size layout_class=layout_class.unwrap_or_default() />
        }
        .into_view();
    }

    view! {
        <div class=merge_layout_class("ui-skeleton-avatar", layout_class) data-ui-kind="skeleton-avatar">
            <Skeleton variant=SkeletonVariant::Circle width=size height=size />
            <div data-ui-slot="content">
                <Skeleton width=120u32 height=14u32 />
                <Skeleton width=80u32 height=12u32 />
            </div>
        </div>
    }
    .into_view()
}

#[component]
/// Card-shaped skeleton with an optional image block.
pub fn SkeletonCard(
    #[prop(default = true)] with_image: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class=merge_layout_class("ui-skeleton-card", layout_class) data-ui-kind="skeleton-card">
            {with_image.then(|| view! {
                <Skeleton variant=SkeletonVariant::Rectangle width="100%" height=160u32 />
            })}
            <Skeleton width="70%" height=20u32 />
            <SkeletonText lines=2 />
        </div>
    }
}

#[component]
/// List row skeleton with an optional leading avatar.
pub fn SkeletonListItem(
    #[prop(default = true)] with_avatar: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class=merge_layout_class("ui-skeleton-list-item", layout_class) data-ui-kind="skeleton-list-item">
            {with_avatar.then(|| view! {
                <Skeleton variant=SkeletonVariant::Circle width=40u32 height=40u32 />
            })}
            <div data-ui-slot="content">
                <Skeleton width="60%" height=14u32 />
                <Skeleton width="40%" height=12u32 />
            </div>
        </div>
    }
}

#[component]
/// Placeholder for views with no data yet.
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] actions: Option<ViewFn>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
            data-ui-size=size.token()
        >
            {icon.map(|icon| view! { <div data-ui-slot="icon"><Icon icon size=IconSize::Lg /></div> })}
            <h3 data-ui-slot="title">{title}</h3>
            {description.map(|text| view! { <p data-ui-slot="description">{text}</p> })}
            {actions.map(|actions| view! { <div data-ui-slot="actions">{actions.run()}</div> })}
        </div>
    }
}

#[component]
/// Hover/focus hint around a trigger. A non-zero `delay_ms` postpones showing; leaving or
/// blurring first cancels the pending show.
pub fn Tooltip(
    #[prop(into)] content: MaybeSignal<String>,
    #[prop(default = Placement::Top)] position: Placement,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let visible = create_rw_signal(false);
    let pending = store_value(None::<TimeoutHandle>);

    let cancel_pending = move || {
        pending.update_value(|pending| {
            if let Some(handle) = pending.take() {
                handle.clear();
            }
        });
    };

    let show = move || {
        if delay_ms == 0 {
            visible.set(true);
            return;
        }
        cancel_pending();
        match set_timeout_with_handle(
            move || visible.set(true),
            Duration::from_millis(u64::from(delay_ms)),
        ) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("tooltip delay timer failed: {err:?}");
                visible.set(true);
            }
        }
    };

    let hide = move || {
        cancel_pending();
        visible.set(false);
    };

    on_cleanup(cancel_pending);

    view! {
        <div
            class="ui-tooltip-wrapper"
            data-ui-kind="tooltip-trigger"
            on:mouseenter=move |_| show()
            on:mouseleave=move |_| hide()
            on:focusin=move |_| show()
            on:focusout=move |_| hide()
        >
            {children()}
            <div
                class=merge_layout_class("ui-tooltip", layout_class)
                role="tooltip"
                data-ui-primitive="true"
                data-ui-kind="tooltip"
                data-ui-placement=position.token()
                data-ui-multiline=bool_token(multiline)
                data-ui-state=move || if visible.get() { "visible" } else { "hidden" }
            >
                {move || content.get()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn progress_is_clamped_to_percent_range() {
        assert_eq!(clamp_progress(-5.0), 0.0);
        assert_eq!(clamp_progress(42.5), 42.5);
        assert_eq!(clamp_progress(180.0), 100.0);
        assert_eq!(clamp_progress(f64::NAN), 0.0);
    }

    #[test]
    fn numeric_lengths_render_as_pixels() {
        assert_eq!(CssLength::from(40).css(), "40px");
        assert_eq!(CssLength::from("60%").css(), "60%");
    }

    #[test]
    fn ring_offset_tracks_value() {
        let empty = RingGeometry::new(48, 4, 0.0);
        assert_eq!(empty.radius, 22.0);
        assert_eq!(empty.offset, empty.circumference);

        let full = RingGeometry::new(48, 4, 100.0);
        assert_eq!(full.offset, 0.0);

        let half = RingGeometry::new(48, 4, 50.0);
        assert!((half.offset - half.circumference / 2.0).abs() < 1e-9);
    }

    #[test]
    fn percent_label_drops_trailing_zero() {
        assert_eq!(format!("{}%", clamp_progress(65.0)), "65%");
    }
}
