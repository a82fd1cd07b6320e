//! Centralized inline-SVG icon set.
//!
//! Every glyph is drawn on a 24x24 stroke grid so icons inherit `currentColor` and scale with the
//! `data-ui-size` token.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icons available to primitives and apps.
pub enum IconName {
    /// Downward chevron (select, collapsible sections).
    ChevronDown,
    /// Rightward chevron (breadcrumb separator).
    ChevronRight,
    /// Cross used by close buttons.
    Close,
    /// Check mark.
    Check,
    /// Horizontal bar (indeterminate checkbox).
    Minus,
    /// Plus sign.
    Plus,
    /// Right arrow.
    ArrowRight,
    /// Person silhouette (avatar fallback).
    User,
    /// Circled check.
    Success,
    /// Circled cross.
    Error,
    /// Warning triangle.
    Warning,
    /// Circled "i".
    Info,
    /// Document.
    File,
    /// Picture.
    Image,
    /// Filled folder.
    Folder,
    /// Vertical ellipsis.
    More,
    /// Three-line menu.
    Menu,
    /// House.
    Home,
    /// Envelope.
    Mail,
    /// Padlock.
    Lock,
    /// Pencil on square.
    Edit,
    /// Trash can.
    Trash,
    /// Share graph.
    Share,
    /// Eye.
    Eye,
    /// Arrow cursor.
    Cursor,
    /// Two stacked sheets.
    Copy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 16px.
    Sm,
    /// 20px.
    Md,
    /// 24px.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn pixels(self) -> u32 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }
}

enum Shape {
    Path(&'static str),
    Circle(f32, f32, f32),
    Rect {
        x: f32,
        y: f32,
        size: f32,
        radius: f32,
    },
    Polyline(&'static str),
}

use Shape::{Circle, Path, Polyline, Rect};

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::ChevronDown => "chevron-down",
            Self::ChevronRight => "chevron-right",
            Self::Close => "close",
            Self::Check => "check",
            Self::Minus => "minus",
            Self::Plus => "plus",
            Self::ArrowRight => "arrow-right",
            Self::User => "user",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::File => "file",
            Self::Image => "image",
            Self::Folder => "folder",
            Self::More => "more",
            Self::Menu => "menu",
            Self::Home => "home",
            Self::Mail => "mail",
            Self::Lock => "lock",
            Self::Edit => "edit",
            Self::Trash => "trash",
            Self::Share => "share",
            Self::Eye => "eye",
            Self::Cursor => "cursor",
            Self::Copy => "copy",
        }
    }

    fn filled(self) -> bool {
        matches!(self, Self::Folder)
    }

    fn shapes(self) -> &'static [Shape] {
        match self {
            Self::ChevronDown => &[Path("M6 9l6 6 6-6")],
            Self::ChevronRight => &[Path("M9 18l6-6-6-6")],
            Self::Close => &[Path("M18 6L6 18M6 6l12 12")],
            Self::Check => &[Path("M20 6L9 17l-5-5")],
            Self::Minus => &[Path("M5 12h14")],
            Self::Plus => &[Path("M12 5v14M5 12h14")],
            Self::ArrowRight => &[Path("M5 12h14M12 5l7 7-7 7")],
            Self::User => &[
                Path("M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"),
                Circle(12.0, 7.0, 4.0),
            ],
            Self::Success => &[
                Path("M22 11.08V12a10 10 0 1 1-5.93-9.14"),
                Path("M22 4L12 14.01l-3-3"),
            ],
            Self::Error => &[Circle(12.0, 12.0, 10.0), Path("M15 9l-6 6M9 9l6 6")],
            Self::Warning => &[
                Path("M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"),
                Path("M12 9v4M12 17h.01"),
            ],
            Self::Info => &[Circle(12.0, 12.0, 10.0), Path("M12 16v-4M12 8h.01")],
            Self::File => &[
                Path("M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"),
                Path("M14 2v6h6M16 13H8M16 17H8M10 9H8"),
            ],
            Self::Image => &[
                Rect {
                    x: 3.0,
                    y: 3.0,
                    size: 18.0,
                    radius: 2.0,
                },
                Circle(8.5, 8.5, 1.5),
                Path("M21 15l-5-5L5 21"),
            ],
            Self::Folder => &[Path(
                "M3 6a2 2 0 012-2h4.586a1 1 0 01.707.293l1.414 1.414a1 1 0 00.707.293H19a2 2 0 012 2v10a2 2 0 01-2 2H5a2 2 0 01-2-2V6z",
            )],
            Self::More => &[
                Circle(12.0, 12.0, 1.0),
                Circle(12.0, 5.0, 1.0),
                Circle(12.0, 19.0, 1.0),
            ],
            Self::Menu => &[Path("M4 6h16M4 12h16M4 18h16")],
            Self::Home => &[
                Path("M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"),
                Polyline("9 22 9 12 15 12 15 22"),
            ],
            Self::Mail => &[
                Path("M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"),
                Path("m22 6-10 7L2 6"),
            ],
            Self::Lock => &[
                Rect {
                    x: 3.0,
                    y: 11.0,
                    size: 18.0,
                    radius: 2.0,
                },
                Path("M7 11V7a5 5 0 0 1 10 0v4"),
            ],
            Self::Edit => &[
                Path("M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"),
                Path("M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"),
            ],
            Self::Trash => &[Path(
                "M3 6h18M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
            )],
            Self::Share => &[
                Circle(18.0, 5.0, 3.0),
                Circle(6.0, 12.0, 3.0),
                Circle(18.0, 19.0, 3.0),
                Path("M8.59 13.51l6.83 3.98M15.41 6.51l-6.82 3.98"),
            ],
            Self::Eye => &[
                Path("M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"),
                Circle(12.0, 12.0, 3.0),
            ],
            Self::Cursor => &[Path("M3 3l7.07 16.97 2.51-7.39 7.39-2.51L3 3z")],
            Self::Copy => &[
                Rect {
                    x: 9.0,
                    y: 9.0,
                    size: 13.0,
                    radius: 2.0,
                },
                Path("M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"),
            ],
        }
    }
}

fn render_shape(shape: &Shape) -> View {
    match *shape {
        Path(d) => view! { <path d=d></path> }.into_view(),
        Circle(cx, cy, r) => view! { <circle cx=cx cy=cy r=r></circle> }.into_view(),
        Rect {
            x,
            y,
            size,
            radius,
        } => view! { <rect x=x y=y width=size height=size rx=radius ry=radius></rect> }.into_view(),
        Polyline(points) => view! { <polyline points=points></polyline> }.into_view(),
    }
}

#[component]
/// Inline SVG icon, hidden from assistive technology.
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
) -> impl IntoView {
    let pixels = size.pixels();
    let (fill, stroke) = if icon.filled() {
        ("currentColor", "none")
    } else {
        ("none", "currentColor")
    };

    view! {
        <svg
            class="ui-icon"
            width=pixels
            height=pixels
            viewBox="0 0 24 24"
            fill=fill
            stroke=stroke
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.shapes().iter().map(render_shape).collect_view()}
        </svg>
    }
}
