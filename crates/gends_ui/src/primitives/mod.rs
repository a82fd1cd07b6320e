//! GenDS primitives grouped by family, plus the token enums they share.
//!
//! Each option enum maps to its `data-ui-*` attribute value through a `token()` match.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::controlled::Controllable;
use crate::overlay::{use_dismissible, DismissOptions, DismissReason};
use crate::{Icon, IconName, IconSize};

mod buttons;
mod containers;
mod data_display;
mod feedback;
mod form;
mod navigation;
mod overlays;
mod pickers;
mod toast;

pub use buttons::{Button, IconButton, IconButtonShape, IconButtonSize, IconButtonVariant};
pub use containers::{
    Card, CardBody, CardFooter, CardHeader, CardImage, CardVariant, CollapsibleSection, Divider,
    Modal, ModalBody, ModalFooter, ModalSize, Panel, PanelBody, PanelFooter, PanelHeader,
    PanelPosition, PanelSection,
};
pub use data_display::{
    avatar_initials, file_is_image, folder_meta_text, stack_overflow, Avatar, AvatarData,
    AvatarShape, AvatarSize, AvatarStack, AvatarStatus, CardLayout, FileCard, FolderCard,
    FolderColor,
};
pub use feedback::{
    clamp_progress, Badge, CssLength, EmptyState, LoadingDots, Progress, ProgressCircular,
    ProgressColor, Skeleton, SkeletonAvatar, SkeletonCard, SkeletonListItem, SkeletonText,
    SkeletonVariant, Spinner, SpinnerColor, SpinnerSize, Tooltip,
};
pub use form::{
    char_count_status, CharCountStatus, Checkbox, Input, Radio, RadioGroup, TextArea, Toggle,
};
pub use navigation::{
    truncate_crumbs, use_tabs_context, Breadcrumb, BreadcrumbItem, Crumb, Sidebar,
    SidebarContent, SidebarDivider, SidebarFooter, SidebarHeader, SidebarNavItem, SidebarPosition,
    SidebarSection, Tab, TabList, TabPanel, Tabs, TabsContext, TabsVariant, ToolBar,
    ToolBarVariant, ToolButton, ToolDivider, ToolGroup,
};
pub use overlays::{
    AlertDialog, AlertVariant, Dropdown, DropdownItem, DropdownLabel, DropdownPosition,
    DropdownSeparator, Popover, PopoverFooter,
};
pub use pickers::{ColorPicker, Select, SelectOption, Slider, SliderMark, SliderRange};
pub use toast::{
    Toast, ToastAction, ToastContainer, ToastData, ToastPhase, ToastPosition, ToastQueue,
    DEFAULT_TOAST_DURATION_MS, TOAST_EXIT_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Filled accent action.
    Primary,
    /// Outlined secondary action.
    Secondary,
    /// Borderless low-emphasis action.
    Ghost,
    /// Destructive action.
    Danger,
    /// Confirming/positive action.
    Success,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared three-step control sizing tokens.
pub enum ControlSize {
    /// Dense control.
    Sm,
    /// Default control.
    Md,
    /// Large control.
    Lg,
}

impl Default for ControlSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ControlSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    pub(crate) fn icon_size(self) -> IconSize {
        match self {
            Self::Sm => IconSize::Xs,
            Self::Md => IconSize::Sm,
            Self::Lg => IconSize::Md,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Validation state of a text field.
pub enum FieldState {
    /// Neutral.
    Default,
    /// Invalid value.
    Error,
    /// Accepted value.
    Success,
    /// Suspicious value.
    Warning,
}

impl Default for FieldState {
    fn default() -> Self {
        Self::Default
    }
}

impl FieldState {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Error => "error",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }

    /// State after accounting for an error message; any message forces [`FieldState::Error`].
    pub fn with_error(self, error_message: Option<&str>) -> Self {
        match error_message {
            Some(message) if !message.is_empty() => Self::Error,
            _ => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic tone shared by badges and toasts.
pub enum Tone {
    /// Neutral.
    Default,
    /// Positive outcome.
    Success,
    /// Failure.
    Error,
    /// Needs attention.
    Warning,
    /// Informational.
    Info,
}

impl Default for Tone {
    fn default() -> Self {
        Self::Default
    }
}

impl Tone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub(crate) fn icon(self) -> Option<IconName> {
        match self {
            Self::Default => None,
            Self::Success => Some(IconName::Success),
            Self::Error => Some(IconName::Error),
            Self::Warning => Some(IconName::Warning),
            Self::Info => Some(IconName::Info),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side of an anchor that a floating surface opens toward.
pub enum Placement {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
}

impl Default for Placement {
    fn default() -> Self {
        Self::Top
    }
}

impl Placement {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Layout direction.
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Horizontal
    }
}

impl Orientation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Padding/spacing scale for cards and dividers.
pub enum Spacing {
    /// No space.
    None,
    /// Small.
    Sm,
    /// Medium.
    Md,
    /// Large.
    Lg,
}

impl Default for Spacing {
    fn default() -> Self {
        Self::Md
    }
}

impl Spacing {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Horizontal alignment of footer actions.
pub enum FooterAlign {
    /// Packed left.
    Left,
    /// Centered.
    Center,
    /// Packed right.
    Right,
    /// Spread to both edges.
    SpaceBetween,
}

impl Default for FooterAlign {
    fn default() -> Self {
        Self::Right
    }
}

impl FooterAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::SpaceBetween => "space-between",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-card", None), "ui-card");
        assert_eq!(merge_layout_class("ui-card", Some("")), "ui-card");
        assert_eq!(
            merge_layout_class("ui-card", Some("gallery-card")),
            "ui-card gallery-card"
        );
    }

    #[test]
    fn error_message_forces_error_state() {
        assert_eq!(
            FieldState::Success.with_error(Some("Required")),
            FieldState::Error
        );
        assert_eq!(FieldState::Warning.with_error(Some("")), FieldState::Warning);
        assert_eq!(FieldState::Default.with_error(None), FieldState::Default);
    }

    #[test]
    fn defaults_match_documented_options() {
        assert_eq!(ButtonVariant::default().token(), "primary");
        assert_eq!(ControlSize::default().token(), "md");
        assert_eq!(FooterAlign::default().token(), "right");
        assert_eq!(Placement::default().token(), "top");
    }
}
