//! GenDS design system for Leptos applications.
//!
//! The crate owns the design token catalog, the dark/light theme context, a centralized icon
//! API, and the primitive components. Every primitive renders the stable `data-ui-*` DOM
//! contract (`data-ui-primitive`, `data-ui-kind`, `data-ui-variant`, `data-ui-size`,
//! `data-ui-state`, ...) that the GenDS stylesheet keys off, and reads colors and sizes only
//! through `--sg-*` custom properties.
//!
//! Apps should wrap their tree in [`ThemeProvider`] and compose these primitives instead of
//! emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod color;
mod controlled;
pub mod drag;
mod icon;
pub mod overlay;
mod primitives;
pub mod theme;
pub mod tokens;

pub use controlled::{resolve, Controllable};
pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    avatar_initials, char_count_status, clamp_progress, file_is_image, folder_meta_text,
    stack_overflow, truncate_crumbs, use_tabs_context, AlertDialog, AlertVariant, Avatar,
    AvatarData, AvatarShape, AvatarSize, AvatarStack, AvatarStatus, Badge, Breadcrumb,
    BreadcrumbItem, Button, ButtonVariant, Card, CardBody, CardFooter, CardHeader, CardImage,
    CardLayout, CardVariant, CharCountStatus, Checkbox, CollapsibleSection, ColorPicker,
    ControlSize, Crumb, CssLength, Divider, Dropdown, DropdownItem, DropdownLabel,
    DropdownPosition, DropdownSeparator, EmptyState, FieldState, FileCard, FolderCard,
    FolderColor, FooterAlign, IconButton, IconButtonShape, IconButtonSize, IconButtonVariant,
    Input, LoadingDots, Modal, ModalBody, ModalFooter, ModalSize, Orientation, Panel, PanelBody,
    PanelFooter, PanelHeader, PanelPosition, PanelSection, Placement, Popover, PopoverFooter,
    Progress, ProgressCircular, ProgressColor, Radio, RadioGroup, Select, SelectOption, Sidebar,
    SidebarContent, SidebarDivider, SidebarFooter, SidebarHeader, SidebarNavItem,
    SidebarPosition, SidebarSection, Skeleton, SkeletonAvatar, SkeletonCard, SkeletonListItem,
    SkeletonText, SkeletonVariant, Slider, SliderMark, SliderRange, Spacing, Spinner,
    SpinnerColor, SpinnerSize, Tab, TabList, TabPanel, Tabs, TabsContext, TabsVariant, TextArea,
    Toast, ToastAction, ToastContainer, ToastData, ToastPhase, ToastPosition, ToastQueue, Toggle,
    Tone, ToolBar, ToolBarVariant, ToolButton, ToolDivider, ToolGroup, Tooltip,
    DEFAULT_TOAST_DURATION_MS, TOAST_EXIT_MS,
};
pub use theme::{use_theme, Theme, ThemeConfig, ThemeContext, ThemeProvider, ThemeStore};

/// Convenience imports for application crates consuming the design system.
pub mod prelude {
    pub use crate::{
        use_tabs_context, use_theme, AlertDialog, AlertVariant, Avatar, AvatarData, AvatarShape,
        AvatarSize, AvatarStack, AvatarStatus, Badge, Breadcrumb, BreadcrumbItem, Button,
        ButtonVariant, Card, CardBody, CardFooter, CardHeader, CardImage, CardLayout,
        CardVariant, Checkbox, CollapsibleSection, ColorPicker, ControlSize, CssLength, Divider,
        Dropdown, DropdownItem, DropdownLabel, DropdownPosition, DropdownSeparator, EmptyState,
        FieldState, FileCard, FolderCard, FolderColor, FooterAlign, Icon, IconButton,
        IconButtonShape, IconButtonSize, IconButtonVariant, IconName, IconSize, Input,
        LoadingDots, Modal, ModalBody, ModalFooter, ModalSize, Orientation, Panel, PanelBody,
        PanelFooter, PanelHeader, PanelPosition, PanelSection, Placement, Popover,
        PopoverFooter, Progress, ProgressCircular, ProgressColor, Radio, RadioGroup, Select,
        SelectOption, Sidebar, SidebarContent, SidebarDivider, SidebarFooter, SidebarHeader,
        SidebarNavItem, SidebarPosition, SidebarSection, Skeleton, SkeletonAvatar, SkeletonCard,
        SkeletonListItem, SkeletonText, SkeletonVariant, Slider, SliderMark, Spacing, Spinner,
        SpinnerColor, SpinnerSize, Tab, TabList, TabPanel, Tabs, TabsVariant, TextArea, Theme,
        ThemeProvider, Toast, ToastContainer, ToastData, ToastPosition, ToastQueue, Toggle, Tone,
        ToolBar, ToolBarVariant, ToolButton, ToolDivider, ToolGroup, Tooltip,
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::prelude::*;

    #[test]
    fn prelude_carries_component_option_enums() {
        assert_eq!(TabsVariant::Pills.token(), "pills");
        assert_eq!(TabsVariant::default().token(), "default");
        assert_eq!(ToolBarVariant::Floating.token(), "floating");
        assert_eq!(DropdownPosition::BottomEnd.token(), "bottom-end");
        assert_eq!(AlertVariant::default().token(), "danger");
    }
}
