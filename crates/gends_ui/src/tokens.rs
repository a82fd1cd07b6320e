//! Design token catalog.
//!
//! Components never hard-code colors or sizes; they read `--sg-*` custom properties that the
//! stylesheet defines per theme. The catalog lists every token with its dark-theme value so the
//! gallery can render swatches and apps can reference tokens without typos.

/// Prefix shared by every GenDS custom property.
pub const TOKEN_PREFIX: &str = "--sg-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One named design constant.
pub struct DesignToken {
    /// Human-readable label.
    pub name: &'static str,
    /// CSS custom property, including the `--sg-` prefix.
    pub variable: &'static str,
    /// Dark-theme value.
    pub value: &'static str,
}

const fn token(name: &'static str, variable: &'static str, value: &'static str) -> DesignToken {
    DesignToken {
        name,
        variable,
        value,
    }
}

const BACKGROUND_COLORS: &[DesignToken] = &[
    token("Primary", "--sg-color-bg-primary", "#09090b"),
    token("Secondary", "--sg-color-bg-secondary", "#18181b"),
    token("Tertiary", "--sg-color-bg-tertiary", "#27272a"),
    token("Elevated", "--sg-color-bg-elevated", "#3f3f46"),
    token("Inverse", "--sg-color-bg-inverse", "#ffffff"),
    token("Overlay", "--sg-color-bg-overlay", "rgba(0,0,0,0.8)"),
    token("Backdrop", "--sg-color-bg-backdrop", "rgba(0,0,0,0.5)"),
];

const TEXT_COLORS: &[DesignToken] = &[
    token("Primary", "--sg-color-text-primary", "#fafafa"),
    token("Secondary", "--sg-color-text-secondary", "#a1a1aa"),
    token("Muted", "--sg-color-text-muted", "#52525b"),
    token("Inverse", "--sg-color-text-inverse", "#09090b"),
    token("Link", "--sg-color-text-link", "#60a5fa"),
    token("Link Hover", "--sg-color-text-link-hover", "#93c5fd"),
];

const BORDER_COLORS: &[DesignToken] = &[
    token("Default", "--sg-color-border-default", "rgba(255,255,255,0.1)"),
    token("Hover", "--sg-color-border-hover", "rgba(255,255,255,0.2)"),
    token("Focus", "--sg-color-border-focus", "#3b82f6"),
    token("Error", "--sg-color-border-error", "#ef4444"),
    token("Success", "--sg-color-border-success", "#22c55e"),
];

const ACCENT_COLORS: &[DesignToken] = &[
    token("Accent", "--sg-color-accent", "#A53F35"),
    token("Accent Hover", "--sg-color-accent-hover", "#8B3529"),
    token("Accent Active", "--sg-color-accent-active", "#722C21"),
    token("Accent Subtle", "--sg-color-accent-subtle", "rgba(165,63,53,0.1)"),
];

const STATUS_COLORS: &[DesignToken] = &[
    token("Success", "--sg-color-success", "#22c55e"),
    token("Success BG", "--sg-color-success-bg", "rgba(34,197,94,0.1)"),
    token("Success Text", "--sg-color-success-text", "#4ade80"),
    token("Error", "--sg-color-error", "#ef4444"),
    token("Error BG", "--sg-color-error-bg", "rgba(239,68,68,0.1)"),
    token("Error Text", "--sg-color-error-text", "#f87171"),
    token("Warning", "--sg-color-warning", "#eab308"),
    token("Warning BG", "--sg-color-warning-bg", "rgba(234,179,8,0.1)"),
    token("Warning Text", "--sg-color-warning-text", "#facc15"),
    token("Info", "--sg-color-info", "#3b82f6"),
    token("Info BG", "--sg-color-info-bg", "rgba(59,130,246,0.1)"),
    token("Info Text", "--sg-color-info-text", "#60a5fa"),
];

const INTERACTION_COLORS: &[DesignToken] = &[
    token("Hover", "--sg-color-hover", "rgba(255,255,255,0.05)"),
    token("Active", "--sg-color-active", "rgba(255,255,255,0.1)"),
    token("Selected", "--sg-color-selected", "rgba(255,255,255,0.15)"),
    token("Focus Ring", "--sg-color-focus-ring", "rgba(59,130,246,0.5)"),
    token("Disabled BG", "--sg-color-disabled-bg", "rgba(255,255,255,0.05)"),
    token("Disabled Text", "--sg-color-disabled-text", "#52525b"),
];

const SPACING: &[DesignToken] = &[
    token("space-0", "--sg-space-0", "0px"),
    token("space-0-5", "--sg-space-0-5", "2px"),
    token("space-1", "--sg-space-1", "4px"),
    token("space-1-5", "--sg-space-1-5", "6px"),
    token("space-2", "--sg-space-2", "8px"),
    token("space-2-5", "--sg-space-2-5", "10px"),
    token("space-3", "--sg-space-3", "12px"),
    token("space-3-5", "--sg-space-3-5", "14px"),
    token("space-4", "--sg-space-4", "16px"),
    token("space-5", "--sg-space-5", "20px"),
    token("space-6", "--sg-space-6", "24px"),
    token("space-7", "--sg-space-7", "28px"),
    token("space-8", "--sg-space-8", "32px"),
    token("space-9", "--sg-space-9", "36px"),
    token("space-10", "--sg-space-10", "40px"),
    token("space-12", "--sg-space-12", "48px"),
    token("space-14", "--sg-space-14", "56px"),
    token("space-16", "--sg-space-16", "64px"),
    token("space-20", "--sg-space-20", "80px"),
    token("space-24", "--sg-space-24", "96px"),
];

const RADII: &[DesignToken] = &[
    token("None", "--sg-radius-none", "0"),
    token("Small", "--sg-radius-sm", "2px"),
    token("Base", "--sg-radius-base", "4px"),
    token("Medium", "--sg-radius-md", "6px"),
    token("Large", "--sg-radius-lg", "8px"),
    token("XL", "--sg-radius-xl", "12px"),
    token("2XL", "--sg-radius-2xl", "16px"),
    token("3XL", "--sg-radius-3xl", "24px"),
    token("Full", "--sg-radius-full", "9999px"),
];

const SHADOWS: &[DesignToken] = &[
    token("Extra Small", "--sg-shadow-xs", "0 1px 2px rgba(0,0,0,0.05)"),
    token("Small", "--sg-shadow-sm", "0 1px 3px rgba(0,0,0,0.1)"),
    token("Medium", "--sg-shadow-md", "0 4px 6px rgba(0,0,0,0.1)"),
    token("Large", "--sg-shadow-lg", "0 10px 15px rgba(0,0,0,0.1)"),
    token("Extra Large", "--sg-shadow-xl", "0 20px 25px rgba(0,0,0,0.15)"),
    token("2XL", "--sg-shadow-2xl", "0 25px 50px rgba(0,0,0,0.25)"),
    token("Inner", "--sg-shadow-inner", "inset 0 2px 4px rgba(0,0,0,0.06)"),
];

const FONT_SIZES: &[DesignToken] = &[
    token("xs", "--sg-font-size-xs", "12px"),
    token("sm", "--sg-font-size-sm", "14px"),
    token("base", "--sg-font-size-base", "16px"),
    token("lg", "--sg-font-size-lg", "18px"),
    token("xl", "--sg-font-size-xl", "20px"),
    token("2xl", "--sg-font-size-2xl", "24px"),
    token("3xl", "--sg-font-size-3xl", "30px"),
    token("4xl", "--sg-font-size-4xl", "36px"),
];

const FONT_WEIGHTS: &[DesignToken] = &[
    token("normal", "--sg-font-weight-normal", "400"),
    token("medium", "--sg-font-weight-medium", "500"),
    token("semibold", "--sg-font-weight-semibold", "600"),
    token("bold", "--sg-font-weight-bold", "700"),
];

const LINE_HEIGHTS: &[DesignToken] = &[
    token("none", "--sg-line-height-none", "1"),
    token("tight", "--sg-line-height-tight", "1.25"),
    token("snug", "--sg-line-height-snug", "1.375"),
    token("normal", "--sg-line-height-normal", "1.5"),
    token("relaxed", "--sg-line-height-relaxed", "1.625"),
    token("loose", "--sg-line-height-loose", "2"),
];

const DURATIONS: &[DesignToken] = &[
    token("Fast", "--sg-duration-fast", "150ms"),
    token("Base", "--sg-duration-base", "200ms"),
    token("Slow", "--sg-duration-slow", "300ms"),
    token("Slower", "--sg-duration-slower", "500ms"),
];

const EASINGS: &[DesignToken] = &[
    token("Default", "--sg-ease-default", "ease"),
    token("In", "--sg-ease-in", "ease-in"),
    token("Out", "--sg-ease-out", "ease-out"),
    token("In Out", "--sg-ease-in-out", "ease-in-out"),
];

const Z_INDICES: &[DesignToken] = &[
    token("Dropdown", "--sg-z-dropdown", "40"),
    token("Sticky", "--sg-z-sticky", "45"),
    token("Modal", "--sg-z-modal", "50"),
    token("Popover", "--sg-z-popover", "55"),
    token("Tooltip", "--sg-z-tooltip", "60"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Token families, in gallery order.
pub enum TokenGroup {
    /// Surface background colors.
    BackgroundColors,
    /// Foreground text colors.
    TextColors,
    /// Border colors.
    BorderColors,
    /// Brand accent colors.
    AccentColors,
    /// Success/error/warning/info colors.
    StatusColors,
    /// Hover, selection, focus, and disabled colors.
    InteractionColors,
    /// Spacing scale.
    Spacing,
    /// Corner radii.
    Radius,
    /// Box shadows.
    Shadow,
    /// Font sizes.
    FontSize,
    /// Font weights.
    FontWeight,
    /// Line heights.
    LineHeight,
    /// Transition durations.
    Duration,
    /// Transition easing curves.
    Easing,
    /// Stacking layers.
    ZIndex,
}

impl TokenGroup {
    /// Every group, in gallery order.
    pub const ALL: [Self; 15] = [
        Self::BackgroundColors,
        Self::TextColors,
        Self::BorderColors,
        Self::AccentColors,
        Self::StatusColors,
        Self::InteractionColors,
        Self::Spacing,
        Self::Radius,
        Self::Shadow,
        Self::FontSize,
        Self::FontWeight,
        Self::LineHeight,
        Self::Duration,
        Self::Easing,
        Self::ZIndex,
    ];

    /// Display title.
    pub fn title(self) -> &'static str {
        match self {
            Self::BackgroundColors => "Background",
            Self::TextColors => "Text",
            Self::BorderColors => "Border",
            Self::AccentColors => "Accent",
            Self::StatusColors => "Status",
            Self::InteractionColors => "Interactive States",
            Self::Spacing => "Spacing",
            Self::Radius => "Border Radius",
            Self::Shadow => "Shadows",
            Self::FontSize => "Font Sizes",
            Self::FontWeight => "Font Weights",
            Self::LineHeight => "Line Heights",
            Self::Duration => "Durations",
            Self::Easing => "Easing",
            Self::ZIndex => "Z-Index",
        }
    }

    /// Whether the group's values are colors (rendered as swatches).
    pub fn is_color(self) -> bool {
        matches!(
            self,
            Self::BackgroundColors
                | Self::TextColors
                | Self::BorderColors
                | Self::AccentColors
                | Self::StatusColors
                | Self::InteractionColors
        )
    }

    /// Tokens in this group.
    pub fn tokens(self) -> &'static [DesignToken] {
        match self {
            Self::BackgroundColors => BACKGROUND_COLORS,
            Self::TextColors => TEXT_COLORS,
            Self::BorderColors => BORDER_COLORS,
            Self::AccentColors => ACCENT_COLORS,
            Self::StatusColors => STATUS_COLORS,
            Self::InteractionColors => INTERACTION_COLORS,
            Self::Spacing => SPACING,
            Self::Radius => RADII,
            Self::Shadow => SHADOWS,
            Self::FontSize => FONT_SIZES,
            Self::FontWeight => FONT_WEIGHTS,
            Self::LineHeight => LINE_HEIGHTS,
            Self::Duration => DURATIONS,
            Self::Easing => EASINGS,
            Self::ZIndex => Z_INDICES,
        }
    }
}

/// Builds a `var(...)` reference for a token name, with or without the `--sg-` prefix.
pub fn css_var(name: &str) -> String {
    let name = name.strip_prefix(TOKEN_PREFIX).unwrap_or(name);
    format!("var({TOKEN_PREFIX}{name})")
}

/// Looks a token up by its custom property.
pub fn find_token(variable: &str) -> Option<&'static DesignToken> {
    TokenGroup::ALL
        .iter()
        .flat_map(|group| group.tokens())
        .find(|token| token.variable == variable)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_token_is_prefixed_and_unique() {
        let mut seen = HashSet::new();
        for group in TokenGroup::ALL {
            for token in group.tokens() {
                assert!(token.variable.starts_with(TOKEN_PREFIX), "{}", token.variable);
                assert!(seen.insert(token.variable), "duplicate {}", token.variable);
            }
        }
    }

    #[test]
    fn css_var_accepts_bare_and_prefixed_names() {
        assert_eq!(css_var("color-accent"), "var(--sg-color-accent)");
        assert_eq!(css_var("--sg-radius-md"), "var(--sg-radius-md)");
    }

    #[test]
    fn overlay_layers_stack_in_order() {
        let layer = |variable: &str| -> u32 {
            find_token(variable)
                .and_then(|token| token.value.parse().ok())
                .expect("z-index token")
        };
        assert!(layer("--sg-z-dropdown") < layer("--sg-z-modal"));
        assert!(layer("--sg-z-modal") < layer("--sg-z-popover"));
        assert!(layer("--sg-z-popover") < layer("--sg-z-tooltip"));
    }

    #[test]
    fn color_groups_are_flagged() {
        let colors = TokenGroup::ALL.iter().filter(|group| group.is_color()).count();
        assert_eq!(colors, 6);
        assert_eq!(find_token("--sg-color-accent").map(|t| t.value), Some("#A53F35"));
    }
}
