//! Design token resolution
//!
//! [`compute_design_tokens`] turns an optional theme document and a mode into
//! a complete [`DesignTokens`] value. It is total: absent, blank or malformed
//! fields fall back to the documented default for that one field, so a theme
//! missing only `controls.dark.linkColor` keeps the rest of its dark controls.
//!
//! Fallback chains:
//! - palette, content and bloom outline colors fall back to [`ModeDefaults`]
//! - bloom slots fall back to the resolved palette color of the same rank
//! - button background, button border and link fall back to the resolved
//!   primary accent
//!
//! # Usage
//!
//! ```rust
//! use app_ui::resolver::{compute_design_tokens, default_tokens};
//! use app_ui::theme::{ThemeDocument, ThemeMode};
//!
//! assert_eq!(compute_design_tokens(None, ThemeMode::Dark), default_tokens());
//!
//! let theme = ThemeDocument::new("garden");
//! let tokens = compute_design_tokens(Some(&theme), ThemeMode::Dark);
//! assert_eq!(tokens.colors.background, "#121212");
//! ```

use crate::color::{resolve_color, resolve_color_value, ColorValue, GradientScope};
use crate::shadow::resolve_shadow;
use crate::theme::{
    parse_number, BloomStyle, BorderStyle, ContentStyle, ControlsStyle, PaletteStyle, RawColor,
    ThemeDocument, ThemeMode, UnderlineStyle,
};
use crate::tokens::{
    metrics, BloomTokens, BorderTokens, ButtonTokens, ColorTokens, DesignTokens, LinkTokens,
    ModeDefaults, ShadowTokens, SpacingTokens, LIGHT_DEFAULTS,
};
use crate::typography::{FontClass, TypographyConfig};

/// Semantic slot names embedded in gradient ids
pub mod slot {
    /// Bloom primary slot
    pub const BLOOM_PRIMARY: &str = "bloom-primary";
    /// Bloom secondary slot
    pub const BLOOM_SECONDARY: &str = "bloom-secondary";
    /// Bloom tertiary slot
    pub const BLOOM_TERTIARY: &str = "bloom-tertiary";
    /// Bloom quaternary slot
    pub const BLOOM_QUATERNARY: &str = "bloom-quaternary";
    /// Button fill
    pub const BUTTON_BACKGROUND: &str = "button-background";
}

/// Resolve tokens with the built-in typography table
pub fn compute_design_tokens(theme: Option<&ThemeDocument>, mode: ThemeMode) -> DesignTokens {
    TokenResolver::default().resolve(theme, mode)
}

/// The token set used before any theme is loaded
pub fn default_tokens() -> DesignTokens {
    TokenResolver::default().defaults()
}

/// Token resolver bound to a typography configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenResolver {
    typography: TypographyConfig,
}

impl TokenResolver {
    /// Create a resolver with a custom size table
    pub fn new(typography: TypographyConfig) -> Self {
        Self { typography }
    }

    /// The size table in use
    pub fn typography(&self) -> &TypographyConfig {
        &self.typography
    }

    /// Resolve tokens for a theme and mode
    ///
    /// Without a theme the mode is ignored and [`Self::defaults`] is returned.
    pub fn resolve(&self, theme: Option<&ThemeDocument>, mode: ThemeMode) -> DesignTokens {
        match theme {
            Some(theme) => self.resolve_theme(theme, mode),
            None => self.defaults(),
        }
    }

    /// Fixed, unthemed token set
    ///
    /// Light content colors, solid bloom and button fills, no shadows,
    /// sans-serif typography, 6px/1px buttons and underlined links.
    pub fn defaults(&self) -> DesignTokens {
        let d = &LIGHT_DEFAULTS;

        DesignTokens {
            colors: ColorTokens {
                primary: d.primary.to_string(),
                secondary: d.secondary.to_string(),
                tertiary: d.tertiary.to_string(),
                quaternary: d.quaternary.to_string(),
                background: d.background.to_string(),
                panel: d.panel.to_string(),
                text: d.text.to_string(),
                border: d.border.to_string(),
                selection: d.selection.to_string(),
                button_background: ColorValue::solid(d.primary),
                button_text: d.button_text.to_string(),
                button_border: d.primary.to_string(),
                link: d.primary.to_string(),
            },
            bloom: BloomTokens {
                primary: ColorValue::solid(d.primary),
                secondary: ColorValue::solid(d.secondary),
                tertiary: ColorValue::solid(d.tertiary),
                quaternary: ColorValue::solid(d.quaternary),
                border_color: d.bloom_border.to_string(),
                border_width: metrics::BLOOM_BORDER_WIDTH,
            },
            spacing: SpacingTokens::default(),
            typography: self.typography.tokens(FontClass::SansSerif),
            borders: BorderTokens {
                width: metrics::BORDER_WIDTH,
                radius: metrics::BORDER_RADIUS,
                style: BorderStyle::Solid,
            },
            buttons: ButtonTokens {
                border_width: metrics::BUTTON_BORDER_WIDTH,
                border_radius: metrics::BUTTON_BORDER_RADIUS,
                border_style: BorderStyle::Solid,
            },
            links: LinkTokens { underline: UnderlineStyle::Underline },
            shadows: ShadowTokens::default(),
        }
    }

    fn resolve_theme(&self, theme: &ThemeDocument, mode: ThemeMode) -> DesignTokens {
        let defaults = ModeDefaults::for_mode(mode);
        let meta = &theme.meta;

        let palette = meta.palette.for_mode(mode);
        let bloom = meta.bloom.for_mode(mode);
        let content = meta.content.for_mode(mode);
        let controls = meta.controls.for_mode(mode);

        let colors = resolve_colors(theme, mode, defaults, palette, content, controls);
        let bloom_tokens = resolve_bloom(theme, mode, defaults, &colors, bloom);

        let font_class = content
            .and_then(|c| c.font_family.as_deref())
            .map(FontClass::from_name)
            .unwrap_or_default();

        DesignTokens {
            colors,
            bloom: bloom_tokens,
            spacing: SpacingTokens::default(),
            typography: self.typography.tokens(font_class),
            borders: BorderTokens {
                width: parse_number(
                    content.and_then(|c| c.border_width.as_ref()),
                    metrics::BORDER_WIDTH,
                ),
                radius: parse_number(
                    content.and_then(|c| c.border_radius.as_ref()),
                    metrics::BORDER_RADIUS,
                ),
                style: content
                    .and_then(|c| c.border_style.as_deref())
                    .map(BorderStyle::from_name)
                    .unwrap_or_default(),
            },
            buttons: ButtonTokens {
                border_width: parse_number(
                    controls.and_then(|c| c.button_border_width.as_ref()),
                    metrics::BUTTON_BORDER_WIDTH,
                ),
                border_radius: parse_number(
                    controls.and_then(|c| c.button_border_radius.as_ref()),
                    metrics::BUTTON_BORDER_RADIUS,
                ),
                border_style: controls
                    .and_then(|c| c.button_border_style.as_deref())
                    .map(BorderStyle::from_name)
                    .unwrap_or_default(),
            },
            links: LinkTokens {
                underline: controls
                    .and_then(|c| c.link_underline_style.as_deref())
                    .map(UnderlineStyle::from_name)
                    .unwrap_or_default(),
            },
            shadows: ShadowTokens {
                panel: resolve_shadow(content.and_then(|c| c.panel_shadow.as_ref())),
                button: resolve_shadow(controls.and_then(|c| c.button_shadow.as_ref())),
                bloom: resolve_shadow(bloom.and_then(|b| b.shadow.as_ref())),
            },
        }
    }
}

fn resolve_colors(
    theme: &ThemeDocument,
    mode: ThemeMode,
    defaults: &ModeDefaults,
    palette: Option<&PaletteStyle>,
    content: Option<&ContentStyle>,
    controls: Option<&ControlsStyle>,
) -> ColorTokens {
    let primary = resolve_color(palette.and_then(|p| p.primary.as_deref()), defaults.primary);

    ColorTokens {
        secondary: resolve_color(palette.and_then(|p| p.secondary.as_deref()), defaults.secondary),
        tertiary: resolve_color(palette.and_then(|p| p.tertiary.as_deref()), defaults.tertiary),
        quaternary: resolve_color(
            palette.and_then(|p| p.quaternary.as_deref()),
            defaults.quaternary,
        ),
        background: resolve_color(
            content.and_then(|c| c.background_color.as_deref()),
            defaults.background,
        ),
        panel: resolve_color(content.and_then(|c| c.panel_color.as_deref()), defaults.panel),
        text: resolve_color(content.and_then(|c| c.text_color.as_deref()), defaults.text),
        border: resolve_color(content.and_then(|c| c.border_color.as_deref()), defaults.border),
        selection: resolve_color(
            content.and_then(|c| c.selection_color.as_deref()),
            defaults.selection,
        ),
        button_background: resolve_color_value(
            controls.and_then(|c| c.button_background.as_ref()),
            &primary,
            &GradientScope::new(&theme.key, mode, slot::BUTTON_BACKGROUND),
        ),
        button_text: resolve_color(
            controls.and_then(|c| c.button_text_color.as_deref()),
            defaults.button_text,
        ),
        button_border: resolve_color(
            controls.and_then(|c| c.button_border_color.as_deref()),
            &primary,
        ),
        link: resolve_color(controls.and_then(|c| c.link_color.as_deref()), &primary),
        primary,
    }
}

fn resolve_bloom(
    theme: &ThemeDocument,
    mode: ThemeMode,
    defaults: &ModeDefaults,
    colors: &ColorTokens,
    bloom: Option<&BloomStyle>,
) -> BloomTokens {
    let fill = |raw: Option<&RawColor>, default: &str, slot: &str| {
        resolve_color_value(raw, default, &GradientScope::new(&theme.key, mode, slot))
    };

    BloomTokens {
        primary: fill(
            bloom.and_then(|b| b.primary.as_ref()),
            &colors.primary,
            slot::BLOOM_PRIMARY,
        ),
        secondary: fill(
            bloom.and_then(|b| b.secondary.as_ref()),
            &colors.secondary,
            slot::BLOOM_SECONDARY,
        ),
        tertiary: fill(
            bloom.and_then(|b| b.tertiary.as_ref()),
            &colors.tertiary,
            slot::BLOOM_TERTIARY,
        ),
        quaternary: fill(
            bloom.and_then(|b| b.quaternary.as_ref()),
            &colors.quaternary,
            slot::BLOOM_QUATERNARY,
        ),
        border_color: resolve_color(
            bloom.and_then(|b| b.border_color.as_deref()),
            defaults.bloom_border,
        ),
        border_width: parse_number(
            bloom.and_then(|b| b.border_width.as_ref()),
            metrics::BLOOM_BORDER_WIDTH,
        ),
    }
}
