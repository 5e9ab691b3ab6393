//! Design tokens for Crux Garden
//!
//! [`DesignTokens`] is the fully resolved style configuration handed to the
//! rendering layer. Every color, metric and typography value is present;
//! only shadows are optional, since a surface either casts one or does not.
//!
//! This module also owns the documented defaults that resolution falls back
//! to, split per mode in [`ModeDefaults`].

use crate::color::{Color, ColorValue, GradientDescriptor};
use crate::shadow::ShadowToken;
use crate::theme::{BorderStyle, ThemeMode, UnderlineStyle};
use crate::typography::TypographyTokens;
use serde::{Deserialize, Serialize};

/// Fully transparent color
pub const TRANSPARENT: &str = "#00000000";

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
/// Based on a 4px base unit with t-shirt sizes
pub mod spacing {
    /// 2px - Extra extra small
    pub const SPACE_2XS: f32 = 2.0;
    /// 4px - Extra small
    pub const SPACE_XS: f32 = 4.0;
    /// 8px - Small
    pub const SPACE_SM: f32 = 8.0;
    /// 12px - Medium
    pub const SPACE_MD: f32 = 12.0;
    /// 16px - Large
    pub const SPACE_LG: f32 = 16.0;
    /// 24px - Extra large
    pub const SPACE_XL: f32 = 24.0;
    /// 32px - 2x large
    pub const SPACE_2XL: f32 = 32.0;
    /// 48px - 3x large
    pub const SPACE_3XL: f32 = 48.0;

    /// Get spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "2xs" => Some(SPACE_2XS),
            "xs" => Some(SPACE_XS),
            "sm" => Some(SPACE_SM),
            "md" => Some(SPACE_MD),
            "lg" => Some(SPACE_LG),
            "xl" => Some(SPACE_XL),
            "2xl" => Some(SPACE_2XL),
            "3xl" => Some(SPACE_3XL),
            _ => None,
        }
    }
}

/// Spacing scale as carried in the token set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingTokens {
    /// 2px
    pub xxs: f32,
    /// 4px
    pub xs: f32,
    /// 8px
    pub sm: f32,
    /// 12px
    pub md: f32,
    /// 16px
    pub lg: f32,
    /// 24px
    pub xl: f32,
    /// 32px
    pub xxl: f32,
    /// 48px
    pub xxxl: f32,
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xxs: spacing::SPACE_2XS,
            xs: spacing::SPACE_XS,
            sm: spacing::SPACE_SM,
            md: spacing::SPACE_MD,
            lg: spacing::SPACE_LG,
            xl: spacing::SPACE_XL,
            xxl: spacing::SPACE_2XL,
            xxxl: spacing::SPACE_3XL,
        }
    }
}

// =============================================================================
// Defaults
// =============================================================================

/// Default border and button metrics (mode independent)
pub mod metrics {
    /// Panel border width (1px)
    pub const BORDER_WIDTH: f32 = 1.0;
    /// Panel corner radius (8px)
    pub const BORDER_RADIUS: f32 = 8.0;
    /// Button border width (1px)
    pub const BUTTON_BORDER_WIDTH: f32 = 1.0;
    /// Button corner radius (6px)
    pub const BUTTON_BORDER_RADIUS: f32 = 6.0;
    /// Bloom outline width (none)
    pub const BLOOM_BORDER_WIDTH: f32 = 0.0;
}

/// Colors substituted for absent fields, per mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeDefaults {
    /// Primary accent
    pub primary: &'static str,
    /// Secondary accent
    pub secondary: &'static str,
    /// Tertiary accent
    pub tertiary: &'static str,
    /// Quaternary accent
    pub quaternary: &'static str,
    /// Page background
    pub background: &'static str,
    /// Panel background
    pub panel: &'static str,
    /// Body text
    pub text: &'static str,
    /// Panel border
    pub border: &'static str,
    /// Selection highlight
    pub selection: &'static str,
    /// Button label
    pub button_text: &'static str,
    /// Bloom outline
    pub bloom_border: &'static str,
}

/// Light mode defaults
pub const LIGHT_DEFAULTS: ModeDefaults = ModeDefaults {
    primary: "#2F855A",
    secondary: "#D69E2E",
    tertiary: "#3182CE",
    quaternary: "#D53F8C",
    background: "#FFFFFF",
    panel: "#F7F7F5",
    text: "#1A1A1A",
    border: "#E2E2DE",
    selection: "#C6F6D5",
    button_text: "#FFFFFF",
    bloom_border: "#1A1A1A",
};

/// Dark mode defaults
pub const DARK_DEFAULTS: ModeDefaults = ModeDefaults {
    primary: "#68D391",
    secondary: "#F6E05E",
    tertiary: "#63B3ED",
    quaternary: "#F687B3",
    background: "#121212",
    panel: "#1E1E1C",
    text: "#F2F2F0",
    border: "#34342F",
    selection: "#22543D",
    button_text: "#121212",
    bloom_border: "#F2F2F0",
};

impl ModeDefaults {
    /// Defaults for a mode
    pub fn for_mode(mode: ThemeMode) -> &'static ModeDefaults {
        match mode {
            ThemeMode::Light => &LIGHT_DEFAULTS,
            ThemeMode::Dark => &DARK_DEFAULTS,
        }
    }
}

// =============================================================================
// Token Set
// =============================================================================

/// Resolved colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    /// Primary accent
    pub primary: Color,
    /// Secondary accent
    pub secondary: Color,
    /// Tertiary accent
    pub tertiary: Color,
    /// Quaternary accent
    pub quaternary: Color,
    /// Page background
    pub background: Color,
    /// Panel background
    pub panel: Color,
    /// Body text
    pub text: Color,
    /// Panel border
    pub border: Color,
    /// Selection highlight
    pub selection: Color,
    /// Button fill
    pub button_background: ColorValue,
    /// Button label
    pub button_text: Color,
    /// Button outline
    pub button_border: Color,
    /// Link text
    pub link: Color,
}

/// Resolved bloom motif
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloomTokens {
    /// Primary slot
    pub primary: ColorValue,
    /// Secondary slot
    pub secondary: ColorValue,
    /// Tertiary slot
    pub tertiary: ColorValue,
    /// Quaternary slot
    pub quaternary: ColorValue,
    /// Outline color
    pub border_color: Color,
    /// Outline width
    pub border_width: f32,
}

impl BloomTokens {
    /// The four slots in order
    pub fn slots(&self) -> [&ColorValue; 4] {
        [&self.primary, &self.secondary, &self.tertiary, &self.quaternary]
    }
}

/// Panel border metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderTokens {
    /// Width
    pub width: f32,
    /// Corner radius
    pub radius: f32,
    /// Line style
    pub style: BorderStyle,
}

/// Button metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonTokens {
    /// Outline width
    pub border_width: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Outline style
    pub border_style: BorderStyle,
}

/// Link styling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkTokens {
    /// Underline behaviour
    pub underline: UnderlineStyle,
}

/// Optional shadows per surface
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShadowTokens {
    /// Panel shadow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel: Option<ShadowToken>,
    /// Button shadow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<ShadowToken>,
    /// Bloom shadow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bloom: Option<ShadowToken>,
}

/// The complete, resolved token set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTokens {
    /// Colors
    pub colors: ColorTokens,
    /// Bloom motif
    pub bloom: BloomTokens,
    /// Spacing scale
    pub spacing: SpacingTokens,
    /// Typography
    pub typography: TypographyTokens,
    /// Panel borders
    pub borders: BorderTokens,
    /// Buttons
    pub buttons: ButtonTokens,
    /// Links
    pub links: LinkTokens,
    /// Shadows
    pub shadows: ShadowTokens,
}

impl DesignTokens {
    /// Every gradient in the token set, bloom slots first
    ///
    /// Consumers that emit paint-server definitions register these once per
    /// render tree.
    pub fn gradients(&self) -> Vec<&GradientDescriptor> {
        self.bloom
            .slots()
            .into_iter()
            .chain(std::iter::once(&self.colors.button_background))
            .filter_map(|value| match value {
                ColorValue::Gradient(gradient) => Some(gradient),
                ColorValue::Solid(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim_start_matches('#');
        if hex.len() < 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }

    // ==========================================================================
    // Spacing Tests
    // ==========================================================================

    #[test]
    fn test_spacing_get() {
        assert_eq!(spacing::get("xs"), Some(4.0));
        assert_eq!(spacing::get("md"), Some(12.0));
        assert_eq!(spacing::get("invalid"), None);
    }

    #[test]
    fn test_spacing_tokens_scale() {
        let scale = SpacingTokens::default();
        let values = [
            scale.xxs, scale.xs, scale.sm, scale.md, scale.lg, scale.xl, scale.xxl, scale.xxxl,
        ];
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    // ==========================================================================
    // Default Color Tests
    // ==========================================================================

    fn all_colors(defaults: &ModeDefaults) -> [&'static str; 11] {
        [
            defaults.primary,
            defaults.secondary,
            defaults.tertiary,
            defaults.quaternary,
            defaults.background,
            defaults.panel,
            defaults.text,
            defaults.border,
            defaults.selection,
            defaults.button_text,
            defaults.bloom_border,
        ]
    }

    #[test]
    fn test_defaults_are_valid_hex() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            for color in all_colors(ModeDefaults::for_mode(mode)) {
                assert!(parse_hex_color(color).is_some(), "Invalid default {} in {}", color, mode);
            }
        }
    }

    #[test]
    fn test_defaults_differ_by_mode() {
        assert_eq!(ModeDefaults::for_mode(ThemeMode::Light).background, "#FFFFFF");
        assert_eq!(ModeDefaults::for_mode(ThemeMode::Dark).background, "#121212");
    }

    #[test]
    fn test_text_background_contrast() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let defaults = ModeDefaults::for_mode(mode);
            let bg = parse_hex_color(defaults.background).unwrap();
            let text = parse_hex_color(defaults.text).unwrap();

            let bg_lum = (bg.0 as i32 + bg.1 as i32 + bg.2 as i32) / 3;
            let text_lum = (text.0 as i32 + text.1 as i32 + text.2 as i32) / 3;

            assert!(
                (bg_lum - text_lum).abs() > 100,
                "{} defaults have insufficient text contrast",
                mode
            );
        }
    }

    // ==========================================================================
    // Shadow Serialization Tests
    // ==========================================================================

    #[test]
    fn test_absent_shadows_are_omitted() {
        let json = serde_json::to_value(ShadowTokens::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
