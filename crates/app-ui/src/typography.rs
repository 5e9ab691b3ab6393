//! Typography tables for Crux Garden
//!
//! A theme picks one of three font classes for its content. The class selects
//! a family triple (body, heading, mono) and an entry in the size table
//! (heading, body and control point sizes plus a line height). The family
//! table is fixed; the size table is configuration and can be overridden
//! through [`TypographyConfig`].

use serde::{Deserialize, Serialize};

// =============================================================================
// Font Class
// =============================================================================

/// Font class chosen by a theme's content styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontClass {
    /// Sans-serif (default)
    #[default]
    SansSerif,
    /// Serif
    Serif,
    /// Monospace
    Monospace,
}

impl FontClass {
    /// Look up a class by its persisted name, falling back to sans-serif
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "serif" => FontClass::Serif,
            "monospace" | "mono" => FontClass::Monospace,
            _ => FontClass::SansSerif,
        }
    }

    /// Persisted name
    pub fn as_str(&self) -> &'static str {
        match self {
            FontClass::SansSerif => "sans-serif",
            FontClass::Serif => "serif",
            FontClass::Monospace => "monospace",
        }
    }
}

// =============================================================================
// Font Families
// =============================================================================

/// Concrete font identifiers bundled with the app
pub mod font_stack {
    /// Sans-serif body
    pub const SANS: &str = "Inter-Regular";
    /// Sans-serif heading
    pub const SANS_HEADING: &str = "Inter-SemiBold";
    /// Serif body
    pub const SERIF: &str = "Lora-Regular";
    /// Serif heading
    pub const SERIF_HEADING: &str = "Lora-Bold";
    /// Monospace body
    pub const MONO: &str = "JetBrainsMono-Regular";
    /// Monospace heading
    pub const MONO_HEADING: &str = "JetBrainsMono-Bold";
}

/// Family triple for a font class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamilies {
    /// Running text
    pub body: String,
    /// Headings
    pub heading: String,
    /// Code and other fixed-width text
    pub mono: String,
}

impl FontFamilies {
    /// Family triple for a class
    pub fn for_class(class: FontClass) -> Self {
        let (body, heading) = match class {
            FontClass::SansSerif => (font_stack::SANS, font_stack::SANS_HEADING),
            FontClass::Serif => (font_stack::SERIF, font_stack::SERIF_HEADING),
            FontClass::Monospace => (font_stack::MONO, font_stack::MONO_HEADING),
        };

        Self {
            body: body.to_string(),
            heading: heading.to_string(),
            mono: font_stack::MONO.to_string(),
        }
    }
}

// =============================================================================
// Font Sizes
// =============================================================================

/// Point sizes and line height for a font class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSizes {
    /// Heading size
    pub heading: f32,
    /// Body size
    pub body: f32,
    /// Button and input size
    pub control: f32,
    /// Line height multiplier
    pub line_height: f32,
}

impl FontSizes {
    /// Create a size entry
    pub const fn new(heading: f32, body: f32, control: f32, line_height: f32) -> Self {
        Self { heading, body, control, line_height }
    }
}

/// Built-in size table
pub mod font_size {
    use super::FontSizes;

    /// Sans-serif (20 / 16 / 15, 1.5)
    pub const SANS_SERIF: FontSizes = FontSizes::new(20.0, 16.0, 15.0, 1.5);
    /// Serif (22 / 17 / 15, 1.6)
    pub const SERIF: FontSizes = FontSizes::new(22.0, 17.0, 15.0, 1.6);
    /// Monospace (18 / 14 / 14, 1.45)
    pub const MONOSPACE: FontSizes = FontSizes::new(18.0, 14.0, 14.0, 1.45);
}

/// Size table configuration
///
/// Deserializes from camelCase JSON; missing classes keep their built-in entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyConfig {
    /// Sans-serif entry
    pub sans_serif: FontSizes,
    /// Serif entry
    pub serif: FontSizes,
    /// Monospace entry
    pub monospace: FontSizes,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            sans_serif: font_size::SANS_SERIF,
            serif: font_size::SERIF,
            monospace: font_size::MONOSPACE,
        }
    }
}

impl TypographyConfig {
    /// Size entry for a class
    pub fn sizes(&self, class: FontClass) -> FontSizes {
        match class {
            FontClass::SansSerif => self.sans_serif,
            FontClass::Serif => self.serif,
            FontClass::Monospace => self.monospace,
        }
    }

    /// Resolved typography for a class
    pub fn tokens(&self, class: FontClass) -> TypographyTokens {
        TypographyTokens {
            font_class: class,
            families: FontFamilies::for_class(class),
            sizes: self.sizes(class),
        }
    }
}

/// Resolved typography
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    /// Class the values were looked up by
    pub font_class: FontClass,
    /// Family triple
    pub families: FontFamilies,
    /// Sizes and line height
    pub sizes: FontSizes,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Font Class Tests
    // ==========================================================================

    #[test]
    fn test_font_class_from_name() {
        assert_eq!(FontClass::from_name("serif"), FontClass::Serif);
        assert_eq!(FontClass::from_name("Monospace"), FontClass::Monospace);
        assert_eq!(FontClass::from_name("sans-serif"), FontClass::SansSerif);
        assert_eq!(FontClass::from_name("fantasy"), FontClass::SansSerif);
        assert_eq!(FontClass::from_name(""), FontClass::SansSerif);
    }

    #[test]
    fn test_font_class_serialization() {
        let json = serde_json::to_string(&FontClass::SansSerif).unwrap();
        assert_eq!(json, "\"sans-serif\"");
        assert_eq!(FontClass::SansSerif.as_str(), "sans-serif");
    }

    // ==========================================================================
    // Family Table Tests
    // ==========================================================================

    #[test]
    fn test_families_per_class() {
        let serif = FontFamilies::for_class(FontClass::Serif);
        assert_eq!(serif.body, font_stack::SERIF);
        assert_eq!(serif.heading, font_stack::SERIF_HEADING);
        assert_eq!(serif.mono, font_stack::MONO);

        let mono = FontFamilies::for_class(FontClass::Monospace);
        assert_eq!(mono.body, font_stack::MONO);
        assert_eq!(mono.heading, font_stack::MONO_HEADING);
    }

    // ==========================================================================
    // Size Table Tests
    // ==========================================================================

    #[test]
    fn test_size_table() {
        let config = TypographyConfig::default();
        assert_eq!(config.sizes(FontClass::SansSerif), font_size::SANS_SERIF);
        assert_eq!(config.sizes(FontClass::Serif), font_size::SERIF);
        assert_eq!(config.sizes(FontClass::Monospace), font_size::MONOSPACE);

        for class in [FontClass::SansSerif, FontClass::Serif, FontClass::Monospace] {
            let sizes = config.sizes(class);
            assert!(sizes.heading > sizes.body);
            assert!(sizes.body >= sizes.control);
            assert!(sizes.line_height >= 1.0);
        }
    }

    #[test]
    fn test_config_partial_override() {
        let config: TypographyConfig = serde_json::from_str(
            r#"{ "serif": { "heading": 24, "body": 18, "control": 16, "lineHeight": 1.75 } }"#,
        )
        .unwrap();

        assert_eq!(config.serif, FontSizes::new(24.0, 18.0, 16.0, 1.75));
        assert_eq!(config.sans_serif, font_size::SANS_SERIF);
    }

    #[test]
    fn test_tokens() {
        let tokens = TypographyConfig::default().tokens(FontClass::Serif);
        assert_eq!(tokens.font_class, FontClass::Serif);
        assert_eq!(tokens.families, FontFamilies::for_class(FontClass::Serif));
        assert_eq!(tokens.sizes, font_size::SERIF);
    }
}
