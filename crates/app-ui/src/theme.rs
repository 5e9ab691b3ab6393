//! Theme document model for Crux Garden
//!
//! A theme document is the persisted, versioned styling record delivered by
//! the API or the local cache. Every styling field is optional and nested per
//! visual category and per mode:
//!
//! - `palette.{light,dark}` - four accent colors
//! - `bloom.{light,dark}` - four bloom slots (solid or gradient), border, shadow
//! - `content.{light,dark}` - surface colors, border metrics, font class, panel shadow
//! - `controls.{light,dark}` - button and link styling
//!
//! Ingestion is lenient: a field of the wrong JSON type is dropped to absent
//! instead of rejecting the whole document, so resolution can substitute a
//! default for exactly that field.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{ThemeDocument, ThemeMode};
//!
//! let doc = ThemeDocument::from_json(r##"{
//!     "key": "garden",
//!     "meta": { "content": { "dark": { "textColor": "#ffffff" } } }
//! }"##).unwrap();
//!
//! let content = doc.meta.content.for_mode(ThemeMode::Dark).unwrap();
//! assert_eq!(content.text_color.as_deref(), Some("#ffffff"));
//! ```

use crate::color::ColorValue;
use crate::error::{Result, ThemeError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Mode
// =============================================================================

/// Light or dark rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light mode
    #[default]
    Light,
    /// Dark mode
    Dark,
}

impl ThemeMode {
    /// Lowercase name, as persisted and as embedded in gradient ids
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Check if this is the dark mode
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// The other mode
    pub fn toggle(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "Light"),
            ThemeMode::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ThemeError::InvalidMode(s.to_string())),
        }
    }
}

// =============================================================================
// Style Enumerations
// =============================================================================

/// Border line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
}

impl BorderStyle {
    /// Look up a border style by its persisted name, falling back to solid
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "dashed" => BorderStyle::Dashed,
            "dotted" => BorderStyle::Dotted,
            _ => BorderStyle::Solid,
        }
    }
}

/// How links are underlined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnderlineStyle {
    /// Never underlined
    None,
    /// Underlined (on platforms that distinguish, on hover/press)
    #[default]
    Underline,
    /// Always underlined
    Always,
}

impl UnderlineStyle {
    /// Look up an underline style by its persisted name, falling back to underline
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "none" => UnderlineStyle::None,
            "always" => UnderlineStyle::Always,
            _ => UnderlineStyle::Underline,
        }
    }
}

// =============================================================================
// Raw Persisted Values
// =============================================================================

/// A numeric style field as persisted: usually a string, sometimes a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// Already numeric
    Number(f64),
    /// Numeric text such as `"3"`, `"0.5"` or `"12px"`
    Text(String),
}

impl RawNumber {
    /// The finite numeric value, if any
    ///
    /// Text is read the way `parseFloat` reads it: the longest leading
    /// decimal prefix counts and trailing units are ignored.
    pub fn value(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => Some(*n).filter(|n| n.is_finite()),
            RawNumber::Text(text) => leading_float(text).filter(|n| n.is_finite()),
        }
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

/// Parse a persisted numeric field, substituting `fallback` when it is
/// absent or unparseable
pub fn parse_number(raw: Option<&RawNumber>, fallback: f32) -> f32 {
    match raw {
        None => fallback,
        Some(raw) => match raw.value().map(|value| value as f32).filter(|v| v.is_finite()) {
            Some(value) => value,
            None => {
                tracing::debug!("Unparseable numeric field {:?}, using {}", raw, fallback);
                fallback
            }
        },
    }
}

fn leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }

    // Exponent only counts when it has digits
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// An enabled flag as persisted: a boolean or its string spelling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFlag {
    /// Boolean flag
    Bool(bool),
    /// `"true"`, `"1"`, `"yes"` and friends
    Text(String),
}

impl RawFlag {
    /// Whether the flag is switched on
    pub fn is_enabled(&self) -> bool {
        match self {
            RawFlag::Bool(enabled) => *enabled,
            RawFlag::Text(text) => {
                matches!(text.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "on")
            }
        }
    }
}

/// One color stop of a persisted gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGradientStop {
    /// Stop color
    #[serde(default)]
    pub color: String,
    /// Stop position in percent
    #[serde(default, alias = "offsetPercent", deserialize_with = "lenient")]
    pub offset: Option<RawNumber>,
}

/// A persisted gradient fill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGradient {
    /// Identifier, possibly missing or shared between modes
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    /// Ordered color stops
    pub stops: Vec<RawGradientStop>,
    /// Rotation in degrees
    #[serde(default, alias = "rotation", deserialize_with = "lenient")]
    pub angle: Option<RawNumber>,
}

/// A color field that may hold a flat color or a gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawColor {
    /// Hex color string
    Solid(String),
    /// Already in resolved `{kind, value}` form
    Tagged(ColorValue),
    /// Gradient descriptor
    Gradient(RawGradient),
}

/// A persisted shadow: every metric is optional and usually a string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShadow {
    /// Whether the surface casts a shadow
    #[serde(default, deserialize_with = "lenient")]
    pub enabled: Option<RawFlag>,
    /// Shadow color
    #[serde(default, deserialize_with = "lenient")]
    pub color: Option<String>,
    /// Horizontal offset
    #[serde(default, deserialize_with = "lenient")]
    pub offset_x: Option<RawNumber>,
    /// Vertical offset
    #[serde(default, deserialize_with = "lenient")]
    pub offset_y: Option<RawNumber>,
    /// Blur radius
    #[serde(default, alias = "blur", deserialize_with = "lenient")]
    pub blur_radius: Option<RawNumber>,
    /// Opacity between 0 and 1
    #[serde(default, deserialize_with = "lenient")]
    pub opacity: Option<RawNumber>,
}

// =============================================================================
// Per-Mode Categories
// =============================================================================

/// A category's light and dark variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ModeStyles<T> {
    /// Light mode variant
    #[serde(default, deserialize_with = "lenient")]
    pub light: Option<T>,
    /// Dark mode variant
    #[serde(default, deserialize_with = "lenient")]
    pub dark: Option<T>,
}

impl<T> Default for ModeStyles<T> {
    fn default() -> Self {
        Self { light: None, dark: None }
    }
}

impl<T> ModeStyles<T> {
    /// The variant for a mode, if present
    pub fn for_mode(&self, mode: ThemeMode) -> Option<&T> {
        match mode {
            ThemeMode::Light => self.light.as_ref(),
            ThemeMode::Dark => self.dark.as_ref(),
        }
    }
}

/// Accent palette
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteStyle {
    /// Primary accent
    #[serde(default, deserialize_with = "lenient")]
    pub primary: Option<String>,
    /// Secondary accent
    #[serde(default, deserialize_with = "lenient")]
    pub secondary: Option<String>,
    /// Tertiary accent
    #[serde(default, deserialize_with = "lenient")]
    pub tertiary: Option<String>,
    /// Quaternary accent
    #[serde(default, deserialize_with = "lenient")]
    pub quaternary: Option<String>,
}

/// Bloom motif styling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloomStyle {
    /// Primary slot fill
    #[serde(default, deserialize_with = "lenient")]
    pub primary: Option<RawColor>,
    /// Secondary slot fill
    #[serde(default, deserialize_with = "lenient")]
    pub secondary: Option<RawColor>,
    /// Tertiary slot fill
    #[serde(default, deserialize_with = "lenient")]
    pub tertiary: Option<RawColor>,
    /// Quaternary slot fill
    #[serde(default, deserialize_with = "lenient")]
    pub quaternary: Option<RawColor>,
    /// Outline color
    #[serde(default, deserialize_with = "lenient")]
    pub border_color: Option<String>,
    /// Outline width
    #[serde(default, deserialize_with = "lenient")]
    pub border_width: Option<RawNumber>,
    /// Bloom shadow
    #[serde(default, deserialize_with = "lenient")]
    pub shadow: Option<RawShadow>,
}

/// Content surface styling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStyle {
    /// Page background
    #[serde(default, deserialize_with = "lenient")]
    pub background_color: Option<String>,
    /// Panel (card) background
    #[serde(default, deserialize_with = "lenient")]
    pub panel_color: Option<String>,
    /// Body text
    #[serde(default, deserialize_with = "lenient")]
    pub text_color: Option<String>,
    /// Panel border
    #[serde(default, deserialize_with = "lenient")]
    pub border_color: Option<String>,
    /// Text selection highlight
    #[serde(default, deserialize_with = "lenient")]
    pub selection_color: Option<String>,
    /// Panel border width
    #[serde(default, deserialize_with = "lenient")]
    pub border_width: Option<RawNumber>,
    /// Panel corner radius
    #[serde(default, deserialize_with = "lenient")]
    pub border_radius: Option<RawNumber>,
    /// `solid`, `dashed` or `dotted`
    #[serde(default, deserialize_with = "lenient")]
    pub border_style: Option<String>,
    /// `sans-serif`, `serif` or `monospace`
    #[serde(default, deserialize_with = "lenient")]
    pub font_family: Option<String>,
    /// Panel shadow
    #[serde(default, deserialize_with = "lenient")]
    pub panel_shadow: Option<RawShadow>,
}

/// Button and link styling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlsStyle {
    /// Button fill
    #[serde(default, deserialize_with = "lenient")]
    pub button_background: Option<RawColor>,
    /// Button label
    #[serde(default, deserialize_with = "lenient")]
    pub button_text_color: Option<String>,
    /// Button outline
    #[serde(default, deserialize_with = "lenient")]
    pub button_border_color: Option<String>,
    /// Button outline width
    #[serde(default, deserialize_with = "lenient")]
    pub button_border_width: Option<RawNumber>,
    /// Button corner radius
    #[serde(default, deserialize_with = "lenient")]
    pub button_border_radius: Option<RawNumber>,
    /// `solid`, `dashed` or `dotted`
    #[serde(default, deserialize_with = "lenient")]
    pub button_border_style: Option<String>,
    /// Button shadow
    #[serde(default, deserialize_with = "lenient")]
    pub button_shadow: Option<RawShadow>,
    /// Link text
    #[serde(default, deserialize_with = "lenient")]
    pub link_color: Option<String>,
    /// `none`, `underline` or `always`
    #[serde(default, deserialize_with = "lenient")]
    pub link_underline_style: Option<String>,
}

// =============================================================================
// Theme Document
// =============================================================================

/// Styling payload of a theme document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeMeta {
    /// Accent palette per mode
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub palette: ModeStyles<PaletteStyle>,
    /// Bloom motif per mode
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub bloom: ModeStyles<BloomStyle>,
    /// Content surfaces per mode
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub content: ModeStyles<ContentStyle>,
    /// Controls per mode
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub controls: ModeStyles<ControlsStyle>,
}

/// A persisted theme
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    /// Unique key
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub key: String,
    /// Revision counter
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub version: u32,
    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub title: Option<String>,
    /// Styling payload
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub meta: ThemeMeta,
}

impl ThemeDocument {
    /// Create an empty document with the given key
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), ..Default::default() }
    }

    /// Parse a document from its JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a document from an already-decoded JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

// =============================================================================
// Lenient Deserialization
// =============================================================================

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            tracing::debug!("Dropping malformed theme field: {}", e);
            Ok(None)
        }
    }
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}
