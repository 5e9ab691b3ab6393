//! Color values and gradient resolution
//!
//! Fields that accept either a flat color or a gradient resolve into
//! [`ColorValue`]. Gradient identifiers are referenced by paint-server style
//! consumers, so every resolved gradient carries an id qualified by its
//! semantic slot and mode. Light and dark variants of the same slot can then
//! live in one render tree without colliding.

use crate::theme::{parse_number, RawColor, ThemeMode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// A gradient stop with color and position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    /// Color at this position
    pub color: Color,
    /// Position from 0 to 100
    pub offset: f32,
}

/// A fully resolved gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientDescriptor {
    /// Identifier, unique per slot and mode
    pub id: String,
    /// Ordered color stops
    pub stops: Vec<GradientStop>,
    /// Rotation in degrees
    pub angle: f32,
}

/// A flat color or a gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ColorValue {
    /// Flat color
    Solid(Color),
    /// Gradient fill
    Gradient(GradientDescriptor),
}

impl ColorValue {
    /// Create a solid color value
    pub fn solid(color: impl Into<Color>) -> Self {
        ColorValue::Solid(color.into())
    }

    /// Check if this is a gradient
    pub fn is_gradient(&self) -> bool {
        matches!(self, ColorValue::Gradient(_))
    }

    /// The gradient id, for gradients
    pub fn gradient_id(&self) -> Option<&str> {
        match self {
            ColorValue::Solid(_) => None,
            ColorValue::Gradient(gradient) => Some(gradient.id.as_str()),
        }
    }

    /// A flat color for surfaces that cannot paint gradients
    ///
    /// Gradients use their first stop.
    pub fn fallback_color(&self) -> &str {
        match self {
            ColorValue::Solid(color) => color.as_str(),
            ColorValue::Gradient(gradient) => gradient
                .stops
                .first()
                .map(|stop| stop.color.as_str())
                .unwrap_or(crate::tokens::TRANSPARENT),
        }
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve a flat color field, substituting `default` when absent or blank
pub fn resolve_color(raw: Option<&str>, default: &str) -> Color {
    match raw.map(str::trim) {
        Some(color) if !color.is_empty() => color.to_string(),
        _ => default.to_string(),
    }
}

/// Where a gradient lives: which theme, which mode, which semantic slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientScope<'a> {
    /// Key of the theme document
    pub theme_key: &'a str,
    /// Mode being resolved
    pub mode: ThemeMode,
    /// Semantic slot name, e.g. `bloom-primary`
    pub slot: &'a str,
}

impl<'a> GradientScope<'a> {
    /// Create a new scope
    pub fn new(theme_key: &'a str, mode: ThemeMode, slot: &'a str) -> Self {
        Self { theme_key, mode, slot }
    }

    /// Prefix every id qualified for this scope starts with
    pub fn prefix(&self) -> String {
        format!("{}-{}-", self.slot, self.mode.as_str())
    }

    /// Qualify a gradient id for this scope
    ///
    /// Ids already carrying this scope's prefix are kept as is. Anything else
    /// (missing, shared, or qualified for another mode or slot) is replaced by
    /// `{slot}-{mode}-{hash}`, where the hash covers the theme key, mode, slot
    /// and supplied id. The result is deterministic for identical input.
    pub fn qualify(&self, supplied: Option<&str>) -> String {
        let prefix = self.prefix();
        let supplied = supplied.map(str::trim).unwrap_or_default();

        if supplied.len() > prefix.len() && supplied.starts_with(&prefix) {
            return supplied.to_string();
        }

        let mut hasher = Sha256::new();
        for part in [self.theme_key, self.mode.as_str(), self.slot, supplied] {
            hasher.update(part.as_bytes());
            hasher.update([0u8]);
        }
        let digest = hasher.finalize();
        let suffix: String = digest.iter().take(6).map(|b| format!("{:02x}", b)).collect();

        let id = format!("{}{}", prefix, suffix);
        tracing::trace!("Synthesized gradient id {} (supplied {:?})", id, supplied);
        id
    }
}

/// Resolve a field that may hold a flat color or a gradient
///
/// Absent or blank values and gradients without stops become
/// `Solid(default)`.
pub fn resolve_color_value(
    raw: Option<&RawColor>,
    default: &str,
    scope: &GradientScope<'_>,
) -> ColorValue {
    match raw {
        None => ColorValue::solid(default),
        Some(RawColor::Solid(color)) | Some(RawColor::Tagged(ColorValue::Solid(color))) => {
            ColorValue::Solid(resolve_color(Some(color.as_str()), default))
        }
        Some(RawColor::Tagged(ColorValue::Gradient(gradient))) => {
            let stops = gradient
                .stops
                .iter()
                .map(|stop| normalize_stop(&stop.color, stop.offset, default))
                .collect();
            build_gradient(Some(gradient.id.as_str()), stops, gradient.angle, default, scope)
        }
        Some(RawColor::Gradient(gradient)) => {
            let stops = gradient
                .stops
                .iter()
                .map(|stop| {
                    let offset = parse_number(stop.offset.as_ref(), 0.0);
                    normalize_stop(&stop.color, offset, default)
                })
                .collect();
            let angle = parse_number(gradient.angle.as_ref(), 0.0);
            build_gradient(gradient.id.as_deref(), stops, angle, default, scope)
        }
    }
}

/// Blank colors take the slot default; offsets are clamped to 0..=100
fn normalize_stop(color: &str, offset: f32, default: &str) -> GradientStop {
    let offset = if offset.is_finite() { offset.clamp(0.0, 100.0) } else { 0.0 };
    GradientStop { color: resolve_color(Some(color), default), offset }
}

fn build_gradient(
    id: Option<&str>,
    stops: Vec<GradientStop>,
    angle: f32,
    default: &str,
    scope: &GradientScope<'_>,
) -> ColorValue {
    if stops.is_empty() {
        return ColorValue::solid(default);
    }

    ColorValue::Gradient(GradientDescriptor {
        id: scope.qualify(id),
        stops,
        angle: if angle.is_finite() { angle } else { 0.0 },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{RawGradient, RawGradientStop, RawNumber};

    fn raw_gradient(id: Option<&str>) -> RawColor {
        RawColor::Gradient(RawGradient {
            id: id.map(str::to_string),
            stops: vec![
                RawGradientStop {
                    color: "#ff0000".to_string(),
                    offset: Some(RawNumber::Number(0.0)),
                },
                RawGradientStop {
                    color: "#0000ff".to_string(),
                    offset: Some(RawNumber::Text("100".to_string())),
                },
            ],
            angle: Some(RawNumber::Number(90.0)),
        })
    }

    // ==========================================================================
    // Color Utility Tests
    // ==========================================================================

    #[test]
    fn test_resolve_color() {
        assert_eq!(resolve_color(Some("#abcdef"), "#000000"), "#abcdef");
        assert_eq!(resolve_color(Some("  "), "#000000"), "#000000");
        assert_eq!(resolve_color(None, "#000000"), "#000000");
    }

    #[test]
    fn test_color_value_helpers() {
        let solid = ColorValue::solid("#111111");
        assert!(!solid.is_gradient());
        assert_eq!(solid.gradient_id(), None);
        assert_eq!(solid.fallback_color(), "#111111");

        let scope = GradientScope::new("t", ThemeMode::Light, "bloom-primary");
        let gradient = resolve_color_value(Some(&raw_gradient(None)), "#000000", &scope);
        assert!(gradient.is_gradient());
        assert_eq!(gradient.fallback_color(), "#ff0000");
    }

    // ==========================================================================
    // Gradient Tests
    // ==========================================================================

    #[test]
    fn test_gradient_structure_passes_through() {
        let scope = GradientScope::new("t", ThemeMode::Dark, "bloom-primary");
        let value = resolve_color_value(Some(&raw_gradient(Some("g"))), "#000000", &scope);

        match value {
            ColorValue::Gradient(gradient) => {
                assert_eq!(gradient.angle, 90.0);
                assert_eq!(gradient.stops.len(), 2);
                assert_eq!(gradient.stops[0].color, "#ff0000");
                assert_eq!(gradient.stops[1].offset, 100.0);
            }
            other => panic!("Expected gradient, got {:?}", other),
        }
    }

    #[test]
    fn test_gradient_ids_differ_by_mode() {
        let raw = raw_gradient(None);
        let light = GradientScope::new("t", ThemeMode::Light, "bloom-primary");
        let dark = GradientScope::new("t", ThemeMode::Dark, "bloom-primary");

        let light_value = resolve_color_value(Some(&raw), "#000000", &light);
        let dark_value = resolve_color_value(Some(&raw), "#000000", &dark);
        let light_id = light_value.gradient_id().unwrap();
        let dark_id = dark_value.gradient_id().unwrap();

        assert_ne!(light_id, dark_id);
        assert!(light_id.contains("light"));
        assert!(dark_id.contains("dark"));
    }

    #[test]
    fn test_gradient_ids_differ_by_slot_and_are_stable() {
        let raw = raw_gradient(Some("shared"));
        let primary = GradientScope::new("t", ThemeMode::Light, "bloom-primary");
        let secondary = GradientScope::new("t", ThemeMode::Light, "bloom-secondary");

        let first = resolve_color_value(Some(&raw), "#000000", &primary);
        let again = resolve_color_value(Some(&raw), "#000000", &primary);
        let other = resolve_color_value(Some(&raw), "#000000", &secondary);

        assert_eq!(first.gradient_id(), again.gradient_id());
        assert_ne!(first.gradient_id(), other.gradient_id());
    }

    #[test]
    fn test_qualify_is_idempotent() {
        let scope = GradientScope::new("t", ThemeMode::Dark, "button-background");
        let id = scope.qualify(None);
        assert!(id.starts_with("button-background-dark-"));
        assert_eq!(scope.qualify(Some(id.as_str())), id);

        // Qualified for the other mode: must be rewritten
        let light = GradientScope::new("t", ThemeMode::Light, "button-background");
        let rewritten = light.qualify(Some(id.as_str()));
        assert!(rewritten.starts_with("button-background-light-"));
        assert_ne!(rewritten, id);
    }

    #[test]
    fn test_empty_gradient_becomes_solid_default() {
        let scope = GradientScope::new("t", ThemeMode::Light, "bloom-primary");
        let raw = RawColor::Gradient(RawGradient { id: None, stops: vec![], angle: None });
        assert_eq!(
            resolve_color_value(Some(&raw), "#2f855a", &scope),
            ColorValue::solid("#2f855a")
        );
    }

    #[test]
    fn test_stop_offsets_clamped() {
        let scope = GradientScope::new("t", ThemeMode::Light, "bloom-primary");
        let raw = RawColor::Gradient(RawGradient {
            id: None,
            stops: vec![RawGradientStop {
                color: String::new(),
                offset: Some(RawNumber::Text("250".to_string())),
            }],
            angle: None,
        });

        match resolve_color_value(Some(&raw), "#2f855a", &scope) {
            ColorValue::Gradient(gradient) => {
                assert_eq!(gradient.stops[0].offset, 100.0);
                assert_eq!(gradient.stops[0].color, "#2f855a");
                assert_eq!(gradient.angle, 0.0);
            }
            other => panic!("Expected gradient, got {:?}", other),
        }
    }

    #[test]
    fn test_tagged_gradient_requalified() {
        let scope = GradientScope::new("t", ThemeMode::Dark, "bloom-tertiary");
        let raw = RawColor::Tagged(ColorValue::Gradient(GradientDescriptor {
            id: "bloom-tertiary-light-abc".to_string(),
            stops: vec![
                GradientStop { color: "#fff".to_string(), offset: 0.0 },
                GradientStop { color: " ".to_string(), offset: 250.0 },
                GradientStop { color: "#abc".to_string(), offset: -10.0 },
            ],
            angle: 30.0,
        }));

        let value = resolve_color_value(Some(&raw), "#000000", &scope);
        assert!(value.gradient_id().unwrap().starts_with("bloom-tertiary-dark-"));

        match value {
            ColorValue::Gradient(gradient) => {
                assert_eq!(gradient.angle, 30.0);
                assert_eq!(gradient.stops[0].color, "#fff");
                assert_eq!(gradient.stops[1].color, "#000000");
                assert_eq!(gradient.stops[1].offset, 100.0);
                assert_eq!(gradient.stops[2].offset, 0.0);
            }
            other => panic!("Expected gradient, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_angles_fall_back() {
        let scope = GradientScope::new("t", ThemeMode::Light, "bloom-primary");
        let raw = RawColor::Gradient(RawGradient {
            id: None,
            stops: vec![RawGradientStop {
                color: "#ff0000".to_string(),
                offset: Some(RawNumber::Text("1e39".to_string())),
            }],
            angle: Some(RawNumber::Text("1e40".to_string())),
        });

        match resolve_color_value(Some(&raw), "#000000", &scope) {
            ColorValue::Gradient(gradient) => {
                assert_eq!(gradient.angle, 0.0);
                assert_eq!(gradient.stops[0].offset, 0.0);
            }
            other => panic!("Expected gradient, got {:?}", other),
        }

        let tagged = RawColor::Tagged(ColorValue::Gradient(GradientDescriptor {
            id: String::new(),
            stops: vec![GradientStop { color: "#ff0000".to_string(), offset: f32::NAN }],
            angle: f32::INFINITY,
        }));
        match resolve_color_value(Some(&tagged), "#000000", &scope) {
            ColorValue::Gradient(gradient) => {
                assert_eq!(gradient.angle, 0.0);
                assert_eq!(gradient.stops[0].offset, 0.0);
            }
            other => panic!("Expected gradient, got {:?}", other),
        }
    }

    #[test]
    fn test_color_value_serialization() {
        let json = serde_json::to_value(ColorValue::solid("#123456")).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "solid", "value": "#123456" }));
    }
}
