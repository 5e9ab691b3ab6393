//! Shadow resolution
//!
//! Panels, buttons and the bloom motif share one persisted shadow shape.
//! A surface either has a shadow or it does not: a disabled shadow resolves
//! to `None`, never to a zeroed descriptor.

use crate::color::{resolve_color, Color};
use crate::theme::{parse_number, RawFlag, RawShadow};
use serde::{Deserialize, Serialize};

/// Shadow color used when an enabled shadow omits one
pub const DEFAULT_SHADOW_COLOR: &str = "#000000";

/// A resolved shadow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowToken {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur_radius: f32,
    /// Opacity from 0.0 to 1.0
    pub opacity: f32,
}

impl ShadowToken {
    /// Create a new shadow
    pub fn new(color: &str, offset_x: f32, offset_y: f32, blur_radius: f32, opacity: f32) -> Self {
        Self {
            color: color.to_string(),
            offset_x,
            offset_y,
            blur_radius,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }
}

/// Resolve a persisted shadow
///
/// Returns `None` unless the enabled flag is set. Once enabled, every missing
/// or unparseable metric falls back to `0` and the color to black.
pub fn resolve_shadow(raw: Option<&RawShadow>) -> Option<ShadowToken> {
    let raw = raw?;
    if !raw.enabled.as_ref().is_some_and(RawFlag::is_enabled) {
        return None;
    }

    Some(ShadowToken::new(
        &resolve_color(raw.color.as_deref(), DEFAULT_SHADOW_COLOR),
        parse_number(raw.offset_x.as_ref(), 0.0),
        parse_number(raw.offset_y.as_ref(), 0.0),
        parse_number(raw.blur_radius.as_ref(), 0.0),
        parse_number(raw.opacity.as_ref(), 0.0),
    ))
}
