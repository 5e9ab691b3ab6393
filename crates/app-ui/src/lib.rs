//! User interface styling for Crux Garden
//!
//! This crate turns persisted theme documents into the design tokens every
//! screen renders with. Screens never read a theme document directly: they
//! receive a fully resolved [`DesignTokens`] value and translate it into
//! platform style declarations themselves.
//!
//! # Modules
//!
//! - [`theme`] - Theme document model, modes and lenient ingestion
//! - [`color`] - Color values, gradients and gradient id qualification
//! - [`shadow`] - Shadow resolution
//! - [`typography`] - Font classes, family and size tables
//! - [`tokens`] - The resolved token set, spacing scale and defaults
//! - [`resolver`] - Token resolution
//! - [`error`] - Ingestion errors
//!
//! # Example
//!
//! ```rust
//! use app_ui::{compute_design_tokens, ThemeDocument, ThemeMode};
//!
//! // Before any theme arrives
//! let tokens = compute_design_tokens(None, ThemeMode::Light);
//! assert_eq!(tokens.buttons.border_radius, 6.0);
//!
//! // Once the theme document is fetched
//! let theme = ThemeDocument::from_json(r##"{
//!     "key": "garden",
//!     "meta": { "palette": { "dark": { "primary": "#68d391" } } }
//! }"##).unwrap();
//! let tokens = compute_design_tokens(Some(&theme), ThemeMode::Dark);
//! assert_eq!(tokens.colors.link, "#68d391");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod error;
pub mod resolver;
pub mod shadow;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use error::{Result, ThemeError};

pub use theme::{
    parse_number, BorderStyle, ModeStyles, ThemeDocument, ThemeMeta, ThemeMode, UnderlineStyle,
};

pub use color::{Color, ColorValue, GradientDescriptor, GradientStop};

pub use shadow::ShadowToken;

pub use typography::{FontClass, FontFamilies, FontSizes, TypographyConfig, TypographyTokens};

pub use tokens::{spacing, DesignTokens, ModeDefaults};

pub use resolver::{compute_design_tokens, default_tokens, TokenResolver};
