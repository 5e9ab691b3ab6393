//! Application state management for Crux Garden
//!
//! This crate holds client-side state shared across screens. Theming state
//! lives in [`theme_context`]: the `(theme, mode)` pair that screens resolve
//! design tokens from.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod theme_context;

pub use theme_context::{ThemeContext, ThemeSelection};
