//! Crux Garden client styling
//!
//! Re-exports the theming crates so the application shell can depend on a
//! single package.

#![warn(missing_docs)]

pub use app_state;
pub use app_ui;

pub use app_state::{ThemeContext, ThemeSelection};
pub use app_ui::{compute_design_tokens, default_tokens, DesignTokens, ThemeDocument, ThemeMode};
