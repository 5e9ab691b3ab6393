//! Theme and mode state shared across screens
//!
//! `ThemeContext` holds the `(theme, mode)` pair the application last
//! received, from the API, the local cache or a settings toggle. It stores
//! inputs only; tokens are recomputed from the stored pair on every call to
//! [`ThemeContext::tokens`].

use app_ui::{DesignTokens, ThemeDocument, ThemeError, ThemeMode, TokenResolver};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The inputs last handed to the resolver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeSelection {
    /// Active theme document, if one has been loaded
    pub theme: Option<ThemeDocument>,
    /// Active mode
    pub mode: ThemeMode,
}

/// Thread-safe theme state
///
/// Clones share the same underlying selection.
#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    selection: Arc<RwLock<ThemeSelection>>,
    resolver: Arc<TokenResolver>,
}

impl ThemeContext {
    /// Create a context with no theme loaded
    pub fn new(mode: ThemeMode) -> Self {
        Self::with_resolver(TokenResolver::default(), mode)
    }

    /// Create a context that resolves with a custom resolver
    pub fn with_resolver(resolver: TokenResolver, mode: ThemeMode) -> Self {
        Self {
            selection: Arc::new(RwLock::new(ThemeSelection { theme: None, mode })),
            resolver: Arc::new(resolver),
        }
    }

    /// Restore a context from a saved selection
    pub fn from_selection(selection: ThemeSelection) -> Self {
        Self {
            selection: Arc::new(RwLock::new(selection)),
            resolver: Arc::new(TokenResolver::default()),
        }
    }

    /// Builder: start with a theme loaded
    pub fn with_theme(self, theme: ThemeDocument) -> Self {
        self.set_theme(Some(theme));
        self
    }

    /// Replace the active theme
    pub fn set_theme(&self, theme: Option<ThemeDocument>) {
        let mut selection = self.selection.write();
        tracing::debug!(
            "Theme changed: {:?} -> {:?}",
            selection.theme.as_ref().map(|t| t.key.as_str()),
            theme.as_ref().map(|t| t.key.as_str())
        );
        selection.theme = theme;
    }

    /// Drop the active theme, reverting to default tokens
    pub fn clear_theme(&self) {
        self.set_theme(None);
    }

    /// Set the active mode
    pub fn set_mode(&self, mode: ThemeMode) {
        let mut selection = self.selection.write();
        if selection.mode != mode {
            tracing::debug!("Theme mode changed: {} -> {}", selection.mode, mode);
        }
        selection.mode = mode;
    }

    /// Set the active mode from its persisted name
    pub fn set_mode_str(&self, mode: &str) -> Result<(), ThemeError> {
        self.set_mode(mode.parse()?);
        Ok(())
    }

    /// Flip between light and dark, returning the new mode
    pub fn toggle_mode(&self) -> ThemeMode {
        let mut selection = self.selection.write();
        selection.mode = selection.mode.toggle();
        tracing::debug!("Theme mode toggled to {}", selection.mode);
        selection.mode
    }

    /// Current mode
    pub fn mode(&self) -> ThemeMode {
        self.selection.read().mode
    }

    /// Current theme document
    pub fn theme(&self) -> Option<ThemeDocument> {
        self.selection.read().theme.clone()
    }

    /// Snapshot of the stored inputs
    pub fn selection(&self) -> ThemeSelection {
        self.selection.read().clone()
    }

    /// Resolve tokens for the stored inputs
    pub fn tokens(&self) -> DesignTokens {
        let selection = self.selection.read();
        self.resolver.resolve(selection.theme.as_ref(), selection.mode)
    }
}
