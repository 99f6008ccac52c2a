//! Key bindings: mapping key events to application actions.
//!
//! The [`KeyBindingRegistry`] holds the app-level bindings checked before a
//! page sees a key: quit and navigation. Everything else flows through to
//! the active page.

use std::collections::HashMap;

use crate::router::PageId;

use super::input::{Key, KeyEvent, Modifiers};

// ---------------------------------------------------------------------------
// AppAction
// ---------------------------------------------------------------------------

/// An application-level action produced by a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Quit the application.
    Quit,
    /// Navigate to a page.
    Navigate(PageId),
}

// ---------------------------------------------------------------------------
// KeyBindingRegistry
// ---------------------------------------------------------------------------

/// Registry of key event → action bindings.
#[derive(Debug, Default)]
pub struct KeyBindingRegistry {
    bindings: HashMap<KeyEvent, AppAction>,
}

impl KeyBindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the default app bindings:
    /// Ctrl+C and Ctrl+Q quit, F1 navigates home, F2 navigates to about.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.bind(
            KeyEvent::new(Key::Char('c'), Modifiers::CTRL),
            AppAction::Quit,
        );
        registry.bind(
            KeyEvent::new(Key::Char('q'), Modifiers::CTRL),
            AppAction::Quit,
        );
        registry.bind(KeyEvent::plain(Key::F(1)), AppAction::Navigate(PageId::Home));
        registry.bind(
            KeyEvent::plain(Key::F(2)),
            AppAction::Navigate(PageId::About),
        );
        registry
    }

    /// Add or replace a binding.
    pub fn bind(&mut self, event: KeyEvent, action: AppAction) {
        self.bindings.insert(event, action);
    }

    /// Look up the action bound to a key event, if any.
    pub fn resolve(&self, event: &KeyEvent) -> Option<AppAction> {
        self.bindings.get(event).copied()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_include_quit_and_navigation() {
        let registry = KeyBindingRegistry::with_defaults();
        assert_eq!(registry.len(), 4);
        assert_eq!(
            registry.resolve(&KeyEvent::new(Key::Char('c'), Modifiers::CTRL)),
            Some(AppAction::Quit)
        );
        assert_eq!(
            registry.resolve(&KeyEvent::plain(Key::F(1))),
            Some(AppAction::Navigate(PageId::Home))
        );
        assert_eq!(
            registry.resolve(&KeyEvent::plain(Key::F(2))),
            Some(AppAction::Navigate(PageId::About))
        );
    }

    #[test]
    fn unbound_key_resolves_to_none() {
        let registry = KeyBindingRegistry::with_defaults();
        assert_eq!(registry.resolve(&KeyEvent::plain(Key::Char('z'))), None);
    }

    #[test]
    fn bind_replaces_existing() {
        let mut registry = KeyBindingRegistry::new();
        let ev = KeyEvent::plain(Key::F(5));
        registry.bind(ev, AppAction::Quit);
        registry.bind(ev, AppAction::Navigate(PageId::About));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve(&ev), Some(AppAction::Navigate(PageId::About)));
    }

    #[test]
    fn empty_registry() {
        let registry = KeyBindingRegistry::new();
        assert!(registry.is_empty());
    }
}
