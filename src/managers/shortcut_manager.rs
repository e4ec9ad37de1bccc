//! Shortcut Manager for HotRoute.
//!
//! Window-level actions (quit, reload, fullscreen, help) plus list actions are
//! bound to fixed key combinations, with the modifier adapted per platform.
//! The page only intercepts the combinations listed here.

use std::collections::HashMap;

const DEFAULT_BINDINGS: [(&str, &str); 6] = [
    ("quit", "Ctrl+Q"),
    ("reload", "Ctrl+R"),
    ("toggle_fullscreen", "F11"),
    ("help", "F1"),
    ("add_link", "Ctrl+N"),
    ("focus_search", "Ctrl+F"),
];

/// Trait defining shortcut lookups.
pub trait ShortcutManagerTrait {
    fn get_shortcut(&self, action: &str) -> Option<&str>;
    fn action_for(&self, keys: &str) -> Option<&str>;
    fn list_shortcuts(&self) -> &HashMap<String, String>;
}

/// Shortcut manager with in-memory bindings and platform adaptation.
pub struct ShortcutManager {
    shortcuts: HashMap<String, String>,
}

impl ShortcutManager {
    pub fn new() -> Self {
        let shortcuts = DEFAULT_BINDINGS
            .into_iter()
            .map(|(a, k)| (a.to_string(), Self::adapt_for_platform(k)))
            .collect();
        Self { shortcuts }
    }

    /// Adapts modifier keys for the current platform.
    fn adapt_for_platform(keys: &str) -> String {
        if cfg!(target_os = "macos") {
            keys.replace("Ctrl+", "Cmd+")
        } else {
            keys.to_string()
        }
    }

    /// Bound key combinations, sorted.
    pub fn bound_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.list_shortcuts().values().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// `(action, keys)` pairs sorted by action, for the help window.
    pub fn sorted_bindings(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .list_shortcuts()
            .iter()
            .map(|(a, k)| (a.as_str(), k.as_str()))
            .collect();
        pairs.sort_unstable();
        pairs
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutManagerTrait for ShortcutManager {
    fn get_shortcut(&self, action: &str) -> Option<&str> {
        self.shortcuts.get(action).map(|s| s.as_str())
    }

    /// Resolves a key combination reported by the page to its bound action.
    fn action_for(&self, keys: &str) -> Option<&str> {
        let adapted = Self::adapt_for_platform(keys);
        self.shortcuts
            .iter()
            .find(|(_, bound)| **bound == adapted)
            .map(|(action, _)| action.as_str())
    }

    fn list_shortcuts(&self) -> &HashMap<String, String> {
        &self.shortcuts
    }
}
