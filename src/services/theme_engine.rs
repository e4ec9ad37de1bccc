//! Theme Engine: the dark-mode preference, its body class and CSS palette.
//!
//! The flag lives in the `darkMode` key-value slot and is read back on startup.

use std::collections::HashMap;

use crate::database::kv_store::{KeyValueStore, DARK_MODE_KEY};
use crate::types::errors::StoreError;

/// Dark palette colors.
struct DarkPalette;
impl DarkPalette {
    const BG_PRIMARY: &'static str = "#0d1117";
    const BG_SECONDARY: &'static str = "#161b22";
    const TEXT_PRIMARY: &'static str = "#c9d1d9";
    const TEXT_SECONDARY: &'static str = "#8b949e";
    const BORDER: &'static str = "#30363d";
    const HOVER_BG: &'static str = "#1f242b";
    const STAR: &'static str = "#ffd700";
}

/// Light palette colors.
struct LightPalette;
impl LightPalette {
    const BG_PRIMARY: &'static str = "#ffffff";
    const BG_SECONDARY: &'static str = "#f6f8fa";
    const TEXT_PRIMARY: &'static str = "#24292f";
    const TEXT_SECONDARY: &'static str = "#57606a";
    const BORDER: &'static str = "#d0d7de";
    const HOVER_BG: &'static str = "#f3f4f6";
    const STAR: &'static str = "#d4a017";
}

/// The theme engine implementation.
#[derive(Debug, Default)]
pub struct ThemeEngine {
    dark_mode: bool,
}

impl ThemeEngine {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    /// Reads the persisted flag. Anything other than `"true"` means light.
    pub fn load(kv: &KeyValueStore<'_>) -> Result<Self, StoreError> {
        let dark_mode = kv.get(DARK_MODE_KEY)?.as_deref() == Some("true");
        Ok(Self { dark_mode })
    }

    /// Persists the flipped flag, then applies it. Returns the new value.
    /// On a failed write the current mode is kept.
    pub fn toggle(&mut self, kv: &KeyValueStore<'_>) -> Result<bool, StoreError> {
        let next = !self.dark_mode;
        kv.set(DARK_MODE_KEY, if next { "true" } else { "false" })?;
        self.dark_mode = next;
        tracing::debug!(dark_mode = next, "theme toggled");
        Ok(next)
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    /// Class applied to `<body>`.
    pub fn body_class(&self) -> &'static str {
        if self.dark_mode {
            "dark-mode"
        } else {
            ""
        }
    }

    /// Glyph for the toggle button: the mode a click switches to.
    pub fn toggle_icon(&self) -> &'static str {
        if self.dark_mode {
            "\u{2600}"
        } else {
            "\u{263E}"
        }
    }

    pub fn css_variables(&self) -> HashMap<String, String> {
        let (bg, bg2, text, text2, border, hover, star) = if self.dark_mode {
            (
                DarkPalette::BG_PRIMARY,
                DarkPalette::BG_SECONDARY,
                DarkPalette::TEXT_PRIMARY,
                DarkPalette::TEXT_SECONDARY,
                DarkPalette::BORDER,
                DarkPalette::HOVER_BG,
                DarkPalette::STAR,
            )
        } else {
            (
                LightPalette::BG_PRIMARY,
                LightPalette::BG_SECONDARY,
                LightPalette::TEXT_PRIMARY,
                LightPalette::TEXT_SECONDARY,
                LightPalette::BORDER,
                LightPalette::HOVER_BG,
                LightPalette::STAR,
            )
        };
        let mut vars = HashMap::new();
        vars.insert("--bg-primary".into(), bg.into());
        vars.insert("--bg-secondary".into(), bg2.into());
        vars.insert("--text-primary".into(), text.into());
        vars.insert("--text-secondary".into(), text2.into());
        vars.insert("--border-color".into(), border.into());
        vars.insert("--hover-bg".into(), hover.into());
        vars.insert("--star-color".into(), star.into());
        vars
    }

    /// `:root{...}` block for the current palette, sorted for stable output.
    pub fn css_root_block(&self) -> String {
        let mut vars: Vec<_> = self.css_variables().into_iter().collect();
        vars.sort();
        let body: String = vars.iter().map(|(k, v)| format!("{}:{};", k, v)).collect();
        format!(":root{{{}}}", body)
    }
}
