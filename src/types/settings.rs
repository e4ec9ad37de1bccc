use serde::{Deserialize, Serialize};

/// Top-level application settings container, persisted as `settings.json`.
///
/// Missing sections and fields take their defaults, so a partial file loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub window: WindowSettings,
    pub display: DisplaySettings,
    pub import: ImportSettings,
    pub export: ExportSettings,
    /// Page the help shortcut opens in the browser. `None` shows the
    /// built-in help window.
    pub help_url: Option<String>,
    pub log_filter: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            display: DisplaySettings::default(),
            import: ImportSettings::default(),
            export: ExportSettings::default(),
            help_url: None,
            log_filter: "info".to_string(),
        }
    }
}

/// Main window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "HotRoute".to_string(),
            width: 400,
            height: 600,
            min_width: 350,
            min_height: 500,
        }
    }
}

/// Timings for transient list UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    /// How long a revealed url stays visible before reverting to the name.
    pub reveal_timeout_secs: u64,
    pub notification_timeout_ms: u64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            reveal_timeout_secs: 5,
            notification_timeout_ms: 2000,
        }
    }
}

/// Merge-import behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImportSettings {
    /// Also drop records whose url repeats an earlier record in the same file.
    #[serde(default)]
    pub dedupe_within_batch: bool,
}

/// Export destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExportSettings {
    /// `None` means the platform downloads directory.
    #[serde(default)]
    pub directory: Option<String>,
}
