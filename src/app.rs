//! App Core for HotRoute.
//!
//! Owns the database (the single link store instance), the settings, the
//! theme and the ephemeral UI state shared by the WebView and RPC front ends.

use std::sync::Arc;
use std::time::Duration;

use crate::database::connection::Database;
use crate::database::kv_store::KeyValueStore;
use crate::managers::add_dialog::AddDialog;
use crate::managers::link_manager::LinkManager;
use crate::managers::reveal_tracker::RevealTracker;
use crate::managers::shortcut_manager::ShortcutManager;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::theme_engine::ThemeEngine;

/// Central application struct.
///
/// `LinkManager` borrows the connection, so it is created on demand through
/// [`App::links`] rather than stored.
pub struct App {
    pub db: Arc<Database>,
    pub settings_engine: SettingsEngine,
    pub theme_engine: ThemeEngine,
    pub shortcut_manager: ShortcutManager,
    pub reveal_tracker: RevealTracker,
    pub add_dialog: AddDialog,
}

impl App {
    /// Opens the database at `db_path` and loads settings from
    /// `settings_path` (or the platform config directory when `None`).
    ///
    /// A malformed settings file is logged and replaced by defaults.
    pub fn new(db_path: &str, settings_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);

        let mut settings_engine = SettingsEngine::new(settings_path);
        if let Err(e) = settings_engine.load() {
            tracing::warn!(error = %e, "settings unreadable, using defaults");
        }

        let theme_engine = ThemeEngine::load(&KeyValueStore::new(db.connection()))?;
        let reveal_timeout = Duration::from_secs(settings_engine.get_settings().display.reveal_timeout_secs);

        tracing::info!(db = db_path, dark_mode = theme_engine.is_dark(), "app initialized");

        Ok(Self {
            db,
            settings_engine,
            theme_engine,
            shortcut_manager: ShortcutManager::new(),
            reveal_tracker: RevealTracker::new(reveal_timeout),
            add_dialog: AddDialog::new(),
        })
    }

    /// A link manager over the app's store, configured from settings.
    pub fn links(&self) -> LinkManager<'_> {
        LinkManager::with_import_settings(
            self.db.connection(),
            self.settings_engine.get_settings().import.clone(),
        )
    }

    pub fn kv(&self) -> KeyValueStore<'_> {
        KeyValueStore::new(self.db.connection())
    }

    /// Directory exports are written to.
    pub fn export_dir(&self) -> std::path::PathBuf {
        match &self.settings_engine.get_settings().export.directory {
            Some(dir) => std::path::PathBuf::from(dir),
            None => crate::platform::get_downloads_dir(),
        }
    }

    /// Flips dark mode and persists it. Returns the new value.
    pub fn toggle_theme(&mut self) -> Result<bool, crate::types::errors::StoreError> {
        let kv = KeyValueStore::new(self.db.connection());
        self.theme_engine.toggle(&kv)
    }
}
