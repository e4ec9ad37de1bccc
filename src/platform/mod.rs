// HotRoute platform abstraction
// Platform-specific paths and delegation to the host desktop.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as imp;

#[cfg(target_os = "macos")]
use macos as imp;

#[cfg(target_os = "windows")]
use windows as imp;

/// Overrides the data directory (database location) when set.
pub const DATA_DIR_ENV: &str = "HOTROUTE_DATA_DIR";

/// Returns the platform-specific configuration directory for HotRoute.
///
/// - **Linux**: `~/.config/hotroute` (or `$XDG_CONFIG_HOME/hotroute`)
/// - **macOS**: `~/Library/Application Support/HotRoute`
/// - **Windows**: `%APPDATA%/HotRoute`
pub fn get_config_dir() -> PathBuf {
    imp::get_config_dir()
}

/// Returns the data directory, honoring `HOTROUTE_DATA_DIR`.
pub fn get_data_dir() -> PathBuf {
    match std::env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => imp::get_data_dir(),
    }
}

/// Where exports land unless the settings name a directory.
pub fn get_downloads_dir() -> PathBuf {
    imp::get_downloads_dir()
}

/// Path of the SQLite database file.
pub fn database_path() -> PathBuf {
    get_data_dir().join("hotroute.db")
}

/// Asks the desktop to open `url` in the user's default browser.
pub fn open_external(url: &str) -> std::io::Result<()> {
    tracing::info!(url, "opening externally");
    open::that(url)
}
