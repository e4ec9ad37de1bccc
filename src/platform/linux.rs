// HotRoute platform paths for Linux
// Config:    ~/.config/hotroute
// Data:      ~/.local/share/hotroute
// Downloads: $XDG_DOWNLOAD_DIR or ~/Downloads

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Uses `$XDG_CONFIG_HOME/hotroute` if set, otherwise `~/.config/hotroute`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg).join("hotroute"),
        Err(_) => home_dir().join(".config").join("hotroute"),
    }
}

/// Uses `$XDG_DATA_HOME/hotroute` if set, otherwise `~/.local/share/hotroute`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) => PathBuf::from(xdg).join("hotroute"),
        Err(_) => home_dir().join(".local").join("share").join("hotroute"),
    }
}

/// Uses `$XDG_DOWNLOAD_DIR` if set, otherwise `~/Downloads`.
pub fn get_downloads_dir() -> PathBuf {
    match env::var("XDG_DOWNLOAD_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => home_dir().join("Downloads"),
    }
}
