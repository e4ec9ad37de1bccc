// HotRoute platform paths for Windows
// Config:    %APPDATA%/HotRoute
// Data:      %APPDATA%/HotRoute
// Downloads: %USERPROFILE%/Downloads

use std::env;
use std::path::PathBuf;

pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("HotRoute")
}

pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}

pub fn get_downloads_dir() -> PathBuf {
    let profile = env::var("USERPROFILE").unwrap_or_else(|_| String::from("C:\\Users\\Default"));
    PathBuf::from(profile).join("Downloads")
}
