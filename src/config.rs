use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

const SYSTEM_DATA_DIR: &str = "/usr/share/manjaro-hello";
const RELEASE_FILE: &str = "/etc/lsb-release";
const LIVE_MARKERS: [&str; 2] = ["/bootmnt/manjaro", "/run/miso/bootmnt/manjaro"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub autostart: bool,
    pub locale: Option<String>,
}

impl Preferences {
    /// Defaults used when nothing usable is stored on disk.
    pub fn fallback(autostart_exists: bool) -> Self {
        Self {
            autostart: autostart_exists,
            locale: None,
        }
    }
}

pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Option<Preferences> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) => {
                log::debug!("No preferences at {}: {}", self.path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&data) {
            Ok(prefs) => Some(prefs),
            Err(e) => {
                log::warn!("Ignoring malformed preferences {}: {}", self.path.display(), e);
                None
            }
        }
    }

    pub fn save(&self, prefs: &Preferences) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::warn!("Cannot create {}: {}", parent.display(), e);
            }
        }
        match serde_json::to_string_pretty(prefs) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.path, data) {
                    log::warn!("Failed to save preferences to {}: {}", self.path.display(), e);
                }
            }
            Err(e) => log::warn!("Failed to encode preferences: {}", e),
        }
    }
}

/// Every location the application reads from or writes to.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub preferences: PathBuf,
    pub autostart_link: PathBuf,
    pub desktop_entry: PathBuf,
    pub catalogs: PathBuf,
    pub pages: PathBuf,
    pub release_file: PathBuf,
    pub live_markers: Vec<PathBuf>,
}

impl AppPaths {
    pub fn detect() -> Self {
        let config = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join(".config")
        });
        Self::with_dirs(&config, &data_dir())
    }

    /// Lay out paths under explicit config and data directories.
    pub fn with_dirs(config: &Path, data: &Path) -> Self {
        let desktop_file = format!("{}.desktop", APP_NAME);
        Self {
            preferences: config.join(format!("{}.json", APP_NAME)),
            autostart_link: config.join("autostart").join(&desktop_file),
            desktop_entry: data.join(&desktop_file),
            catalogs: data.join("locale"),
            pages: data.join("pages"),
            release_file: PathBuf::from(RELEASE_FILE),
            live_markers: LIVE_MARKERS.iter().map(PathBuf::from).collect(),
        }
    }
}

fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MANJARO_HELLO_DATA_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    let system = PathBuf::from(SYSTEM_DATA_DIR);
    if system.is_dir() {
        return system;
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("data")
}
