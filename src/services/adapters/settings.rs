use crate::align::separator::{Gravity, SeparatorError, SeparatorSpec};
use crate::services::ports::config::AlignConfig;
use crate::services::ports::settings::Settings;
use std::path::PathBuf;

const SETTINGS_DIR: &str = ".zalign";
const SETTINGS_FILE: &str = "setting.json";

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(&path, content)?;
    }
    Ok(path)
}

pub fn load_settings() -> Option<Settings> {
    let path = get_settings_path()?;
    let data = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

/// Validate the lenient on-disk rules into a usable config. Empty tokens and
/// unknown gravity values are rejected here, before the engine ever runs.
pub fn config_from_settings(settings: &Settings) -> Result<AlignConfig, SeparatorError> {
    let mut separators = Vec::with_capacity(settings.separators.len());
    for rule in &settings.separators {
        if rule.token.is_empty() {
            return Err(SeparatorError::EmptyToken);
        }
        let gravity = Gravity::parse(&rule.gravity)
            .ok_or_else(|| SeparatorError::UnknownGravity(rule.gravity.clone()))?;
        separators.push(SeparatorSpec::new(rule.token.as_str(), gravity));
    }
    Ok(AlignConfig {
        tab_size: settings.tab_size.max(1),
        separators,
    })
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/services/adapters/settings.rs"]
mod tests;
