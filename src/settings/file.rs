//! Settings file persistence.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Settings;
use crate::error::SettingsError;

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let data = toml::to_string_pretty(settings)?;
    fs::write(path, data)?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        let settings = Settings::default();
        save(&settings, path)?;
        return Ok(settings);
    }

    let data = fs::read_to_string(path)?;
    Ok(toml::from_str(&data)?)
}

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/entropass/settings.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings.toml");
        let settings = load(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let settings = Settings {
            length: 24,
            symbols: false,
            touch_debounce_ms: 80,
            ..Default::default()
        };
        save(&settings, &path).unwrap();
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "length = 12\ndigits = false\n").unwrap();
        let settings = load(&path).unwrap();
        assert_eq!(settings.length, 12);
        assert!(!settings.digits);
        assert!(settings.uppercase);
        assert_eq!(settings.touch_points_per_event, Settings::default().touch_points_per_event);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "length = \"long\"").unwrap();
        assert!(matches!(load(&path), Err(SettingsError::Parse(_))));
    }
}
