//! Error types for generation, export and settings.

use thiserror::Error;

/// The secure random source could not supply bytes.
#[derive(Debug, Error)]
#[error("secure random source unavailable: {reason}")]
pub struct RandomSourceUnavailable {
    reason: String,
}

impl RandomSourceUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    /// Every character class is disabled. Expected; callers clear the display.
    #[error("no character classes selected")]
    EmptySelection,

    #[error(transparent)]
    RandomSourceUnavailable(#[from] RandomSourceUnavailable),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no password to export")]
    NothingToExport,

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("file error: {0}")]
    File(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
