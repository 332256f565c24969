//! Startup context: resolves settings from the saved file and flags.

use entropass::Settings;

use super::{CliFlags, prompts};

pub struct Context {
    pub settings: Settings,
}

impl Context {
    pub fn new(flags: &CliFlags) -> Self {
        let saved = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                tracing::warn!(error = %e, "failed to load settings, using defaults");
                Settings::default()
            })
        };

        let mut settings = saved;
        flags.apply(&mut settings);

        if flags.save
            && let Err(e) = settings.save_to_file()
        {
            prompts::warn(&format!("Failed to save settings: {e}"));
            tracing::warn!(error = %e, "failed to save settings");
        }

        if settings.selection().is_empty() {
            prompts::warn("No character types selected; toggle one with u/l/n/s.");
        }

        Self { settings }
    }
}
