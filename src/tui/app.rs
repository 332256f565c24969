//! Presentation state: panels, theme, advisories. Reads the session's outputs
//! and drives it only through its public transitions.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use entropass::export::{self, ClipboardSink, SystemClipboard};
use entropass::pass::clamp_length;
use entropass::{ExportError, Outcome, RandomSource, Rejection, Session};

use super::keys::Action;

const COPIED_FOR: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Accent color for titles and the password.
    pub fn accent(self) -> &'static str {
        match self {
            Theme::Light => "\x1b[38;5;99m",
            Theme::Dark => "\x1b[38;5;117m",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub severity: Severity,
    pub text: String,
}

impl Advisory {
    fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }
}

pub struct App {
    pub show_history: bool,
    pub show_shortcuts: bool,
    pub show_strength_info: bool,
    pub theme: Theme,
    advisory: Option<Advisory>,
    copied_at: Option<Instant>,
    export_path: PathBuf,
    clipboard: Option<Box<dyn ClipboardSink>>,
}

impl App {
    pub fn new(export_path: PathBuf) -> Self {
        Self {
            show_history: false,
            show_shortcuts: false,
            show_strength_info: false,
            theme: Theme::default(),
            advisory: None,
            copied_at: None,
            export_path,
            clipboard: None,
        }
    }

    #[cfg(test)]
    pub fn with_clipboard(mut self, sink: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = Some(sink);
        self
    }

    pub fn advisory(&self) -> Option<&Advisory> {
        self.advisory.as_ref()
    }

    pub fn advise(&mut self, severity: Severity, text: impl Into<String>) {
        self.advisory = Some(Advisory::new(severity, text));
    }

    pub fn copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPIED_FOR)
    }

    /// Update advisories from what the session did with an event.
    pub fn note(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Generated { .. } => {
                if self
                    .advisory
                    .as_ref()
                    .is_some_and(|a| a.severity != Severity::Info)
                {
                    self.advisory = None;
                }
            }
            Outcome::Locked => {
                self.advisory = Some(Advisory::new(
                    Severity::Info,
                    "Password locked in. Shift+R to collect again.",
                ));
            }
            Outcome::Cleared | Outcome::Rejected(Rejection::NoClassesSelected) => {
                self.advisory = Some(Advisory::new(
                    Severity::Warn,
                    "Select at least one character type (u/l/n/s).",
                ));
            }
            Outcome::RandomSourceUnavailable => {
                self.advisory = Some(Advisory::new(
                    Severity::Error,
                    "Secure random source unavailable; password not updated.",
                ));
            }
            Outcome::Reset => {
                self.advisory = Some(Advisory::new(
                    Severity::Info,
                    "Reset. Move the mouse to collect randomness.",
                ));
            }
            Outcome::Stored => {
                if self
                    .advisory
                    .as_ref()
                    .is_some_and(|a| a.severity == Severity::Warn)
                {
                    self.advisory = None;
                }
            }
            Outcome::Rejected(_) => {}
        }
    }

    pub fn perform<R: RandomSource>(
        &mut self,
        action: Action,
        session: &mut Session<R>,
        now: Instant,
    ) {
        match action {
            Action::Copy => self.copy(session.password(), now),
            Action::Download => self.download(session.password()),
            Action::Reset => {
                let outcome = session.reset();
                self.copied_at = None;
                self.note(outcome);
            }
            Action::ToggleHistory => self.show_history = !self.show_history,
            Action::ToggleShortcuts => self.show_shortcuts = !self.show_shortcuts,
            Action::ToggleStrengthInfo => self.show_strength_info = !self.show_strength_info,
            Action::ToggleTheme => self.theme = self.theme.toggled(),
            Action::ToggleClass(class) => {
                let mut config = *session.config();
                config.selection.toggle(class);
                let outcome = session.configure(config);
                self.note(outcome);
            }
            Action::Lengthen | Action::Shorten => {
                let mut config = *session.config();
                config.length = if action == Action::Lengthen {
                    clamp_length(config.length + 1)
                } else {
                    clamp_length(config.length.saturating_sub(1))
                };
                if config != *session.config() {
                    let outcome = session.configure(config);
                    self.note(outcome);
                }
            }
            Action::Quit => {}
        }
    }

    fn copy(&mut self, password: Option<&str>, now: Instant) {
        // Shortcut is a no-op without a password.
        if password.is_none() {
            return;
        }
        if self.clipboard.is_none() {
            match SystemClipboard::new() {
                Ok(sink) => self.clipboard = Some(Box::new(sink)),
                Err(e) => {
                    warn!(error = %e, "clipboard unavailable");
                    self.advisory = Some(Advisory::new(Severity::Error, e.to_string()));
                    return;
                }
            }
        }
        let Some(sink) = self.clipboard.as_mut() else {
            return;
        };
        match export::copy_password(sink.as_mut(), password) {
            Ok(()) => {
                info!("password copied to clipboard");
                self.copied_at = Some(now);
            }
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                self.advisory = Some(Advisory::new(Severity::Error, e.to_string()));
            }
        }
    }

    fn download(&mut self, password: Option<&str>) {
        if password.is_none() {
            return;
        }
        match export::write_password(&self.export_path, password) {
            Ok(path) => {
                info!(path = %path.display(), "password saved to file");
                self.advisory = Some(Advisory::new(
                    Severity::Info,
                    format!("Saved to {}", path.display()),
                ));
            }
            Err(ExportError::NothingToExport) => {}
            Err(e) => {
                warn!(error = %e, "file export failed");
                self.advisory = Some(Advisory::new(Severity::Error, e.to_string()));
            }
        }
    }
}
