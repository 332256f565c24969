//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use entropass::CharacterClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Copy,
    Download,
    Reset,
    ToggleHistory,
    ToggleShortcuts,
    ToggleStrengthInfo,
    ToggleTheme,
    ToggleClass(CharacterClass),
    Lengthen,
    Shorten,
    Quit,
}

/// (key, description) pairs for the shortcuts panel.
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("Shift+C", "Copy password to clipboard"),
    ("Shift+D", "Save password to file"),
    ("Shift+R", "Reset and collect again"),
    ("Shift+H", "Show/hide history"),
    ("Shift+I", "Show/hide strength breakdown"),
    ("Shift+T", "Switch dark/light theme"),
    ("Shift+K", "Show/hide this list"),
    ("u / l / n / s", "Toggle upper, lower, numbers, symbols"),
    ("+ / -", "Longer / shorter password"),
    ("Esc / q", "Quit"),
];

pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c)
            if c.is_ascii_uppercase()
                || (c.is_ascii_alphabetic() && key.modifiers.contains(KeyModifiers::SHIFT)) =>
        {
            shifted(c.to_ascii_lowercase())
        }
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('u') => Some(Action::ToggleClass(CharacterClass::Uppercase)),
        KeyCode::Char('l') => Some(Action::ToggleClass(CharacterClass::Lowercase)),
        KeyCode::Char('n') => Some(Action::ToggleClass(CharacterClass::Digit)),
        KeyCode::Char('s') => Some(Action::ToggleClass(CharacterClass::Symbol)),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Up => {
            Some(Action::Lengthen)
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left | KeyCode::Down => {
            Some(Action::Shorten)
        }
        _ => None,
    }
}

fn shifted(c: char) -> Option<Action> {
    match c {
        'c' => Some(Action::Copy),
        'd' => Some(Action::Download),
        'r' => Some(Action::Reset),
        'h' => Some(Action::ToggleHistory),
        'k' => Some(Action::ToggleShortcuts),
        'i' => Some(Action::ToggleStrengthInfo),
        't' => Some(Action::ToggleTheme),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn shift_shortcuts() {
        assert_eq!(
            action_for(&key(KeyCode::Char('C'), KeyModifiers::SHIFT)),
            Some(Action::Copy)
        );
        assert_eq!(
            action_for(&key(KeyCode::Char('R'), KeyModifiers::NONE)),
            Some(Action::Reset)
        );
        assert_eq!(
            action_for(&key(KeyCode::Char('h'), KeyModifiers::SHIFT)),
            Some(Action::ToggleHistory)
        );
        assert_eq!(action_for(&key(KeyCode::Char('Z'), KeyModifiers::SHIFT)), None);
    }

    #[test]
    fn plain_keys() {
        assert_eq!(
            action_for(&key(KeyCode::Char('s'), KeyModifiers::NONE)),
            Some(Action::ToggleClass(CharacterClass::Symbol))
        );
        assert_eq!(
            action_for(&key(KeyCode::Char('c'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            action_for(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            action_for(&key(KeyCode::Right, KeyModifiers::NONE)),
            Some(Action::Lengthen)
        );
        assert_eq!(
            action_for(&key(KeyCode::Char('-'), KeyModifiers::NONE)),
            Some(Action::Shorten)
        );
    }

    #[test]
    fn releases_are_ignored() {
        let mut release = key(KeyCode::Char('C'), KeyModifiers::SHIFT);
        release.kind = KeyEventKind::Release;
        assert_eq!(action_for(&release), None);
    }
}
