//! Builds one screen from the session and presentation state.

use std::time::Instant;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use entropass::pass::{self, CharacterClass};
use entropass::{RandomSource, Region, Session, StrengthLabel};

use crate::terminal::{
    BOLD, BOX_WIDTH, DIM, Frame, GREEN, RED, RESET, YELLOW, box_bottom, box_line,
    box_line_center, box_opt, box_top, centered, progress_bar_box,
};

use super::app::{App, Severity};
use super::keys::SHORTCUTS;

const CLOCK: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

/// Render a frame. The returned region covers the password box; pointer
/// motion over it does not count.
pub fn draw<R: RandomSource>(session: &Session<R>, app: &App, now: Instant) -> (Frame, Region) {
    let accent = app.theme.accent();
    let mut frame = Frame::new();

    frame.push(centered(&format!("{BOLD}{accent}entropass{RESET}")));
    frame.push(centered(&format!(
        "{DIM}Move the mouse anywhere outside the password box{RESET}"
    )));
    frame.blank();

    frame.extend(meter(session));
    frame.blank();

    let region = password_box(&mut frame, session, app, now);
    frame.push(strength_line(session));
    frame.blank();

    options(&mut frame, session);

    if let Some(advisory) = app.advisory() {
        let color = match advisory.severity {
            Severity::Info => GREEN,
            Severity::Warn => YELLOW,
            Severity::Error => RED,
        };
        frame.push(format!("{color}{}{RESET}", advisory.text));
    } else {
        frame.blank();
    }

    if app.show_strength_info {
        frame.blank();
        strength_info(&mut frame, session);
    }
    if app.show_history {
        frame.blank();
        history(&mut frame, session);
    }
    if app.show_shortcuts {
        frame.blank();
        frame.push(box_top("Shortcuts"));
        for (key, desc) in SHORTCUTS {
            frame.push(box_opt(key, desc));
        }
        frame.push(box_bottom());
    }

    frame.blank();
    frame.push(format!(
        "{DIM}Shift+K shortcuts · Shift+T {} theme · q quit{RESET}",
        app.theme.toggled().label()
    ));

    (frame, region)
}

fn meter<R: RandomSource>(session: &Session<R>) -> [String; 3] {
    let level = session.entropy_level();
    let text = if session.is_locked() {
        "Randomness collected. Password locked".to_owned()
    } else {
        format!("Collecting randomness: {}%", level.floor() as u32)
    };
    progress_bar_box(level, &text)
}

fn password_box<R: RandomSource>(
    frame: &mut Frame,
    session: &Session<R>,
    app: &App,
    now: Instant,
) -> Region {
    let top = frame.row();
    let title = if app.copied(now) {
        format!("Password {GREEN}(copied){RESET}")
    } else if session.is_locked() {
        "Password (locked)".to_owned()
    } else {
        "Password".to_owned()
    };
    frame.push(box_top(&title));
    let body = match session.password() {
        Some(password) => format!("{BOLD}{}{password}{RESET}", app.theme.accent()),
        None if session.config().selection.is_empty() => {
            format!("{DIM}select a character type{RESET}")
        }
        None => format!("{DIM}move the mouse to begin{RESET}"),
    };
    frame.push(box_line_center(&body));
    frame.push(box_bottom());
    let bottom = frame.row() - 1;

    Region::new(0.0, top as f64, (BOX_WIDTH - 1) as f64, bottom as f64)
}

fn strength_line<R: RandomSource>(session: &Session<R>) -> String {
    if session.password().is_none() {
        return format!("{DIM}Strength --{RESET}");
    }
    let strength = session.strength();
    let label = StrengthLabel::from_score(strength);
    let color = match label {
        StrengthLabel::Weak => RED,
        StrengthLabel::Fair => YELLOW,
        StrengthLabel::Good | StrengthLabel::Strong => GREEN,
    };
    format!("Strength {color}{strength}/100 ({label}){RESET}")
}

fn options<R: RandomSource>(frame: &mut Frame, session: &Session<R>) {
    let config = session.config();
    frame.push(box_top("Options"));
    frame.push(box_opt(
        "+ / -",
        &format!(
            "Length {BOLD}{}{RESET} ({}-{})",
            config.length,
            pass::MIN_LENGTH,
            pass::MAX_LENGTH
        ),
    ));
    for (key, class) in [
        ("u", CharacterClass::Uppercase),
        ("l", CharacterClass::Lowercase),
        ("n", CharacterClass::Digit),
        ("s", CharacterClass::Symbol),
    ] {
        let mark = if config.selection.contains(class) {
            "[x]"
        } else {
            "[ ]"
        };
        frame.push(box_opt(key, &format!("{mark} {}", class.label())));
    }
    frame.push(box_bottom());
}

fn strength_info<R: RandomSource>(frame: &mut Frame, session: &Session<R>) {
    let report = pass::analyze(session.password().unwrap_or_default());
    frame.push(box_top("Strength breakdown"));
    frame.push(box_opt(
        "Length",
        &format!("+{:.1}", report.length_points),
    ));
    frame.push(box_opt(
        "Variety",
        &format!("+{} ({} classes)", report.variety_points(), report.classes),
    ));
    frame.push(box_opt(
        "Distribution",
        &format!("+{:.1}", report.distribution_points),
    ));
    frame.push(box_opt("Runs", &format!("-{:.0}", report.penalty())));
    frame.push(box_line(&format!(
        "{DIM}A heuristic quality score, not bits of entropy.{RESET}"
    )));
    frame.push(box_bottom());
}

fn history<R: RandomSource>(frame: &mut Frame, session: &Session<R>) {
    frame.push(box_top("History (UTC)"));
    if session.history().is_empty() {
        frame.push(box_line(&format!("{DIM}nothing generated yet{RESET}")));
    }
    for entry in session.history().iter() {
        let at = entry
            .timestamp()
            .format(CLOCK)
            .unwrap_or_else(|_| "--:--:--".to_owned());
        frame.push(box_line(&format!(
            "{DIM}{at}{RESET}  {:<32}  {:>3}",
            entry.password(),
            entry.strength()
        )));
    }
    frame.push(box_bottom());
}
