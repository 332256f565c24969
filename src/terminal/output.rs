//! Terminal output utilities.
//!
//! Box drawing and the meter bar. Everything renders into a [`Frame`] which
//! is written to the terminal in one go, since raw mode needs explicit `\r\n`.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const REVERSE: &str = "\x1b[7m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Frame
// ============================================================================

/// Lines of one screen, top to bottom.
#[derive(Debug, Default)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row index the next pushed line will occupy.
    pub fn row(&self) -> usize {
        self.lines.len()
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Draw from the top-left, clearing leftovers from the previous frame.
    pub fn flush_to(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, MoveTo(0, 0))?;
        for line in self.lines() {
            out.write_all(line.as_bytes())?;
            queue!(out, Clear(ClearType::UntilNewLine))?;
            out.write_all(b"\r\n")?;
        }
        queue!(out, Clear(ClearType::FromCursorDown))?;
        out.flush()
    }
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content                                        │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// │          content          │
pub fn box_line_center(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// └───────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Key and description on one box line.
pub fn box_opt(key: &str, desc: &str) -> String {
    let key_col = 18;
    let key_padded = format!("{:<width$}", key, width = key_col);
    box_line(&format!("{key_padded}{desc}"))
}

/// Display width ignoring ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

pub fn centered(text: &str) -> String {
    let padding = BOX_WIDTH.saturating_sub(console_width(text)) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

// ============================================================================
// Meter
// ============================================================================

/// Progress bar inside a box with centered text (3 lines).
pub fn progress_bar_box(percent: f64, stats: &str) -> [String; 3] {
    let inner_width = BOX_WIDTH - 2;
    let filled = if percent >= 100.0 {
        inner_width
    } else {
        ((percent.max(0.0) / 100.0) * inner_width as f64) as usize
    };

    let text_chars: Vec<char> = stats.chars().collect();
    let padding = inner_width.saturating_sub(text_chars.len()) / 2;

    let mut content: Vec<char> = vec![' '; inner_width];
    for (i, ch) in text_chars.iter().enumerate() {
        if padding + i < inner_width {
            content[padding + i] = *ch;
        }
    }

    let mut top = String::new();
    let mut middle = String::new();
    let mut bottom = String::new();

    if filled > 0 {
        top.push('▗');
        top.push_str(&"▄".repeat(filled));
        middle.push('▐');
        let filled_str: String = content[..filled].iter().collect();
        middle.push_str(&format!("{REVERSE}{filled_str}{RESET}"));
        bottom.push('▝');
        bottom.push_str(&"▀".repeat(filled));
    } else {
        top.push('┌');
        middle.push('│');
        bottom.push('└');
    }

    if filled < inner_width {
        top.push_str(&"─".repeat(inner_width - filled));
        top.push('┐');
        let unfilled_str: String = content[filled..].iter().collect();
        middle.push_str(&unfilled_str);
        middle.push('│');
        bottom.push_str(&"─".repeat(inner_width - filled));
        bottom.push('┘');
    } else {
        top.push('▖');
        middle.push('▌');
        bottom.push('▘');
    }

    [top, middle, bottom]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_codes_have_no_width() {
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width("│ x │"), 5);
    }

    #[test]
    fn boxes_are_fixed_width() {
        assert_eq!(console_width(&box_top("")), BOX_WIDTH);
        assert_eq!(console_width(&box_top("Password")), BOX_WIDTH);
        assert_eq!(console_width(&box_line("hello")), BOX_WIDTH);
        assert_eq!(console_width(&box_line_center(&format!("{GREEN}ok{RESET}"))), BOX_WIDTH);
        assert_eq!(console_width(&box_bottom()), BOX_WIDTH);
        assert_eq!(console_width(&box_opt("Shift+C", "Copy")), BOX_WIDTH);
    }

    #[test]
    fn meter_width_at_every_fill() {
        for percent in [0.0, 0.5, 37.0, 99.9, 100.0] {
            for line in progress_bar_box(percent, "Collecting randomness: 37%") {
                assert_eq!(console_width(&line), BOX_WIDTH, "at {percent}");
            }
        }
    }

    #[test]
    fn meter_corners() {
        let [top, _, bottom] = progress_bar_box(0.0, "");
        assert!(top.starts_with('┌') && top.ends_with('┐'));
        assert!(bottom.starts_with('└'));
        let [top, _, _] = progress_bar_box(100.0, "");
        assert!(top.starts_with('▗') && top.ends_with('▖'));
    }

    #[test]
    fn frame_tracks_rows() {
        let mut frame = Frame::new();
        assert_eq!(frame.row(), 0);
        frame.push(box_top("x"));
        frame.blank();
        assert_eq!(frame.row(), 2);

        let mut out = Vec::new();
        frame.flush_to(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert_eq!(written.matches("\r\n").count(), 2);
    }
}
