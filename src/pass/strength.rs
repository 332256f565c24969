//! Heuristic password strength.
//!
//! The score rewards length, class variety and an even character
//! distribution, and docks points for runs like `aaa` or `abc`. It is a rough
//! quality indicator for display, not an entropy estimate.

use std::collections::HashMap;
use std::fmt;

const LENGTH_POINTS: f64 = 30.0;
const LENGTH_FOR_FULL_POINTS: f64 = 32.0;
const POINTS_PER_CLASS: u32 = 10;
const DISTRIBUTION_POINTS: f64 = 30.0;
const RUN_PENALTY: f64 = 10.0;

const SEQUENCES: [&str; 12] = [
    "abc", "bcd", "cde", "def", "efg", "123", "234", "345", "456", "567", "678", "789",
];

/// Per-term breakdown of a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StrengthReport {
    pub length_points: f64,
    /// Distinct classes present among upper, lower, digit, other.
    pub classes: u32,
    pub distribution_points: f64,
    /// Some character appears three or more times in a row.
    pub repeated_run: bool,
    /// Lowercased input contains one of the ascending triples.
    pub sequential_run: bool,
}

impl StrengthReport {
    pub fn variety_points(&self) -> u32 {
        self.classes * POINTS_PER_CLASS
    }

    pub fn penalty(&self) -> f64 {
        let mut penalty = 0.0;
        if self.repeated_run {
            penalty += RUN_PENALTY;
        }
        if self.sequential_run {
            penalty += RUN_PENALTY;
        }
        penalty
    }

    pub fn raw(&self) -> f64 {
        self.length_points + f64::from(self.variety_points()) + self.distribution_points
            - self.penalty()
    }

    pub fn score(&self) -> u8 {
        self.raw().round().clamp(0.0, 100.0) as u8
    }
}

pub fn analyze(password: &str) -> StrengthReport {
    let length = password.chars().count();
    if length == 0 {
        return StrengthReport::default();
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_other = password.chars().any(|c| !c.is_ascii_alphanumeric());
    let classes = [has_upper, has_lower, has_digit, has_other]
        .into_iter()
        .filter(|present| *present)
        .count() as u32;

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in password.chars() {
        *counts.entry(c).or_default() += 1;
    }
    let max_count = counts.values().copied().max().unwrap_or(0);

    let lowered = password.to_lowercase();

    StrengthReport {
        length_points: (LENGTH_POINTS * length as f64 / LENGTH_FOR_FULL_POINTS).min(LENGTH_POINTS),
        classes,
        distribution_points: DISTRIBUTION_POINTS * (1.0 - max_count as f64 / length as f64),
        repeated_run: has_repeated_run(password),
        sequential_run: SEQUENCES.iter().any(|seq| lowered.contains(seq)),
    }
}

/// Strength in [0, 100]. The empty string scores 0.
pub fn score(password: &str) -> u8 {
    analyze(password).score()
}

fn has_repeated_run(password: &str) -> bool {
    let mut previous = None;
    let mut run = 0;
    for c in password.chars() {
        if previous == Some(c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }
    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => StrengthLabel::Weak,
            40..=59 => StrengthLabel::Fair,
            60..=79 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
