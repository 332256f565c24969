//! Password generation and scoring.

pub mod charset;
mod generate;
pub mod strength;

pub use charset::{CharacterClass, CharacterClassSelection};
pub use generate::{
    DEFAULT_LENGTH, GenerationConfig, MAX_LENGTH, MIN_LENGTH, clamp_length, generate,
};
pub use strength::{StrengthLabel, StrengthReport, analyze, score};
