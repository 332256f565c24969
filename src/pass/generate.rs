//! Password generation.

use zeroize::Zeroizing;

use super::charset::{self, CharacterClassSelection};
use crate::error::GenerateError;
use crate::rng::RandomSource;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 16;

/// Length plus class selection. Whoever builds one is expected to keep
/// `length` within [`MIN_LENGTH`, `MAX_LENGTH`]; [`generate`] clamps if not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub selection: CharacterClassSelection,
}

impl GenerationConfig {
    pub fn new(length: usize, selection: CharacterClassSelection) -> Self {
        Self { length, selection }
    }

    pub fn effective_length(&self) -> usize {
        clamp_length(self.length)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, CharacterClassSelection::all())
    }
}

pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Generate one password from the enabled classes.
///
/// Each character is an independent 32-bit draw reduced modulo the pool size.
/// The reduction is slightly biased toward the front of the pool; no draws are
/// rejected.
pub fn generate<R>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Zeroizing<String>, GenerateError>
where
    R: RandomSource + ?Sized,
{
    if config.selection.is_empty() {
        return Err(GenerateError::EmptySelection);
    }

    let chars = charset::build(&config.selection);
    let length = config.effective_length();

    let mut draws = Zeroizing::new(vec![0u32; length]);
    rng.fill_u32(draws.as_mut_slice())?;

    let mut password = Zeroizing::new(String::with_capacity(length));
    password.extend(draws.iter().map(|&draw| random_char(&chars, draw)));
    Ok(password)
}

#[inline]
fn random_char(chars: &[u8], draw: u32) -> char {
    chars[draw as usize % chars.len()] as char
}
