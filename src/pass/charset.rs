//! Character classes and the combined alphabet they build.

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Pool order: uppercase, lowercase, digits, symbols.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase",
            CharacterClass::Lowercase => "Lowercase",
            CharacterClass::Digit => "Numbers",
            CharacterClass::Symbol => "Symbols",
        }
    }
}

/// Independent on/off switch per character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClassSelection {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterClassSelection {
    pub const fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
        }
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digit => self.digits,
            CharacterClass::Symbol => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        let flag = match class {
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Digit => &mut self.digits,
            CharacterClass::Symbol => &mut self.symbols,
        };
        *flag = enabled;
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.set(class, !self.contains(class));
    }

    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.digits || self.symbols)
    }

    pub fn enabled(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.contains(*class))
    }

    pub fn from_classes(classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        let mut selection = Self::none();
        for class in classes {
            selection.set(class, true);
        }
        selection
    }
}

impl Default for CharacterClassSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// Build the character pool from the enabled classes.
pub fn build(selection: &CharacterClassSelection) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(selection));
    for class in selection.enabled() {
        chars.extend_from_slice(class.alphabet());
    }
    chars
}

/// Size of the pool [`build`] would return.
pub fn size(selection: &CharacterClassSelection) -> usize {
    selection.enabled().map(|class| class.alphabet().len()).sum()
}
