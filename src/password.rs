use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use rand::Rng;
use tracing::debug;

use crate::errors::ValidationError;
use crate::generators::{ CharacterPool, generate_password };

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl FromStr for CharacterClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lowercase" | "lower" | "l" => Ok(Self::Lowercase),
            "uppercase" | "upper" | "u" => Ok(Self::Uppercase),
            "numbers" | "digits" | "n" => Ok(Self::Numbers),
            "symbols" | "specials" | "s" => Ok(Self::Symbols),
            other => Err(format!("Unknown character class: {}", other)),
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Numbers => "numbers",
            Self::Symbols => "symbols",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    /// What the form falls back to on reset: lowercase letters only.
    pub fn reset_defaults() -> Self {
        Self {
            lowercase: true,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        let flag = match class {
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Numbers => &mut self.numbers,
            CharacterClass::Symbols => &mut self.symbols,
        };
        *flag = enabled;
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.set(class, !self.is_enabled(class));
    }

    pub fn any(&self) -> bool {
        self.lowercase || self.uppercase || self.numbers || self.symbols
    }
}

/// Parses a raw length field and checks it against the allowed bounds.
pub fn validate_length(raw: &str) -> Result<usize, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        debug!("rejected empty length");
        return Err(ValidationError::Required);
    }

    let length = raw.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => ValidationError::TooLong,
        IntErrorKind::NegOverflow => ValidationError::TooShort,
        _ => {
            debug!(input = raw, "rejected non-numeric length");
            ValidationError::NotANumber
        }
    })?;

    if length < MIN_LENGTH as i64 {
        debug!(length, "rejected length below minimum");
        return Err(ValidationError::TooShort);
    }

    if length > MAX_LENGTH as i64 {
        debug!(length, "rejected length above maximum");
        return Err(ValidationError::TooLong);
    }

    Ok(length as usize)
}

/// A validated length together with the classes to draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: CharacterClasses,
}

impl GenerationRequest {
    pub fn new(raw_length: &str, classes: CharacterClasses) -> Result<Self, ValidationError> {
        let length = validate_length(raw_length)?;

        if !classes.any() {
            debug!("rejected request without character classes");
            return Err(ValidationError::NoCharacterClasses);
        }

        Ok(Self { length, classes })
    }

    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R) -> GeneratedPassword {
        let pool = CharacterPool::from_classes(&self.classes);
        debug!(length = self.length, pool_size = pool.len(), "generating password");

        GeneratedPassword(generate_password(self.length, &pool, rng))
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars>)", self.0.chars().count())
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
