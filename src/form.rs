use rand::Rng;
use tracing::{ debug, info };

use crate::config::Config;
use crate::errors::ValidationError;
use crate::password::{ CharacterClass, CharacterClasses, GeneratedPassword, GenerationRequest };

pub const NO_PASSWORD: &str = "No password";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState<'a> {
    Idle,
    Generated(&'a GeneratedPassword),
}

/// The generator form: a length field, four class toggles and the last result.
#[derive(Debug, Clone)]
pub struct PasswordForm {
    length_input: String,
    classes: CharacterClasses,
    generated: Option<GeneratedPassword>,
}

impl PasswordForm {
    pub fn new() -> Self {
        Self {
            length_input: String::new(),
            classes: CharacterClasses::default(),
            generated: None,
        }
    }

    pub fn with_defaults(config: &Config) -> Self {
        Self {
            length_input: config.length_input(),
            classes: config.classes(),
            ..Self::new()
        }
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn classes(&self) -> CharacterClasses {
        self.classes
    }

    pub fn state(&self) -> FormState<'_> {
        match &self.generated {
            None => FormState::Idle,
            Some(password) => FormState::Generated(password),
        }
    }

    pub fn set_length(&mut self, raw: &str) {
        self.length_input = raw.to_string();
    }

    pub fn set_classes(&mut self, classes: CharacterClasses) {
        self.classes = classes;
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.classes.toggle(class);
        debug!(%class, enabled = self.classes.is_enabled(class), "toggled class");
    }

    /// Validates the form and generates a fresh password.
    ///
    /// A rejected submission leaves the form as it was.
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&GeneratedPassword, ValidationError> {
        let request = GenerationRequest::new(&self.length_input, self.classes)?;
        let password = request.generate(rng);
        info!(length = password.as_str().chars().count(), "password generated");

        Ok(self.generated.insert(password))
    }

    /// Back to Idle with an empty length and lowercase as the only class.
    pub fn reset(&mut self) {
        self.length_input.clear();
        self.classes = CharacterClasses::reset_defaults();
        self.generated = None;
        debug!("form reset");
    }

    pub fn display(&self) -> &str {
        match self.state() {
            FormState::Idle => NO_PASSWORD,
            FormState::Generated(password) => password.as_str(),
        }
    }
}

impl Default for PasswordForm {
    fn default() -> Self {
        Self::new()
    }
}
