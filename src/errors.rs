use std::path::PathBuf;

use thiserror::Error;

use crate::password::{ MAX_LENGTH, MIN_LENGTH };

/// Rejections reported back to whoever filled in the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Password length should be a whole number")]
    NotANumber,

    #[error("Password should be minimum {} characters", MIN_LENGTH)]
    TooShort,

    #[error("Password should be max {} characters", MAX_LENGTH)]
    TooLong,

    #[error("Select at least one character class")]
    NoCharacterClasses,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Could not load config from {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Could not initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_bounds() {
        assert_eq!(ValidationError::TooShort.to_string(), "Password should be minimum 8 characters");
        assert_eq!(ValidationError::TooLong.to_string(), "Password should be max 16 characters");
        assert_eq!(ValidationError::Required.to_string(), "This field is required");
    }

    #[test]
    fn validation_errors_exit_with_usage_code() {
        let err: AppError = ValidationError::NotANumber.into();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Password length should be a whole number");

        let err: AppError = std::io::Error::other("broken pipe").into();
        assert_eq!(err.exit_code(), 1);
    }
}
