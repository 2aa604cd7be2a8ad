use thiserror::Error;

use crate::common::{ValidationError, GENERIC_FAILURE};

#[derive(Debug, Error)]
pub enum SignUpError {
    #[error("Application Required")]
    ApplicationRequired,

    #[error("Passwords don't match")]
    PasswordMismatch,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("An account with this email already exists")]
    AccountExists,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Sign-up failed: {0}")]
    Internal(#[from] anyhow::Error),
}

impl SignUpError {
    pub fn user_message(&self) -> String {
        match self {
            SignUpError::ApplicationRequired => format!(
                "{}: Please submit an application on the Creators page and wait for approval before signing up.",
                self
            ),
            SignUpError::Internal(_) => GENERIC_FAILURE.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::accounts::password::MIN_PASSWORD_LENGTH;

    #[test]
    fn test_application_required_message() {
        let err = SignUpError::ApplicationRequired;
        assert_eq!(err.to_string(), "Application Required");
        assert!(err.user_message().starts_with("Application Required"));
    }

    #[test]
    fn test_internal_error_is_hidden() {
        let err = SignUpError::Internal(anyhow::anyhow!("connection reset"));
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_password_too_short_names_minimum() {
        let message = SignUpError::PasswordTooShort.user_message();
        assert!(message.contains(&MIN_PASSWORD_LENGTH.to_string()));
    }
}
