//! Required-field guard run before a submission is dispatched

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{ContactField, FormState};

/// Same grammar browsers apply to `<input type="email">`
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Meno nemôže byť prázdne")]
    MissingName,
    #[error("E-mail nemôže byť prázdny")]
    MissingEmail,
    #[error("Zadajte platnú e-mailovú adresu")]
    InvalidEmail,
    #[error("Správa nemôže byť prázdna")]
    MissingMessage,
}

impl ValidationError {
    pub fn field(&self) -> ContactField {
        match self {
            ValidationError::MissingName => ContactField::Name,
            ValidationError::MissingEmail | ValidationError::InvalidEmail => ContactField::Email,
            ValidationError::MissingMessage => ContactField::Message,
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

/// Checks fields in form order and reports the first problem
pub fn validate(state: &FormState) -> Result<(), ValidationError> {
    if state.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if state.email.trim().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !is_valid_email(&state.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if state.message.trim().is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState {
            name: "Ján".into(),
            email: "jan@example.com".into(),
            phone: String::new(),
            message: "Dobrý deň".into(),
            submitting: false,
        }
    }

    #[test]
    fn test_phone_is_optional() {
        assert_eq!(validate(&filled()), Ok(()));
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut state = filled();
        state.message = "   \n".into();
        assert_eq!(validate(&state), Err(ValidationError::MissingMessage));
    }

    #[test]
    fn test_first_error_wins() {
        let state = FormState::default();
        let err = validate(&state).unwrap_err();
        assert_eq!(err, ValidationError::MissingName);
        assert_eq!(err.field(), ContactField::Name);
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("maria.svobodova@example.com"));
        assert!(is_valid_email("info@fenjislovakia.eu"));
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("jan@"));
        assert!(!is_valid_email("@example.com"));

        let mut state = filled();
        state.email = "jan@@example.com".into();
        assert_eq!(validate(&state), Err(ValidationError::InvalidEmail));
    }
}
