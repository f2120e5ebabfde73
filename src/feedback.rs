use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::FieldError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern should compile"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(FeedbackForm),
    Invalid(Vec<FieldError>),
}

impl FeedbackForm {
    /// Every failing field, in form order.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::Name);
        }
        if self.email.trim().is_empty() || !is_valid_email(&self.email) {
            errors.push(FieldError::Email);
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::Message);
        }
        errors
    }

    /// Validates and, when valid, takes the fields out of the form leaving it blank.
    /// There's nowhere to send feedback, so accepted submissions are only logged.
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = self.validate();
        if !errors.is_empty() {
            return SubmitOutcome::Invalid(errors);
        }
        let submission = std::mem::take(self);
        match serde_json::to_string(&submission) {
            Ok(json) => log::info!("Feedback submitted {}", json),
            Err(e) => log::warn!("Feedback submitted but couldn't be serialized: {}", e),
        }
        SubmitOutcome::Submitted(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> FeedbackForm {
        FeedbackForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("me@example.com"));
        assert!(is_valid_email("first.last@mail.co.uk"));
        assert!(!is_valid_email("me@example"));
        assert!(!is_valid_email("example.com"));
        assert!(!is_valid_email("me @ example.com"));
    }

    #[test]
    fn test_validate_all_missing() {
        let f = form("  ", "", "\n");
        assert_eq!(
            f.validate(),
            vec![FieldError::Name, FieldError::Email, FieldError::Message]
        );
    }

    #[test]
    fn test_validate_bad_email_only() {
        let f = form("Ann", "ann-at-home", "hello");
        assert_eq!(f.validate(), vec![FieldError::Email]);
    }

    #[test]
    fn test_submit_valid_clears_form() {
        let mut f = form("Ann", "ann@example.com", "Nice site!");
        let outcome = f.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Submitted(form("Ann", "ann@example.com", "Nice site!"))
        );
        assert_eq!(f, FeedbackForm::default());
    }

    #[test]
    fn test_submit_invalid_keeps_fields() {
        let mut f = form("Ann", "", "Nice site!");
        let outcome = f.submit();
        assert_eq!(outcome, SubmitOutcome::Invalid(vec![FieldError::Email]));
        assert_eq!(f.name, "Ann");
        assert_eq!(f.message, "Nice site!");
    }
}
