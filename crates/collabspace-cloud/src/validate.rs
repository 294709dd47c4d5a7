//! Sign-in form validation, applied before any request leaves the client.
//! The messages are the exact strings the auth screens display.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use collabspace_core::constants::limits;

/// One failed form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

pub fn validate_email(email: &str) -> Option<FieldError> {
    if email_regex().is_match(email) {
        None
    } else {
        Some(FieldError {
            field: "email",
            message: "Please enter a valid email address.",
        })
    }
}

pub fn validate_password(password: &str) -> Option<FieldError> {
    if password.chars().count() >= limits::MIN_PASSWORD_CHARS {
        None
    } else {
        Some(FieldError {
            field: "password",
            message: "Password must be at least 8 characters long.",
        })
    }
}

pub fn validate_otp(code: &str) -> Option<FieldError> {
    let ok = code.chars().count() == limits::OTP_DIGITS && code.chars().all(|c| c.is_ascii_digit());
    if ok {
        None
    } else {
        Some(FieldError {
            field: "otp",
            message: "One-time password must be 6 digits.",
        })
    }
}

/// The sign-in form as submitted to the backend.
#[derive(Debug, Clone, Serialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = [
            validate_email(&self.email),
            validate_password(&self.password),
        ]
        .into_iter()
        .flatten()
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
