//! Contact form validation.
//!
//! The form needs at least one way to reach the sender. Phone numbers are
//! 10-15 digits with an optional leading `+`. Name, request type and message
//! are checked only when the form actually has those fields, using the same
//! rules the server applies.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::str::FromStr;

use crate::consts::{NAME_MIN_CHARS, PHONE_MAX_DIGITS, PHONE_MIN_DIGITS};

/// Validation failure; `Display` is the text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please provide either an email or phone number.")]
    MissingContact,
    #[error("Please enter a valid phone number (10-15 digits, optional + prefix).")]
    InvalidPhone,
    #[error("Name must be at least 2 characters long.")]
    NameTooShort,
    #[error("Invalid request type.")]
    InvalidRequestType,
    #[error("Message is required.")]
    MissingMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    Custom,
    Alteration,
    Consultation,
}

impl FromStr for RequestType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "custom" => Ok(Self::Custom),
            "alteration" => Ok(Self::Alteration),
            "consultation" => Ok(Self::Consultation),
            _ => Err(FormError::InvalidRequestType),
        }
    }
}

/// Raw field values as read from the form. `None` means the field is absent.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: String,
    pub phone: String,
    pub request_type: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// Check the fields in order; the first failure wins.
    ///
    /// # Errors
    ///
    /// Returns the [`FormError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), FormError> {
        let email = self.email.trim();
        let phone = self.phone.trim();
        if email.is_empty() && phone.is_empty() {
            return Err(FormError::MissingContact);
        }
        if !phone.is_empty() && !is_valid_phone(phone) {
            return Err(FormError::InvalidPhone);
        }
        if let Some(name) = &self.name {
            if name.trim().chars().count() < NAME_MIN_CHARS {
                return Err(FormError::NameTooShort);
            }
        }
        if let Some(kind) = &self.request_type {
            kind.parse::<RequestType>()?;
        }
        if let Some(message) = &self.message {
            if message.trim().is_empty() {
                return Err(FormError::MissingMessage);
            }
        }
        Ok(())
    }
}

/// `^\+?\d{10,15}$` on the trimmed input.
#[must_use]
pub fn is_valid_phone(raw: &str) -> bool {
    let digits = raw.trim();
    let digits = digits.strip_prefix('+').unwrap_or(digits);
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}
