use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::{MIN_NAME_CHARS, MIN_PHONE_DIGITS};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(FieldError::new(Field::Name, "Please enter your full name"));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), FieldError> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(FieldError::new(Field::Phone, "Phone is required"));
    }
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < MIN_PHONE_DIGITS {
        return Err(FieldError::new(Field::Phone, "Enter a valid phone number"));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    let invalid = || FieldError::new(Field::Email, "Enter a valid email");
    if email.starts_with('.') || email.contains("..") {
        return Err(invalid());
    }
    if !EMAIL_RE.is_match(email) {
        return Err(invalid());
    }
    Ok(())
}
