use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Machine-readable failure codes returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    MissingFields,
    IncorrectPhoneNumber,
    IncorrectEmailAddress,
    PasswordTooShort,
    PhoneNumberAlreadyTaken,
    EmailAddressAlreadyTaken,
    IncorrectCredentials,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingFields => "missing_fields",
            ErrorCode::IncorrectPhoneNumber => "incorrect_phone_number",
            ErrorCode::IncorrectEmailAddress => "incorrect_email_address",
            ErrorCode::PasswordTooShort => "password_too_short",
            ErrorCode::PhoneNumberAlreadyTaken => "phone_number_already_taken",
            ErrorCode::EmailAddressAlreadyTaken => "email_address_already_taken",
            ErrorCode::IncorrectCredentials => "incorrect_credentials",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, accumulated validation failures for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ErrorCode>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, code: ErrorCode) {
        self.0.push(code);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn codes(&self) -> &[ErrorCode] {
        &self.0
    }
}

impl From<ErrorCode> for ValidationErrors {
    fn from(code: ErrorCode) -> Self {
        Self(vec![code])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.0.iter().map(ErrorCode::as_str).collect();
        f.write_str(&codes.join(", "))
    }
}

/// Error for PhoneNumber validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhoneNumberError {
    #[error("Not a French mobile number: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for Password policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
}

impl PhoneNumberError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::IncorrectPhoneNumber
    }
}

impl EmailError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::IncorrectEmailAddress
    }
}

impl PasswordPolicyError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::PasswordTooShort
    }
}

/// Error for credential hashing operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}

/// Top-level error for all rider-related operations
#[derive(Debug, Clone, Error)]
pub enum RiderError {
    // Request-level errors, reported to the client as codes
    #[error("Phone number already taken: {0}")]
    PhoneNumberAlreadyTaken(String),

    #[error("Email address already taken: {0}")]
    EmailAddressAlreadyTaken(String),

    #[error("Incorrect credentials")]
    IncorrectCredentials,

    // Fatal errors, never downgraded to a code
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::JwtError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl RiderError {
    /// Client-facing codes, or `None` for fatal errors.
    pub fn codes(&self) -> Option<Vec<ErrorCode>> {
        match self {
            RiderError::PhoneNumberAlreadyTaken(_) => Some(vec![ErrorCode::PhoneNumberAlreadyTaken]),
            RiderError::EmailAddressAlreadyTaken(_) => {
                Some(vec![ErrorCode::EmailAddressAlreadyTaken])
            }
            RiderError::IncorrectCredentials => Some(vec![ErrorCode::IncorrectCredentials]),
            RiderError::Password(_)
            | RiderError::Token(_)
            | RiderError::DatabaseError(_) => None,
        }
    }
}
