use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::DateTime;
use chrono::Utc;
use regex::Regex;
use uuid::Uuid;

use crate::rider::errors::EmailError;
use crate::rider::errors::PasswordPolicyError;
use crate::rider::errors::PhoneNumberError;

/// Country calling code substituted for the national trunk prefix.
///
/// Normalization assumes the French numbering plan only.
const COUNTRY_CALLING_CODE: &str = "+33";

static FR_MOBILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+33[67][0-9]{8}$").expect("French mobile number pattern is valid")
});

/// Rider record as owned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rider {
    pub id: RiderId,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Rider fields handed to the store; it assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRider {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub password_hash: String,
}

/// What the store returns for an authentication lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiderCredentials {
    pub id: RiderId,
    pub password_hash: String,
}

/// Fields the store keeps unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueField {
    Phone,
    Email,
}

impl UniqueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UniqueField::Phone => "phone",
            UniqueField::Email => "email",
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rider unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RiderId(pub Uuid);

impl RiderId {
    /// Generate a new random rider ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RiderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RiderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Mobile phone number in international format (`+33XXXXXXXXX`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize a national-format number and validate it.
    ///
    /// The leading trunk digit is replaced by the country calling code,
    /// so `0600000000` becomes `+33600000000`.
    ///
    /// # Errors
    /// * `InvalidFormat` - Normalized value is not a French mobile number
    pub fn from_national(raw: &str) -> Result<Self, PhoneNumberError> {
        let subscriber: String = raw.chars().skip(1).collect();
        Self::new(format!("{}{}", COUNTRY_CALLING_CODE, subscriber))
    }

    /// Validate an already normalized number.
    ///
    /// # Errors
    /// * `InvalidFormat` - Value is not a French mobile number
    pub fn new(normalized: String) -> Result<Self, PhoneNumberError> {
        if FR_MOBILE_REGEX.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(PhoneNumberError::InvalidFormat(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validated with an RFC 5322 parser and lower-cased, so equality is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email.to_lowercase()))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password, held only for the duration of a request.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub const MIN_LENGTH: usize = 6;

    /// # Errors
    /// * `TooShort` - Fewer than 6 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(password))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Command to register a rider, built from validated input
#[derive(Debug)]
pub struct RegisterRiderCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub password: Password,
}

/// Command to authenticate a rider.
///
/// Only presence is checked on these fields; a malformed email simply
/// fails the lookup.
#[derive(Debug)]
pub struct AuthenticateRiderCommand {
    pub email: String,
    pub password: String,
}
