//! Synchronous input checks run before any I/O.
//!
//! Presence failures short-circuit everything else. Format failures are
//! accumulated so the client sees every offending field at once.

use crate::rider::errors::ErrorCode;
use crate::rider::errors::ValidationErrors;
use crate::rider::models::AuthenticateRiderCommand;
use crate::rider::models::EmailAddress;
use crate::rider::models::Password;
use crate::rider::models::PhoneNumber;
use crate::rider::models::RegisterRiderCommand;

/// Raw registration input, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

/// Raw authentication input, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthenticationRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Fail with `missing_fields` unless every field holds a non-empty value.
pub fn validate_presence(fields: &[Option<&str>]) -> Result<(), ValidationErrors> {
    if fields.iter().all(|field| field.is_some_and(|v| !v.is_empty())) {
        Ok(())
    } else {
        Err(ErrorCode::MissingFields.into())
    }
}

/// Validate a registration and turn it into a command.
///
/// # Errors
/// * `missing_fields` alone, if any field is absent or empty
/// * otherwise every applicable of `incorrect_phone_number`,
///   `incorrect_email_address`, `password_too_short`, in that order
pub fn validate_registration(
    request: RegistrationRequest,
) -> Result<RegisterRiderCommand, ValidationErrors> {
    let RegistrationRequest {
        first_name: Some(first_name),
        last_name: Some(last_name),
        email: Some(email),
        phone: Some(phone),
        password: Some(password),
    } = request
    else {
        return Err(ErrorCode::MissingFields.into());
    };

    validate_presence(&[
        Some(first_name.as_str()),
        Some(last_name.as_str()),
        Some(email.as_str()),
        Some(phone.as_str()),
        Some(password.as_str()),
    ])?;

    let mut errors = ValidationErrors::new();

    let phone = PhoneNumber::from_national(&phone)
        .map_err(|e| errors.push(e.code()))
        .ok();
    let email = EmailAddress::new(email)
        .map_err(|e| errors.push(e.code()))
        .ok();
    let password = Password::new(password)
        .map_err(|e| errors.push(e.code()))
        .ok();

    match (phone, email, password) {
        (Some(phone), Some(email), Some(password)) if errors.is_empty() => {
            Ok(RegisterRiderCommand {
                first_name,
                last_name,
                email,
                phone,
                password,
            })
        }
        _ => Err(errors),
    }
}

/// Check presence of the authentication fields.
///
/// # Errors
/// * `missing_fields` - email or password absent or empty
pub fn validate_authentication(
    request: AuthenticationRequest,
) -> Result<AuthenticateRiderCommand, ValidationErrors> {
    validate_presence(&[request.email.as_deref(), request.password.as_deref()])?;

    match (request.email, request.password) {
        (Some(email), Some(password)) => Ok(AuthenticateRiderCommand { email, password }),
        _ => Err(ErrorCode::MissingFields.into()),
    }
}
