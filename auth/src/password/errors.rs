use thiserror::Error;

/// Faults raised by the password hashing primitive.
///
/// A wrong password is not an error; these variants mean the primitive itself
/// could not do its job and the caller must not treat them as a mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
