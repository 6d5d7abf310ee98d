use scrypt::password_hash::rand_core::OsRng;
use scrypt::password_hash::Error as HashError;
use scrypt::password_hash::PasswordHash;
use scrypt::password_hash::PasswordHasher as ScryptPasswordHasher;
use scrypt::password_hash::PasswordVerifier;
use scrypt::password_hash::SaltString;
use scrypt::Params;
use scrypt::Scrypt;

use super::errors::PasswordError;

/// Cost parameter: N = 2^12.
///
/// Verification re-derives with the parameters encoded in the stored digest,
/// so this value must stay a constant for stored and checked costs to agree.
pub const WORK_FACTOR_LOG2: u8 = 12;

const BLOCK_SIZE: u32 = 8;
const PARALLELISM: u32 = 1;
const OUTPUT_LEN: usize = 32;

/// Password hashing implementation.
///
/// Salted scrypt with a fixed work factor, serialized as a PHC string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let params = Params::new(WORK_FACTOR_LOG2, BLOCK_SIZE, PARALLELISM, OUTPUT_LEN)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;
        let salt = SaltString::generate(&mut OsRng);

        Scrypt
            .hash_password_customized(password.as_bytes(), None, None, params, &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// The digest comparison is constant-time. A mismatch is `Ok(false)`;
    /// a malformed digest or any other fault is an error, never a mismatch.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash format is invalid or verification failed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        // PHC strings may legally omit the salt and output segments.
        if parsed_hash.salt.is_none() || parsed_hash.hash.is_none() {
            return Err(PasswordError::VerificationFailed(
                "Password hash is missing its salt or output".to_string(),
            ));
        }

        match Scrypt.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}
