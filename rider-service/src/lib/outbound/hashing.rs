use crate::rider::errors::PasswordError;
use crate::rider::ports::CredentialHasher;

/// Binds the domain hashing port to the `auth` scrypt hasher.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScryptCredentialHasher {
    inner: auth::PasswordHasher,
}

impl ScryptCredentialHasher {
    pub fn new() -> Self {
        Self {
            inner: auth::PasswordHasher::new(),
        }
    }
}

impl CredentialHasher for ScryptCredentialHasher {
    fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        self.inner.hash(plaintext).map_err(PasswordError::from)
    }

    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, PasswordError> {
        self.inner.verify(plaintext, digest).map_err(PasswordError::from)
    }
}

impl From<auth::PasswordError> for PasswordError {
    fn from(err: auth::PasswordError) -> Self {
        match err {
            auth::PasswordError::HashingFailed(msg) => PasswordError::HashingFailed(msg),
            auth::PasswordError::VerificationFailed(msg) => PasswordError::VerificationFailed(msg),
        }
    }
}
