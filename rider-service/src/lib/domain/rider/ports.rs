use async_trait::async_trait;

use crate::rider::errors::PasswordError;
use crate::rider::errors::RiderError;
use crate::rider::models::AuthenticateRiderCommand;
use crate::rider::models::NewRider;
use crate::rider::models::RegisterRiderCommand;
use crate::rider::models::Rider;
use crate::rider::models::RiderCredentials;
use crate::rider::models::UniqueField;

/// Port for rider domain service operations.
#[async_trait]
pub trait RiderServicePort: Send + Sync + 'static {
    /// Register a new rider from a validated command.
    ///
    /// Phone uniqueness is checked before email uniqueness; the first
    /// conflict ends the pipeline before any hashing or write.
    ///
    /// # Errors
    /// * `PhoneNumberAlreadyTaken` - Phone is already registered
    /// * `EmailAddressAlreadyTaken` - Email is already registered
    /// * `Password` - Hashing primitive failed (fatal)
    /// * `DatabaseError` - Store operation failed
    async fn register_rider(&self, command: RegisterRiderCommand) -> Result<Rider, RiderError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    /// * `IncorrectCredentials` - Unknown email or wrong password
    /// * `Password` - Verification primitive failed (fatal)
    /// * `Token` - Token signing failed
    /// * `DatabaseError` - Store operation failed
    async fn authenticate_rider(
        &self,
        command: AuthenticateRiderCommand,
    ) -> Result<auth::AccessToken, RiderError>;

    /// List every rider record.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_riders(&self) -> Result<Vec<Rider>, RiderError>;
}

/// Persistence operations for rider records.
#[async_trait]
pub trait RiderRepository: Send + Sync + 'static {
    /// Whether a rider already holds `value` in `field`.
    ///
    /// Email comparison is case-insensitive.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn exists(&self, field: UniqueField, value: &str) -> Result<bool, RiderError>;

    /// Persist a new rider, assigning its id and creation time.
    ///
    /// # Errors
    /// * `PhoneNumberAlreadyTaken` - Unique constraint on phone violated
    /// * `EmailAddressAlreadyTaken` - Unique constraint on email violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, rider: NewRider) -> Result<Rider, RiderError>;

    /// Look up the id and password hash for an email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<RiderCredentials>, RiderError>;

    /// Retrieve all riders from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Rider>, RiderError>;
}

/// Slow, salted one-way hashing of credentials.
///
/// Both operations are CPU-bound and are driven from the blocking pool.
pub trait CredentialHasher: Send + Sync + 'static {
    /// # Errors
    /// * `HashingFailed` - The primitive failed
    fn hash(&self, plaintext: &str) -> Result<String, PasswordError>;

    /// Constant-time comparison of `plaintext` against a stored digest.
    ///
    /// # Errors
    /// * `VerificationFailed` - Malformed digest or primitive failure
    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, PasswordError>;
}
