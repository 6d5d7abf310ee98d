use std::sync::Arc;

use async_trait::async_trait;
use auth::AccessToken;
use auth::TokenIssuer;
use tokio::sync::OnceCell;

use crate::rider::errors::PasswordError;
use crate::rider::errors::RiderError;
use crate::rider::models::AuthenticateRiderCommand;
use crate::rider::models::EmailAddress;
use crate::rider::models::NewRider;
use crate::rider::models::Password;
use crate::rider::models::PhoneNumber;
use crate::rider::models::RegisterRiderCommand;
use crate::rider::models::Rider;
use crate::rider::models::UniqueField;
use crate::rider::ports::CredentialHasher;
use crate::rider::ports::RiderRepository;
use crate::rider::ports::RiderServicePort;

/// Plaintext behind the decoy digest. The outcome of a decoy verify is
/// discarded, so a login that happens to use it is still rejected.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-emails";

/// Domain service implementation for rider operations.
///
/// Each operation is a linear chain of awaited stages; the first failing
/// stage returns and nothing after it runs.
pub struct RiderService<RR, CH>
where
    RR: RiderRepository,
    CH: CredentialHasher,
{
    repository: Arc<RR>,
    hasher: Arc<CH>,
    token_issuer: Arc<TokenIssuer>,
    decoy_digest: OnceCell<String>,
}

impl<RR, CH> RiderService<RR, CH>
where
    RR: RiderRepository,
    CH: CredentialHasher,
{
    /// Create a new rider service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Rider persistence implementation
    /// * `hasher` - Credential hashing implementation
    /// * `token_issuer` - Access token issuer, already holding secret and ttl
    pub fn new(repository: Arc<RR>, hasher: Arc<CH>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            repository,
            hasher,
            token_issuer,
            decoy_digest: OnceCell::new(),
        }
    }

    /// Phone first, then email. Each check is a separate query, so this is
    /// advisory; the store's unique constraints settle concurrent races.
    async fn ensure_unique(
        &self,
        phone: &PhoneNumber,
        email: &EmailAddress,
    ) -> Result<(), RiderError> {
        if self
            .repository
            .exists(UniqueField::Phone, phone.as_str())
            .await?
        {
            return Err(RiderError::PhoneNumberAlreadyTaken(phone.to_string()));
        }

        if self
            .repository
            .exists(UniqueField::Email, email.as_str())
            .await?
        {
            return Err(RiderError::EmailAddressAlreadyTaken(email.to_string()));
        }

        Ok(())
    }

    async fn hash_password(&self, password: Password) -> Result<String, RiderError> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.hash(password.expose()))
            .await
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
            .map_err(RiderError::from)
    }

    /// Digest verified against when the email is unknown, so both rejection
    /// paths pay for one key derivation. Hashed once, on first use.
    async fn decoy_digest(&self) -> Result<String, RiderError> {
        let hasher = Arc::clone(&self.hasher);

        self.decoy_digest
            .get_or_try_init(|| async move {
                tokio::task::spawn_blocking(move || hasher.hash(DECOY_PASSWORD))
                    .await
                    .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
                    .map_err(RiderError::from)
            })
            .await
            .cloned()
    }

    async fn verify_password(&self, password: String, digest: String) -> Result<bool, RiderError> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| PasswordError::VerificationFailed(e.to_string()))?
            .map_err(RiderError::from)
    }
}

#[async_trait]
impl<RR, CH> RiderServicePort for RiderService<RR, CH>
where
    RR: RiderRepository,
    CH: CredentialHasher,
{
    async fn register_rider(&self, command: RegisterRiderCommand) -> Result<Rider, RiderError> {
        self.ensure_unique(&command.phone, &command.email).await?;

        let password_hash = self.hash_password(command.password).await?;

        let rider = self
            .repository
            .create(NewRider {
                first_name: command.first_name,
                last_name: command.last_name,
                email: command.email,
                phone: command.phone,
                password_hash,
            })
            .await?;

        tracing::info!(rider_id = %rider.id, "Rider registered");

        Ok(rider)
    }

    async fn authenticate_rider(
        &self,
        command: AuthenticateRiderCommand,
    ) -> Result<AccessToken, RiderError> {
        let Some(credentials) = self
            .repository
            .find_credentials_by_email(&command.email)
            .await?
        else {
            let decoy = self.decoy_digest().await?;
            self.verify_password(command.password, decoy).await?;

            tracing::debug!("Authentication rejected: unknown email");
            return Err(RiderError::IncorrectCredentials);
        };

        if !self
            .verify_password(command.password, credentials.password_hash)
            .await?
        {
            tracing::debug!(rider_id = %credentials.id, "Authentication rejected: wrong password");
            return Err(RiderError::IncorrectCredentials);
        }

        let token = self.token_issuer.issue(credentials.id)?;

        tracing::info!(
            rider_id = %credentials.id,
            expires_at = %token.expires_at,
            "Rider authenticated"
        );

        Ok(token)
    }

    async fn list_riders(&self) -> Result<Vec<Rider>, RiderError> {
        self.repository.list_all().await
    }
}
