use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Issues signed, time-limited access tokens.
///
/// The signing secret and the ttl are fixed at construction and never change
/// for the lifetime of the issuer.
pub struct TokenIssuer {
    jwt_handler: JwtHandler,
    ttl: Duration,
}

/// A freshly issued access token.
///
/// Not stored anywhere; `token` is self-verifying with the signing secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - Secret key for JWT signing
    /// * `ttl` - Lifetime of every issued token
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            ttl,
        }
    }

    /// Issue a token for `subject`, valid from now for the configured ttl.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, subject: impl ToString) -> Result<AccessToken, JwtError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token with an explicit issue instant.
    ///
    /// # Errors
    /// * `ExpiryOutOfRange` - `issued_at + ttl` is not a representable instant
    /// * `EncodingFailed` - Token signing failed
    pub fn issue_at(
        &self,
        subject: impl ToString,
        issued_at: DateTime<Utc>,
    ) -> Result<AccessToken, JwtError> {
        let subject = subject.to_string();
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or(JwtError::ExpiryOutOfRange)?;
        let token = self
            .jwt_handler
            .encode(&Claims::new(&subject, expires_at))?;

        Ok(AccessToken {
            token,
            subject,
            issued_at,
            expires_at,
        })
    }

    /// Validate and decode a token issued with the same secret.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_expiry_is_issue_time_plus_ttl() {
        let issuer = TokenIssuer::new(SECRET, Duration::seconds(3600));

        let token = issuer.issue("rider123").expect("Failed to issue token");

        assert_eq!(token.expires_at - token.issued_at, Duration::seconds(3600));
        assert_eq!(token.subject, "rider123");
    }

    #[test]
    fn test_issued_token_carries_subject_and_expiry() {
        let issuer = TokenIssuer::new(SECRET, Duration::hours(24));

        let token = issuer.issue("rider123").expect("Failed to issue token");
        let claims = issuer.verify(&token.token).expect("Failed to verify token");

        assert_eq!(claims.sub, "rider123");
        assert_eq!(claims.exp, token.expires_at.timestamp());
    }

    #[test]
    fn test_issue_at_fixed_instant() {
        let issuer = TokenIssuer::new(SECRET, Duration::minutes(15));
        let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let token = issuer
            .issue_at("rider123", issued_at)
            .expect("Failed to issue token");

        assert_eq!(token.issued_at, issued_at);
        assert_eq!(
            token.expires_at,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_oversized_ttl_is_an_error() {
        let issuer = TokenIssuer::new(SECRET, Duration::seconds(10_000_000_000_000));

        let result = issuer.issue("rider123");

        assert_eq!(result.unwrap_err(), JwtError::ExpiryOutOfRange);
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let issuer = TokenIssuer::new(SECRET, Duration::hours(1));
        let other = TokenIssuer::new(b"another_secret_key_at_least_32_bytes", Duration::hours(1));

        let token = other.issue("rider123").unwrap();

        assert!(issuer.verify(&token.token).is_err());
    }
}
