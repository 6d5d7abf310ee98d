use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token claims.
///
/// Subject and expiry are the only claims carried. Any verifier holding the
/// signing secret can check the HS256 signature over exactly these fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (rider identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    pub fn new(subject: impl ToString, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
        }
    }
}
