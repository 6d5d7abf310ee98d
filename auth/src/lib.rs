//! Authentication utilities library
//!
//! Credential primitives shared by services:
//! - Password hashing (salted scrypt, fixed work factor)
//! - JWT access token issuance and verification
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let token = issuer.issue("rider123").unwrap();
//! assert_eq!(token.expires_at - token.issued_at, Duration::hours(1));
//!
//! let claims = issuer.verify(&token.token).unwrap();
//! assert_eq!(claims.sub, "rider123");
//! ```

pub mod issuer;
pub mod jwt;
pub mod password;

pub use issuer::AccessToken;
pub use issuer::TokenIssuer;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
