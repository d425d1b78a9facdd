//! Session Tokens
//!
//! Stateless HS256 JWTs binding a user identifier and issue time. Tokens
//! are never persisted; verification is a pure signature and expiry check.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::backend::error::ApiError;

/// Fixed token validity: 30 days.
const TOKEN_VALIDITY_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signing and verification keys, built once from the configured secret.
#[derive(Clone)]
pub struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Keys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Create a signed token for a user.
pub fn create_token(keys: &Keys, user_id: Uuid) -> Result<String, ApiError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + TOKEN_VALIDITY_SECS,
        iat: now,
    };

    encode(&Header::default(), &claims, &keys.encoding).map_err(ApiError::TokenCreation)
}

/// Verify a token and return its claims.
///
/// Any signature or expiry failure maps to the same credential error.
pub fn verify_token(keys: &Keys, token: &str) -> Result<Claims, ApiError> {
    decode::<Claims>(token, &keys.decoding, &Validation::default())
        .map(|data| data.claims)
        .map_err(|_| ApiError::InvalidCredential)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> Keys {
        Keys::new(b"test-secret")
    }

    #[test]
    fn test_create_token() {
        let token = create_token(&test_keys(), Uuid::new_v4()).unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_token_roundtrip() {
        let keys = test_keys();
        let user_id = Uuid::new_v4();
        let token = create_token(&keys, user_id).unwrap();

        let claims = verify_token(&keys, &token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(verify_token(&test_keys(), "invalid.token.here").is_err());
    }

    #[test]
    fn test_verify_rejects_tampered_signature() {
        let keys = test_keys();
        let token = create_token(&keys, Uuid::new_v4()).unwrap();

        // Flip the last character of the signature segment.
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(verify_token(&keys, &tampered).is_err());
    }

    #[test]
    fn test_verify_rejects_foreign_secret() {
        let token = create_token(&Keys::new(b"one-secret"), Uuid::new_v4()).unwrap();
        assert!(verify_token(&Keys::new(b"another-secret"), &token).is_err());
    }
}
