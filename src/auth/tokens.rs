/**
 * Identity Tokens
 *
 * This module handles JWT creation and verification. Tokens encode the
 * user id as the subject and expire one hour after issuance. The signing
 * secret is held in `TokenKeys`, constructed once at startup and passed
 * through application state rather than read from the environment at
 * call sites.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime in seconds (1 hour)
const TOKEN_LIFETIME_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (UUID, stringified)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Token verification failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Signature did not validate or the payload is malformed
    #[error("token is not valid")]
    Invalid,
    /// Current time is past the encoded expiry
    #[error("token has expired")]
    Expired,
}

/// Signing and verification keys derived from the shared secret
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    /// Derive HS256 keys from the configured secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a signed token for a user
///
/// # Arguments
/// * `keys` - Signing keys from application state
/// * `user_id` - User ID to embed as the subject
///
/// # Returns
/// JWT token string, valid for one hour
pub fn create_token(
    keys: &TokenKeys,
    user_id: Uuid,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + TOKEN_LIFETIME_SECS,
        iat: now,
    };

    encode(&Header::default(), &claims, &keys.encoding)
}

/// Verify a token and extract the embedded user id
///
/// # Arguments
/// * `keys` - Verification keys from application state
/// * `token` - JWT token string from the Authorization header
///
/// # Returns
/// The embedded user id, or `TokenError::Expired` / `TokenError::Invalid`
pub fn verify_token(keys: &TokenKeys, token: &str) -> Result<Uuid, TokenError> {
    let validation = Validation::default();

    let data = decode::<Claims>(token, &keys.decoding, &validation).map_err(|e| {
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        }
    })?;

    Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::Invalid)
}
