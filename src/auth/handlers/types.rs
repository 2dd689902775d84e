/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * registration and login handlers. Response fields use camelCase to
 * match the wire format the mobile client expects.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request
///
/// Fields default to empty strings so that a missing field surfaces as
/// a validation error rather than a deserialization failure.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    /// User's chosen username (at least 3 chars)
    #[serde(default)]
    pub username: String,
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (hashed before storage)
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (verified against the stored hash)
    #[serde(default)]
    pub password: String,
}

/// Auth response
///
/// Returned by register and login. Contains the identity token and the
/// public user projection for immediate authentication.
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    /// Human-readable status message
    pub message: String,
    /// Public user information (no password hash)
    pub user: UserResponse,
    /// Identity token (1-hour expiration)
    pub token: String,
}

/// Public user projection
///
/// The subset of user fields safe to expose to clients.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's username
    pub username: String,
    /// User's email address
    pub email: String,
    /// Avatar URL derived from the username
    pub profile_image: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            profile_image: user.profile_image.clone(),
        }
    }
}
