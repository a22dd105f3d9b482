//! JWT session token handling

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token creation failed: {0}")]
    CreationError(String),
    #[error("Token validation failed: {0}")]
    ValidationError(String),
}

/// Claims embedded in a session token. The subject existed at issuance time;
/// verification never touches the database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

pub struct JwtService {
    secret: String,
    token_expiry: i64,
}

impl JwtService {
    pub fn new(secret: String, token_expiry: i64) -> Self {
        Self {
            secret,
            token_expiry,
        }
    }

    /// Mint a signed session token for a user.
    pub fn issue(&self, user_id: i32, email: &str) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| JwtError::CreationError(e.to_string()))
    }

    /// Decode and verify a token. Missing, malformed, expired, and
    /// wrongly-signed tokens all collapse into a single error.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| JwtError::ValidationError(e.to_string()))
    }
}
