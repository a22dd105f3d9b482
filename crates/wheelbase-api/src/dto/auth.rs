//! Auth request/response payloads

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signup request payload. Absent fields deserialize to empty strings so
/// they fail the same validation as explicitly empty ones.
#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

/// Login request payload
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Auth action response: `{success, message, token?}`
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl AuthResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            token: None,
        }
    }

    pub fn with_token(message: &str, token: String) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            token: Some(token),
        }
    }
}
