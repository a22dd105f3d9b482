//! Password hashing with bcrypt

use thiserror::Error;

/// Moderate work factor, matching the credential store's existing hashes.
const HASH_COST: u32 = 10;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Hash error: {0}")]
    HashError(String),
    #[error("Verification failed")]
    VerificationFailed,
}

pub struct PasswordService;

impl PasswordService {
    pub fn hash(password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, HASH_COST).map_err(|e| PasswordError::HashError(e.to_string()))
    }

    pub fn verify(password: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, hash).map_err(|e| PasswordError::HashError(e.to_string()))
    }
}
