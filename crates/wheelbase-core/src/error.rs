//! Domain errors
//!
//! Display strings double as the user-facing messages, so the wording here
//! is part of the API contract. `InvalidCredentials` deliberately covers
//! both unknown-email and wrong-password to resist account enumeration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Email already exists.")]
    DuplicateEmail,

    #[error("{0}")]
    ValidationError(String),

    #[error("User with this email not found")]
    UserNotFound,

    #[error("Car not found")]
    CarNotFound,

    #[error("You do not own this car")]
    NotCarOwner,

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
