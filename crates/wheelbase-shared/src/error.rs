//! Startup error types
//!
//! Errors that can only happen while the server is being brought up.
//! Request-time failures are `DomainError`s in the core crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid listen address {addr}: {source}")]
    ListenAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
}
