//! # Wheelbase Shared
//!
//! Shared configuration, constants, and telemetry for the Wheelbase backend.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;

pub use error::AppError;
