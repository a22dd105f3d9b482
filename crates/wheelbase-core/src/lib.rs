//! # Wheelbase Core
//!
//! Domain entities, services, and repository traits for the Wheelbase backend.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

pub use domain::*;
pub use error::DomainError;
