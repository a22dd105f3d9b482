//! User repository trait (port)
//!
//! The credential store capability consumed by the auth flow: look a user
//! up by email, insert a new one. Injected so services are testable without
//! a database.

use crate::domain::{NewUser, User};
use crate::error::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
}
