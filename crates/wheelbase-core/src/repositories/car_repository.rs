//! Car repository trait (port)

use crate::domain::{Car, CarUpdate, CarWithOwner, NewCar};
use crate::error::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn list_with_owner(&self, limit: i64) -> Result<Vec<CarWithOwner>, DomainError>;

    /// Case-insensitive substring match on brand or model, ordered by id.
    async fn search(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<CarWithOwner>, DomainError>;

    async fn count_matching(&self, query: &str) -> Result<i64, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Car>, DomainError>;

    async fn create(&self, car: &NewCar) -> Result<Car, DomainError>;

    /// Returns `None` when no car with that id exists.
    async fn update(&self, id: i32, update: &CarUpdate) -> Result<Option<Car>, DomainError>;

    /// Returns `false` when no car with that id exists.
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
