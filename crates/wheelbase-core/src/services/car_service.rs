//! Car directory service: listing, search, and owner-scoped mutation

use std::sync::Arc;
use tracing::{info, warn};

use wheelbase_shared::constants::{DASHBOARD_LISTING_SIZE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

use crate::domain::{Car, CarUpdate, CarWithOwner, NewCar};
use crate::error::DomainError;
use crate::repositories::{CarRepository, UserRepository};

pub struct CarService<C: CarRepository, U: UserRepository> {
    car_repo: Arc<C>,
    user_repo: Arc<U>,
}

/// Input for adding a car; the owner is resolved by email.
#[derive(Debug, Clone)]
pub struct AddCarInput {
    pub email: String,
    pub brand: String,
    pub model: String,
    pub fuel_type: String,
    pub price: i64,
}

/// Partial edit payload.
#[derive(Debug, Clone, Default)]
pub struct UpdateCarInput {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub fuel_type: Option<String>,
    pub price: Option<i64>,
    pub owner_id: Option<i32>,
}

/// One page of search results.
#[derive(Debug, Clone)]
pub struct CarPage {
    pub cars: Vec<CarWithOwner>,
    pub total: i64,
}

impl<C: CarRepository, U: UserRepository> CarService<C, U> {
    pub fn new(car_repo: Arc<C>, user_repo: Arc<U>) -> Self {
        Self {
            car_repo,
            user_repo,
        }
    }

    /// Cars shown on the dashboard (first 16, with owner names).
    pub async fn list_cars(&self) -> Result<Vec<CarWithOwner>, DomainError> {
        self.car_repo.list_with_owner(DASHBOARD_LISTING_SIZE).await
    }

    /// Paginated case-insensitive search on brand or model.
    pub async fn search_cars(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<CarPage, DomainError> {
        let page = page.max(1);
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size.min(MAX_PAGE_SIZE)
        };
        let offset = i64::from(page - 1) * i64::from(page_size);

        let cars = self
            .car_repo
            .search(query, offset, i64::from(page_size))
            .await?;
        let total = self.car_repo.count_matching(query).await?;

        Ok(CarPage { cars, total })
    }

    /// Add a car owned by the user registered under `input.email`.
    pub async fn add_car(&self, input: &AddCarInput) -> Result<Car, DomainError> {
        if input.email.is_empty()
            || input.brand.is_empty()
            || input.model.is_empty()
            || input.fuel_type.is_empty()
            || input.price == 0
        {
            return Err(DomainError::ValidationError(
                "All fields are required".to_string(),
            ));
        }

        let owner = self
            .user_repo
            .find_by_email(&input.email)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let car = self
            .car_repo
            .create(&NewCar {
                brand: input.brand.clone(),
                model: input.model.clone(),
                fuel_type: input.fuel_type.clone(),
                price: input.price,
                owner_id: owner.id,
            })
            .await?;

        info!("Car {} added for owner {}", car.id, owner.id);
        Ok(car)
    }

    /// Edit a car. Only the owner may edit.
    pub async fn update_car(
        &self,
        id: i32,
        input: &UpdateCarInput,
        acting_user_id: i32,
    ) -> Result<Car, DomainError> {
        self.require_owner(id, acting_user_id).await?;

        // An ownership transfer must point at a real account, otherwise the
        // foreign key would reject it after the fact.
        if let Some(new_owner) = input.owner_id {
            self.user_repo
                .find_by_id(new_owner)
                .await?
                .ok_or(DomainError::UserNotFound)?;
        }

        let update = CarUpdate {
            brand: input.brand.clone(),
            model: input.model.clone(),
            fuel_type: input.fuel_type.clone(),
            price: input.price,
            owner_id: input.owner_id,
        };

        let updated = self
            .car_repo
            .update(id, &update)
            .await?
            .ok_or(DomainError::CarNotFound)?;

        info!("Car {} updated by user {}", id, acting_user_id);
        Ok(updated)
    }

    /// Delete a car. Only the owner may delete.
    pub async fn delete_car(&self, id: i32, acting_user_id: i32) -> Result<(), DomainError> {
        self.require_owner(id, acting_user_id).await?;

        let deleted = self.car_repo.delete(id).await?;
        if !deleted {
            return Err(DomainError::CarNotFound);
        }

        info!("Car {} deleted by user {}", id, acting_user_id);
        Ok(())
    }

    async fn require_owner(&self, car_id: i32, acting_user_id: i32) -> Result<(), DomainError> {
        let car = self
            .car_repo
            .find_by_id(car_id)
            .await?
            .ok_or(DomainError::CarNotFound)?;

        if car.owner_id != acting_user_id {
            warn!(
                "User {} denied mutation of car {} owned by {}",
                acting_user_id, car_id, car.owner_id
            );
            return Err(DomainError::NotCarOwner);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::repositories::{MockCarRepository, MockUserRepository};
    use chrono::Utc;
    use mockall::predicate::eq;

    fn car(id: i32, owner_id: i32) -> Car {
        Car {
            id,
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            fuel_type: "Petrol".to_string(),
            price: 45,
            owner_id,
        }
    }

    fn service(
        cars: MockCarRepository,
        users: MockUserRepository,
    ) -> CarService<MockCarRepository, MockUserRepository> {
        CarService::new(Arc::new(cars), Arc::new(users))
    }

    #[tokio::test]
    async fn add_car_rejects_unknown_owner_email() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        let cars = MockCarRepository::new();

        let input = AddCarInput {
            email: "nobody@x.com".to_string(),
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            fuel_type: "Petrol".to_string(),
            price: 45,
        };
        let err = service(cars, users).add_car(&input).await.unwrap_err();
        assert!(matches!(err, DomainError::UserNotFound));
    }

    #[tokio::test]
    async fn add_car_rejects_missing_fields() {
        let input = AddCarInput {
            email: "a@x.com".to_string(),
            brand: String::new(),
            model: "Corolla".to_string(),
            fuel_type: "Petrol".to_string(),
            price: 45,
        };
        let err = service(MockCarRepository::new(), MockUserRepository::new())
            .add_car(&input)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn add_car_rejects_missing_price() {
        let input = AddCarInput {
            email: "a@x.com".to_string(),
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            fuel_type: "Petrol".to_string(),
            price: 0,
        };
        let err = service(MockCarRepository::new(), MockUserRepository::new())
            .add_car(&input)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn update_car_rejects_transfer_to_unknown_user() {
        let mut cars = MockCarRepository::new();
        cars.expect_find_by_id()
            .with(eq(9))
            .returning(|id| Ok(Some(car(id, 1))));
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().with(eq(99)).returning(|_| Ok(None));

        let input = UpdateCarInput {
            owner_id: Some(99),
            ..Default::default()
        };
        let err = service(cars, users).update_car(9, &input, 1).await.unwrap_err();
        assert!(matches!(err, DomainError::UserNotFound));
    }

    #[tokio::test]
    async fn update_car_transfers_to_existing_user() {
        let mut cars = MockCarRepository::new();
        cars.expect_find_by_id()
            .with(eq(9))
            .returning(|id| Ok(Some(car(id, 1))));
        cars.expect_update()
            .withf(|id, update| *id == 9 && update.owner_id == Some(2))
            .returning(|id, _| Ok(Some(car(id, 2))));
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().with(eq(2)).returning(|id| {
            Ok(Some(User {
                id,
                name: "Bob".to_string(),
                email: "b@x.com".to_string(),
                password_hash: "hash".to_string(),
                created_at: Utc::now(),
            }))
        });

        let input = UpdateCarInput {
            owner_id: Some(2),
            ..Default::default()
        };
        let updated = service(cars, users).update_car(9, &input, 1).await.unwrap();
        assert_eq!(updated.owner_id, 2);
    }

    #[tokio::test]
    async fn update_car_rejects_non_owner() {
        let mut cars = MockCarRepository::new();
        cars.expect_find_by_id()
            .with(eq(9))
            .returning(|id| Ok(Some(car(id, 1))));

        let err = service(cars, MockUserRepository::new())
            .update_car(9, &UpdateCarInput::default(), 2)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotCarOwner));
    }

    #[tokio::test]
    async fn update_missing_car_is_not_found() {
        let mut cars = MockCarRepository::new();
        cars.expect_find_by_id().returning(|_| Ok(None));

        let err = service(cars, MockUserRepository::new())
            .update_car(9, &UpdateCarInput::default(), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::CarNotFound));
    }

    #[tokio::test]
    async fn delete_car_by_owner_succeeds() {
        let mut cars = MockCarRepository::new();
        cars.expect_find_by_id()
            .with(eq(9))
            .returning(|id| Ok(Some(car(id, 1))));
        cars.expect_delete().with(eq(9)).returning(|_| Ok(true));

        service(cars, MockUserRepository::new())
            .delete_car(9, 1)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn search_clamps_page_and_computes_offset() {
        let mut cars = MockCarRepository::new();
        // page 3 at size 10 starts at offset 20
        cars.expect_search()
            .with(eq("corolla"), eq(20), eq(10))
            .returning(|_, _, _| Ok(vec![]));
        cars.expect_count_matching()
            .with(eq("corolla"))
            .returning(|_| Ok(31));

        let page = service(cars, MockUserRepository::new())
            .search_cars("corolla", 3, 10)
            .await
            .unwrap();
        assert_eq!(page.total, 31);
        assert!(page.cars.is_empty());
    }

    #[tokio::test]
    async fn search_page_zero_is_treated_as_first_page() {
        let mut cars = MockCarRepository::new();
        cars.expect_search()
            .with(eq(""), eq(0), eq(10))
            .returning(|_, _, _| Ok(vec![]));
        cars.expect_count_matching().returning(|_| Ok(0));

        service(cars, MockUserRepository::new())
            .search_cars("", 0, 10)
            .await
            .unwrap();
    }
}
