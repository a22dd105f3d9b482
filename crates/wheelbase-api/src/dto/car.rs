//! Car request/response payloads
//!
//! Field names stay camelCase on the wire (`fuelType`, `ownerName`) to match
//! the frontend's expectations.

use serde::{Deserialize, Serialize};

use wheelbase_core::domain::{Car, CarWithOwner};
use wheelbase_core::services::{AddCarInput, UpdateCarInput};
use wheelbase_shared::constants::DEFAULT_PAGE_SIZE;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDto {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub fuel_type: String,
    pub price: i64,
    pub owner_id: i32,
    pub owner_name: String,
}

impl From<CarWithOwner> for CarDto {
    fn from(car: CarWithOwner) -> Self {
        Self {
            id: car.id,
            brand: car.brand,
            model: car.model,
            fuel_type: car.fuel_type,
            price: car.price,
            owner_id: car.owner_id,
            owner_name: car.owner_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedCarDto {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub fuel_type: String,
    pub price: i64,
    pub owner_id: i32,
}

impl From<Car> for OwnedCarDto {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            brand: car.brand,
            model: car.model,
            fuel_type: car.fuel_type,
            price: car.price,
            owner_id: car.owner_id,
        }
    }
}

/// Absent fields deserialize to their empty defaults (price 0) and are
/// rejected by the service's required-fields check.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AddCarRequest {
    /// Owner's registered email; the car is attached to this account.
    pub email: String,
    pub brand: String,
    pub model: String,
    pub fuel_type: String,
    pub price: i64,
}

impl AddCarRequest {
    pub fn into_input(self) -> AddCarInput {
        AddCarInput {
            email: self.email,
            brand: self.brand,
            model: self.model,
            fuel_type: self.fuel_type,
            price: self.price,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub fuel_type: Option<String>,
    pub price: Option<i64>,
    pub owner_id: Option<i32>,
}

impl UpdateCarRequest {
    pub fn into_input(self) -> UpdateCarInput {
        UpdateCarInput {
            brand: self.brand,
            model: self.model,
            fuel_type: self.fuel_type,
            price: self.price,
            owner_id: self.owner_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(rename = "pageSize", default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub cars: Vec<CarDto>,
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct CarMutationResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car: Option<OwnedCarDto>,
}
