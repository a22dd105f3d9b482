//! Car domain entity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub fuel_type: String,
    /// Daily rental price in whole currency units.
    pub price: i64,
    pub owner_id: i32,
}

/// Car joined with its owner's display name, as shown on the dashboard
/// and in search results.
#[derive(Debug, Clone, Serialize)]
pub struct CarWithOwner {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub fuel_type: String,
    pub price: i64,
    pub owner_id: i32,
    pub owner_name: String,
}

#[derive(Debug, Clone)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub fuel_type: String,
    pub price: i64,
    pub owner_id: i32,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct CarUpdate {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub fuel_type: Option<String>,
    pub price: Option<i64>,
    pub owner_id: Option<i32>,
}
