//! Domain services (business logic)

pub mod auth_service;
pub mod car_service;

pub use auth_service::{AuthService, LoginResult, SignupResult, UserInfo};
pub use car_service::{AddCarInput, CarPage, CarService, UpdateCarInput};
