//! Domain entities for the Wheelbase backend.

pub mod car;
pub mod user;

pub use car::{Car, CarUpdate, CarWithOwner, NewCar};
pub use user::{NewUser, User};
