//! Repository traits (ports)

pub mod car_repository;
pub mod user_repository;

pub use car_repository::CarRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use car_repository::MockCarRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
