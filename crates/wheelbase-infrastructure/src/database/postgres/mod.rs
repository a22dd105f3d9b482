//! PostgreSQL repository implementations

pub mod car_repo_impl;
pub mod user_repo_impl;

pub use car_repo_impl::PgCarRepository;
pub use user_repo_impl::PgUserRepository;
