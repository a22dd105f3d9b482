//! # Wheelbase Infrastructure
//!
//! Database implementations (adapters).

pub mod database;

pub use database::{create_pool, ensure_schema, PgCarRepository, PgUserRepository};
