//! Request/response DTOs

pub mod auth;
pub mod car;
