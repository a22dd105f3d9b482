//! # Wheelbase API
//!
//! HTTP handlers, middleware, DTOs, and the router.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
