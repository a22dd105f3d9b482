//! Application-wide constants

/// Name of the session cookie carrying the JWT.
pub const TOKEN_COOKIE: &str = "token";

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DASHBOARD_LISTING_SIZE: i64 = 16;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const DEFAULT_TOKEN_EXPIRY: i64 = 86400;

/// Protected landing page; authenticated users are redirected here.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Unauthenticated users on protected paths are redirected here.
pub const LOGIN_PATH: &str = "/login";
