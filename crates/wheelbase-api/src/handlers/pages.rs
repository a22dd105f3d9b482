//! Page endpoints gated by the route guard
//!
//! UI rendering is out of scope; these return JSON payloads for the pages
//! the guard redirects between.

use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::dto::car::CarDto;
use crate::middleware::AuthUser;
use crate::response::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub user: String,
    pub cars: Vec<CarDto>,
}

#[derive(Serialize)]
pub struct PageInfo {
    pub page: &'static str,
}

/// GET /dashboard — the protected landing page: the car listing for the
/// authenticated user.
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let cars = state.car_service.list_cars().await?;
    Ok(Json(DashboardResponse {
        user: user.email,
        cars: cars.into_iter().map(CarDto::from).collect(),
    }))
}

/// GET /login
pub async fn login_page() -> Json<PageInfo> {
    Json(PageInfo { page: "login" })
}

/// GET /register
pub async fn register_page() -> Json<PageInfo> {
    Json(PageInfo { page: "register" })
}

/// GET /
pub async fn root() -> &'static str {
    "Welcome to Wheelbase!"
}
