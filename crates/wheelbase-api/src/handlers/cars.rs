//! Car directory HTTP handlers
//!
//! All routes here sit behind the route guard, which supplies the verified
//! `AuthUser`. Mutations additionally require ownership of the car.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::info;

use crate::dto::car::{
    AddCarRequest, CarDto, CarMutationResponse, SearchQuery, SearchResponse, UpdateCarRequest,
};
use crate::middleware::AuthUser;
use crate::response::{ApiError, ApiJson};
use crate::state::AppState;

/// GET /api/cars — the first 16 cars with owner names
pub async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<CarDto>>, ApiError> {
    let cars = state.car_service.list_cars().await?;
    Ok(Json(cars.into_iter().map(CarDto::from).collect()))
}

/// GET /api/cars/search?q=&page=&pageSize=
pub async fn search_cars(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let page = state
        .car_service
        .search_cars(&query.q, query.page, query.page_size)
        .await?;

    Ok(Json(SearchResponse {
        cars: page.cars.into_iter().map(CarDto::from).collect(),
        total: page.total,
    }))
}

/// POST /api/cars/add — owner resolved by registered email
pub async fn add_car(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiJson(payload): ApiJson<AddCarRequest>,
) -> Result<(StatusCode, Json<CarMutationResponse>), ApiError> {
    info!("User {} adding car for owner {}", user.id, payload.email);

    let car = state.car_service.add_car(&payload.into_input()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CarMutationResponse {
            success: true,
            message: "Car added successfully".to_string(),
            car: Some(car.into()),
        }),
    ))
}

/// PUT /api/cars/edit/{id}
pub async fn update_car(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateCarRequest>,
) -> Result<Json<CarMutationResponse>, ApiError> {
    let car = state
        .car_service
        .update_car(id, &payload.into_input(), user.id)
        .await?;

    Ok(Json(CarMutationResponse {
        success: true,
        message: "Car updated successfully".to_string(),
        car: Some(car.into()),
    }))
}

/// DELETE /api/cars/delete/{id}
pub async fn delete_car(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> Result<Json<CarMutationResponse>, ApiError> {
    state.car_service.delete_car(id, user.id).await?;

    Ok(Json(CarMutationResponse {
        success: true,
        message: "Car deleted successfully".to_string(),
        car: None,
    }))
}
