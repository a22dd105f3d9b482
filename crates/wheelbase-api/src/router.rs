//! Router assembly

use axum::{
    routing::{delete, get, post, put},
    Extension, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::middleware::route_guard;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let jwt = state.jwt.clone();

    Router::new()
        .route("/", get(handlers::pages::root))
        .route("/health", get(handlers::health::health_check))
        // Guard anchor pages
        .route("/login", get(handlers::pages::login_page))
        .route("/register", get(handlers::pages::register_page))
        .route("/dashboard", get(handlers::pages::dashboard))
        // Auth actions
        .route("/api/auth/signup", post(handlers::auth::signup))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        // Car directory
        .route("/api/cars", get(handlers::cars::list_cars))
        .route("/api/cars/search", get(handlers::cars::search_cars))
        .route("/api/cars/add", post(handlers::cars::add_car))
        .route("/api/cars/edit/{id}", put(handlers::cars::update_car))
        .route("/api/cars/delete/{id}", delete(handlers::cars::delete_car))
        .with_state(state)
        // The guard needs the JwtService extension, so that layer sits
        // outside it.
        .layer(axum::middleware::from_fn(route_guard))
        .layer(Extension(jwt))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
