//! Wheelbase server entry point
//!
//! Wires configuration, telemetry, the database pool, and the domain
//! services, then serves the router.

use std::sync::Arc;
use tracing::{error, info};

use wheelbase_api::{build_router, AppState};
use wheelbase_core::services::{AuthService, CarService};
use wheelbase_infrastructure::{create_pool, ensure_schema, PgCarRepository, PgUserRepository};
use wheelbase_security::JwtService;
use wheelbase_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    wheelbase_shared::telemetry::init_telemetry();

    info!("Wheelbase server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to database
    let pool = create_pool(&config.database).await?;
    info!("Database connection established.");

    ensure_schema(&pool).await?;

    // Wire repositories and services
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let car_repo = Arc::new(PgCarRepository::new(pool));

    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        config.jwt.secret.clone(),
        config.jwt.token_expiry,
    ));
    let car_service = Arc::new(CarService::new(car_repo, user_repo));
    let jwt = Arc::new(JwtService::new(
        config.jwt.secret.clone(),
        config.jwt.token_expiry,
    ));

    let state = AppState {
        config: config.clone(),
        auth_service,
        car_service,
        jwt,
    };

    // Build router
    let app = build_router(state);

    // Bind address
    let addr = config.listen_addr()?;
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
