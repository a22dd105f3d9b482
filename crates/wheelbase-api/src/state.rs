use std::sync::Arc;

use wheelbase_core::services::{AuthService, CarService};
use wheelbase_infrastructure::{PgCarRepository, PgUserRepository};
use wheelbase_security::JwtService;
use wheelbase_shared::config::AppConfig;

pub type SharedAuthService = Arc<AuthService<PgUserRepository>>;
pub type SharedCarService = Arc<CarService<PgCarRepository, PgUserRepository>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub auth_service: SharedAuthService,
    pub car_service: SharedCarService,
    pub jwt: Arc<JwtService>,
}
