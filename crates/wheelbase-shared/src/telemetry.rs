//! Telemetry setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default log filter. sqlx logs every statement at INFO, which drowns out
/// the request logs, so it stays at WARN unless RUST_LOG overrides it.
const DEFAULT_FILTER: &str = "info,sqlx=warn";

pub fn init_telemetry() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_current_span(false))
        .init();
}
