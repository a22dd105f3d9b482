//! Configuration management

use std::net::{IpAddr, SocketAddr};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection before giving up.
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    /// Session token lifetime in seconds.
    pub token_expiry: i64,
    /// Adds the `Secure` attribute to the session cookie. Off for local dev.
    pub cookie_secure: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "wheelbase-server")?
            .set_default("database.max_connections", 5)?
            .set_default("database.acquire_timeout_secs", 3)?
            .set_default("jwt.token_expiry", crate::constants::DEFAULT_TOKEN_EXPIRY)?
            .set_default("jwt.cookie_secure", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Socket address to bind, from `app.host` and `app.port`.
    pub fn listen_addr(&self) -> Result<SocketAddr, AppError> {
        let host: IpAddr = self.app.host.parse().map_err(|source| AppError::ListenAddr {
            addr: format!("{}:{}", self.app.host, self.app.port),
            source,
        })?;
        Ok(SocketAddr::from((host, self.app.port)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str) -> AppConfig {
        AppConfig {
            app: AppSettings {
                env: "development".to_string(),
                host: host.to_string(),
                port: 8080,
                name: "wheelbase-server".to_string(),
            },
            database: DatabaseSettings {
                url: "postgres://localhost/wheelbase".to_string(),
                max_connections: 5,
                acquire_timeout_secs: 3,
            },
            jwt: JwtSettings {
                secret: "test-secret".to_string(),
                token_expiry: 3600,
                cookie_secure: false,
            },
        }
    }

    #[test]
    fn listen_addr_parses_host_and_port() {
        let addr = config("127.0.0.1").listen_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn listen_addr_rejects_bad_host() {
        let err = config("not-an-ip").listen_addr().unwrap_err();
        match err {
            AppError::ListenAddr { addr, .. } => assert_eq!(addr, "not-an-ip:8080"),
            other => panic!("expected ListenAddr, got {:?}", other),
        }
    }
}
