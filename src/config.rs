use std::str::FromStr;

use crate::{error::config::ConfigError, service::auth::lockout::LockoutPolicy};

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// When set, every login attempt is rejected with a 503 before any
    /// lookup runs. Injected here rather than read from the environment at
    /// call time so it is swappable per request context in tests.
    pub maintenance_mode: bool,
    pub lockout_threshold: u32,
    pub lockout_duration_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            maintenance_mode: parse_var("MAINTENANCE_MODE", false)?,
            lockout_threshold: parse_var("LOCKOUT_THRESHOLD", 3)?,
            lockout_duration_minutes: parse_var("LOCKOUT_DURATION_MINUTES", 2)?,
        })
    }

    pub fn lockout_policy(&self) -> LockoutPolicy {
        LockoutPolicy {
            threshold: self.lockout_threshold,
            duration_minutes: self.lockout_duration_minutes,
        }
    }
}

fn require_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn parse_var<T: FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("failed to parse {value:?}"),
        }),
        Err(_) => Ok(default),
    }
}
