use std::env;
use std::fmt;

use crate::matching::ranking::MatchPolicy;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the matching engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub matching: MatchingConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let match_limit = env::var("MATCH_LIMIT")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidMatchLimit)?;
        let minimum_pool = env::var("MATCH_MIN_POOL")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidMinimumPool)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            matching: MatchingConfig {
                match_limit,
                minimum_pool,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Cutoffs for how many recommendations are surfaced per member.
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub match_limit: usize,
    pub minimum_pool: usize,
}

impl MatchingConfig {
    pub fn policy(&self) -> MatchPolicy {
        MatchPolicy {
            match_limit: self.match_limit,
            minimum_pool: self.minimum_pool,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMatchLimit,
    InvalidMinimumPool,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMatchLimit => {
                write!(f, "MATCH_LIMIT must be a non-negative integer")
            }
            ConfigError::InvalidMinimumPool => {
                write!(f, "MATCH_MIN_POOL must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("MATCH_LIMIT");
        env::remove_var("MATCH_MIN_POOL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.matching.match_limit, 3);
        assert_eq!(config.matching.minimum_pool, 5);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn load_reads_matching_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MATCH_LIMIT", "5");
        env::set_var("MATCH_MIN_POOL", "2");
        let config = AppConfig::load().expect("config loads");
        let policy = config.matching.policy();
        assert_eq!(policy.match_limit, 5);
        assert_eq!(policy.minimum_pool, 2);
        reset_env();
    }

    #[test]
    fn load_rejects_a_malformed_limit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MATCH_LIMIT", "three");
        let error = AppConfig::load().expect_err("expected config error");
        assert!(matches!(error, ConfigError::InvalidMatchLimit));
        reset_env();
    }

    #[test]
    fn production_environment_is_recognized() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        reset_env();
    }
}
