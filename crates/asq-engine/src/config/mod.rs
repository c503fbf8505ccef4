use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the portal.
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

/// Top-level configuration for the screening tooling.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub screening: ScreeningConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let age_window_days = match env::var("ASQ_AGE_WINDOW_DAYS") {
            Ok(value) => {
                let days = value
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidAgeWindow { value: value.clone() })?;
                if !days.is_finite() || days <= 0.0 {
                    return Err(ConfigError::InvalidAgeWindow { value });
                }
                days
            }
            Err(_) => ScreeningConfig::DEFAULT_AGE_WINDOW_DAYS,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            screening: ScreeningConfig { age_window_days },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Tunables for questionnaire administration.
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    /// Half-width of the administration window around each interval, in days.
    pub age_window_days: f64,
}

impl ScreeningConfig {
    pub const DEFAULT_AGE_WINDOW_DAYS: f64 = 15.0;
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAgeWindow { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAgeWindow { value } => {
                write!(
                    f,
                    "ASQ_AGE_WINDOW_DAYS must be a positive number of days, got '{value}'"
                )
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
        env::remove_var("ASQ_AGE_WINDOW_DAYS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(
            config.screening.age_window_days,
            ScreeningConfig::DEFAULT_AGE_WINDOW_DAYS
        );
    }

    #[test]
    fn rejects_non_positive_age_windows() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ASQ_AGE_WINDOW_DAYS", "-3");
        let err = AppConfig::load().expect_err("negative window rejected");
        assert!(matches!(err, ConfigError::InvalidAgeWindow { .. }));
        reset_env();
    }

    #[test]
    fn recognizes_production_aliases() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        reset_env();
    }
}
