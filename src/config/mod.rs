use crate::core::constants::{
    DEFAULT_AUTH_PASSWORD, DEFAULT_AUTH_USERNAME, DEFAULT_INVALID_PASSWORD,
    DEFAULT_INVALID_USERNAME,
};
use crate::core::{AppError, Result};
use crate::modules::auth::Credentials;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub mod run;

pub use run::RunConfig;

/// Public instance of the booking service
pub const DEFAULT_BASE_URL: &str = "https://restful-booker.herokuapp.com";

/// Main suite configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub service: ServiceConfig,
    pub auth: AuthConfig,
    pub run: RunConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub json_logs: bool,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
}

/// Credential pairs for positive and negative auth fixtures
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub valid: Credentials,
    pub invalid: Credentials,
}

impl Config {
    /// Configuration with defaults for everything but the base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            app: AppConfig {
                log_level: "info".to_string(),
                json_logs: false,
            },
            service: ServiceConfig {
                base_url: base_url.into(),
            },
            auth: AuthConfig {
                valid: Credentials::new(DEFAULT_AUTH_USERNAME, DEFAULT_AUTH_PASSWORD),
                invalid: Credentials::new(DEFAULT_INVALID_USERNAME, DEFAULT_INVALID_PASSWORD),
            },
            run: RunConfig::default(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let is_ci = lookup("CI").is_some_and(|v| !v.is_empty() && v != "false" && v != "0");
        let run_defaults = RunConfig::for_environment(is_ci);

        let config = Config {
            app: AppConfig {
                log_level: get("LOG_LEVEL", "info"),
                json_logs: lookup("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
            },
            service: ServiceConfig {
                base_url: get("BASE_URL", DEFAULT_BASE_URL)
                    .trim_end_matches('/')
                    .to_string(),
            },
            auth: AuthConfig {
                valid: Credentials::new(
                    get("AUTH_USERNAME", DEFAULT_AUTH_USERNAME),
                    get("AUTH_PASSWORD", DEFAULT_AUTH_PASSWORD),
                ),
                invalid: Credentials::new(
                    get("AUTH_INVALID_USERNAME", DEFAULT_INVALID_USERNAME),
                    get("AUTH_INVALID_PASSWORD", DEFAULT_INVALID_PASSWORD),
                ),
            },
            run: RunConfig {
                action_timeout: parse_millis(&lookup, "ACTION_TIMEOUT_MS", run_defaults.action_timeout)?,
                test_timeout: parse_millis(&lookup, "TEST_TIMEOUT_MS", run_defaults.test_timeout)?,
                global_timeout: parse_millis(&lookup, "GLOBAL_TIMEOUT_MS", run_defaults.global_timeout)?,
                workers: parse_or(&lookup, "WORKERS", run_defaults.workers)?,
                retries: parse_or(&lookup, "RETRIES", run_defaults.retries)?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.service.base_url.is_empty() {
            return Err(AppError::configuration("BASE_URL must not be empty"));
        }

        if !self.service.base_url.starts_with("http://")
            && !self.service.base_url.starts_with("https://")
        {
            return Err(AppError::configuration(format!(
                "BASE_URL must be an http(s) URL, got {}",
                self.service.base_url
            )));
        }

        if self.run.action_timeout.is_zero()
            || self.run.test_timeout.is_zero()
            || self.run.global_timeout.is_zero()
        {
            return Err(AppError::configuration("Timeouts must be greater than 0"));
        }

        if self.run.test_timeout > self.run.global_timeout {
            return Err(AppError::configuration(
                "TEST_TIMEOUT_MS must not exceed GLOBAL_TIMEOUT_MS",
            ));
        }

        if self.run.workers == 0 {
            return Err(AppError::configuration("WORKERS must be greater than 0"));
        }

        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::configuration(format!("Invalid {}", key))),
        None => Ok(default),
    }
}

fn parse_millis<F>(lookup: &F, key: &str, default: Duration) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let millis = parse_or(lookup, key, default.as_millis() as u64)?;
    Ok(Duration::from_millis(millis))
}
