//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the appointment
//! scheduling API server. It retrieves configuration values from environment
//! variables and provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `BUSINESS_TIMEZONE`: IANA operating timezone (default: "America/Los_Angeles")
//! - `BUSINESS_FIRST_START_HOUR`: Earliest local start hour (default: 8)
//! - `BUSINESS_LAST_START_HOUR`: Latest local start hour, inclusive (default: 16)
//! - `SLOT_LENGTH_MINUTES`: Appointment length (default: 30)

use apptsched_core::BusinessHours;
use eyre::{Result, WrapErr};
use std::env;
use std::str::FromStr;
use tracing::Level;

/// Configuration for the scheduling API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use apptsched_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Operating timezone and bookable hours
    pub business_hours: BusinessHours,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - A business-hours variable is malformed or the resulting hours are inconsistent
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        let business_hours = business_hours_from_env()?;

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            business_hours,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Maps a `LOG_LEVEL` value to a tracing level, falling back to INFO.
pub fn parse_log_level(value: &str) -> Level {
    match value {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn business_hours_from_env() -> Result<BusinessHours> {
    let defaults = BusinessHours::default();

    let timezone = match env::var("BUSINESS_TIMEZONE") {
        Ok(name) => BusinessHours::parse_timezone(&name)?,
        Err(_) => defaults.timezone,
    };

    let hours = BusinessHours {
        timezone,
        first_start_hour: env_or("BUSINESS_FIRST_START_HOUR", defaults.first_start_hour)?,
        last_start_hour: env_or("BUSINESS_LAST_START_HOUR", defaults.last_start_hour)?,
        slot_minutes: env_or("SLOT_LENGTH_MINUTES", defaults.slot_minutes)?,
    };
    hours.check().wrap_err("Invalid business hours configuration")?;

    Ok(hours)
}

fn env_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid {} value: {:?}", name, value)),
        Err(_) => Ok(default),
    }
}
