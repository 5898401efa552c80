//! # API Configuration Module
//!
//! Configuration is read from environment variables, after loading a `.env`
//! file when one is present.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string. When unset, bookings and
//!   uploaded files live in memory.
//! - `FIXTURE_DIR`: Directory with replacement reference data fixtures
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `DEMO_SEED`: Seed for generated demo data (default: 42)
//! - `DEMO_BOOKINGS`: Number of demo bookings to generate in memory (default: 0)

use std::{env, path::PathBuf};

use eyre::{Result, WrapErr};
use tracing::Level;

/// Configuration for the ad slot API server
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use adslot_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}", config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL connection string; in-memory storage when absent
    pub database_url: Option<String>,

    /// Directory overriding the embedded fixtures
    pub fixture_dir: Option<PathBuf>,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Seed for every pseudo-random demo value
    pub demo_seed: u64,

    /// Demo bookings generated into the in-memory store at start-up
    pub demo_bookings: usize,
}

impl ApiConfig {
    /// Loads `.env` and reads the process environment.
    ///
    /// # Errors
    ///
    /// Fails when `API_PORT`, `DEMO_SEED` or `DEMO_BOOKINGS` is set but cannot
    /// be parsed.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Empty values count as unset.
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        // Network settings
        let host = var("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = var("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .wrap_err("Invalid API_PORT value")?;

        // Storage settings
        let database_url = var("DATABASE_URL");
        let fixture_dir = var("FIXTURE_DIR").map(PathBuf::from);

        // Logging settings
        let log_level = match var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = var("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = var("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        // Demo data
        let demo_seed = var("DEMO_SEED")
            .map(|value| value.parse::<u64>())
            .transpose()
            .wrap_err("Invalid DEMO_SEED value")?
            .unwrap_or(42);
        let demo_bookings = var("DEMO_BOOKINGS")
            .map(|value| value.parse::<usize>())
            .transpose()
            .wrap_err("Invalid DEMO_BOOKINGS value")?
            .unwrap_or(0);

        Ok(Self {
            host,
            port,
            database_url,
            fixture_dir,
            log_level,
            cors_origins,
            request_timeout,
            demo_seed,
            demo_bookings,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
