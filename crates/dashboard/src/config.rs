//! # Dashboard Configuration Module
//!
//! Loads the settings a dashboard session starts with from environment
//! variables, falling back to defaults where a value is absent.
//!
//! ## Environment Variables
//!
//! - `AVAILSYNC_TIMEZONE`: Initial display zone, `IST` or `GMT` (default: "IST")
//! - `LOG_LEVEL`: Logging level (default: "info")

use std::env;

use availsync_core::models::zone::Zone;
use eyre::{Result, WrapErr};
use tracing::Level;

/// Configuration for a dashboard session
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use availsync_dashboard::config::DashboardConfig;
///
/// fn example() -> Result<()> {
///     let config = DashboardConfig::from_env()?;
///     println!("Displaying times in {}", config.zone);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Zone times are shown and entered in until the operator picks another
    pub zone: Zone,

    /// Log level for the application
    pub log_level: Level,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            zone: Zone::Ist,
            log_level: Level::INFO,
        }
    }
}

impl DashboardConfig {
    /// Creates a new DashboardConfig from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `AVAILSYNC_TIMEZONE` is set to an unknown zone.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let zone = match lookup("AVAILSYNC_TIMEZONE") {
            Some(value) => value
                .parse()
                .wrap_err("Invalid AVAILSYNC_TIMEZONE value")?,
            None => Zone::Ist,
        };

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self { zone, log_level })
    }
}
