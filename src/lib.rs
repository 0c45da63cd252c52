//! Clock Firmware Pre-flight Verifier
//!
//! Verifies that the external services a VFD clock firmware depends on are
//! reachable before the firmware is flashed: the OpenWeatherMap API (keyed),
//! the Open-Meteo timezone API, and the configured NTP server.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod probes;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use config::FirmwareConfig;
pub use models::{CheckOutcome, CheckReport, Settings, VerificationReport};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_HEADER_PATH: &str = "src/config.h";
    pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);
    pub const DEFAULT_NTP_TIMEOUT: Duration = Duration::from_secs(3);
    pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org";
    pub const DEFAULT_TIMEZONE_BASE_URL: &str = "https://api.open-meteo.com";
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
