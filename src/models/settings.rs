//! Runtime settings model and validation

use crate::defaults;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for a verification run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the firmware configuration header
    #[serde(default = "default_header_path")]
    pub header_path: PathBuf,

    /// Request timeout for the HTTPS probes
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_seconds: u64,

    /// Receive timeout for the NTP probe
    #[serde(default = "default_ntp_timeout_secs")]
    pub ntp_timeout_seconds: u64,

    /// Base URL of the weather API
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,

    /// Base URL of the timezone API
    #[serde(default = "default_timezone_base_url")]
    pub timezone_base_url: String,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            header_path: default_header_path(),
            http_timeout_seconds: default_http_timeout_secs(),
            ntp_timeout_seconds: default_ntp_timeout_secs(),
            weather_base_url: default_weather_base_url(),
            timezone_base_url: default_timezone_base_url(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Settings {
    /// Get the HTTPS request timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }

    /// Get the NTP receive timeout as Duration
    pub fn ntp_timeout(&self) -> Duration {
        Duration::from_secs(self.ntp_timeout_seconds)
    }

    /// Validate the settings and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.http_timeout_seconds == 0 {
            return Err(AppError::config("HTTP timeout must be greater than 0"));
        }
        if self.http_timeout_seconds > 300 {
            return Err(AppError::config("HTTP timeout cannot exceed 300 seconds"));
        }
        if self.ntp_timeout_seconds == 0 {
            return Err(AppError::config("NTP timeout must be greater than 0"));
        }
        if self.ntp_timeout_seconds > 300 {
            return Err(AppError::config("NTP timeout cannot exceed 300 seconds"));
        }

        for (label, value) in [
            ("weather", &self.weather_base_url),
            ("timezone", &self.timezone_base_url),
        ] {
            let parsed = url::Url::parse(value).map_err(|e| {
                AppError::config(format!("Invalid {} base URL '{}': {}", label, value, e))
            })?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(AppError::config(format!(
                    "{} base URL must use http or https: {}",
                    label, value
                )));
            }
        }

        Ok(())
    }
}

fn default_header_path() -> PathBuf {
    PathBuf::from(defaults::DEFAULT_HEADER_PATH)
}

fn default_http_timeout_secs() -> u64 {
    defaults::DEFAULT_HTTP_TIMEOUT.as_secs()
}

fn default_ntp_timeout_secs() -> u64 {
    defaults::DEFAULT_NTP_TIMEOUT.as_secs()
}

fn default_weather_base_url() -> String {
    defaults::DEFAULT_WEATHER_BASE_URL.to_string()
}

fn default_timezone_base_url() -> String {
    defaults::DEFAULT_TIMEZONE_BASE_URL.to_string()
}

fn default_enable_color() -> bool {
    defaults::DEFAULT_ENABLE_COLOR
}
