//! Command-line interface definition

use clap::Parser;
use std::path::PathBuf;

/// Pre-flight verifier for the clock firmware's external services
#[derive(Parser, Debug, Clone)]
#[command(name = "preflight")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the firmware configuration header
    #[arg(
        short = 'c',
        long = "config",
        env = "PREFLIGHT_CONFIG",
        default_value = crate::defaults::DEFAULT_HEADER_PATH,
        value_name = "PATH"
    )]
    pub config: PathBuf,

    /// HTTPS request timeout in seconds
    #[arg(short = 't', long, default_value_t = crate::defaults::DEFAULT_HTTP_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// NTP receive timeout in seconds
    #[arg(long, default_value_t = crate::defaults::DEFAULT_NTP_TIMEOUT.as_secs())]
    pub ntp_timeout: u64,

    /// Override the weather API base URL
    #[arg(long, value_name = "URL")]
    pub weather_url: Option<String>,

    /// Override the timezone API base URL
    #[arg(long, value_name = "URL")]
    pub timezone_url: Option<String>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }
        Ok(())
    }
}
