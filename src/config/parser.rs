//! Settings assembly from CLI arguments

use crate::{cli::Cli, error::Result, models::Settings};

/// Builds runtime settings from defaults and CLI overrides
pub struct SettingsBuilder {
    cli: Cli,
}

impl SettingsBuilder {
    /// Create a new builder with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build and validate the complete settings
    pub fn build(&self) -> Result<Settings> {
        let mut settings = Settings::default();
        self.apply_cli_overrides(&mut settings);
        settings.validate()?;
        Ok(settings)
    }

    fn apply_cli_overrides(&self, settings: &mut Settings) {
        settings.header_path = self.cli.config.clone();
        settings.http_timeout_seconds = self.cli.timeout;
        settings.ntp_timeout_seconds = self.cli.ntp_timeout;

        if let Some(ref url) = self.cli.weather_url {
            settings.weather_base_url = url.clone();
        }
        if let Some(ref url) = self.cli.timezone_url {
            settings.timezone_base_url = url.clone();
        }

        if self.cli.no_color {
            settings.enable_color = false;
        }
        settings.verbose = self.cli.verbose;
        settings.debug = self.cli.debug;
    }
}

/// Convenience function to load complete settings from CLI arguments
pub fn load_settings(cli: Cli) -> Result<Settings> {
    SettingsBuilder::new(cli).build()
}

/// Display settings summary for debug purposes
pub fn display_settings_summary(settings: &Settings) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Config header: {}", settings.header_path.display()));
    summary.push(format!("HTTP timeout: {}s", settings.http_timeout_seconds));
    summary.push(format!("NTP timeout: {}s", settings.ntp_timeout_seconds));
    summary.push(format!("Weather API: {}", settings.weather_base_url));
    summary.push(format!("Timezone API: {}", settings.timezone_base_url));
    summary.push(format!("Color output: {}", settings.enable_color));

    summary.join("\n")
}
