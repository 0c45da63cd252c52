//! Verification run orchestration

use crate::{
    config::{header, FirmwareConfig},
    error::Result,
    models::{CheckOutcome, CheckReport, Settings, VerificationReport},
    output::{OutputFormatter, OutputFormatterFactory},
    probes::{NtpProbe, Probe, TimezoneProbe, WeatherProbe},
};
use std::time::Instant;

/// Runs the configured checks in order and prints the report as it goes.
///
/// The run is best-effort: a failed or skipped check never stops the
/// remaining checks, and the caller receives every outcome in the returned
/// [`VerificationReport`].
pub struct Runner {
    settings: Settings,
    formatter: Box<dyn OutputFormatter>,
}

impl Runner {
    /// Create a runner for the given settings
    pub fn new(settings: Settings) -> Self {
        let formatter = OutputFormatterFactory::create_formatter(settings.enable_color);
        Self {
            settings,
            formatter,
        }
    }

    /// Execute all applicable checks sequentially
    pub async fn run(&self) -> Result<VerificationReport> {
        let started = Instant::now();
        println!(
            "{}",
            self.formatter.format_header("VFD Clock API Verification")
        );

        let firmware = self.load_firmware_config();

        let client = reqwest::Client::builder()
            .timeout(self.settings.http_timeout())
            .build()?;

        let mut report = VerificationReport::new();

        match &firmware.weather_api_key {
            Some(key) => {
                let probe =
                    WeatherProbe::new(client.clone(), &self.settings.weather_base_url, key);
                report.push(self.execute(&probe).await);
            }
            None => report.push(self.skip("Weather API", header::WEATHER_API_KEY)),
        }

        let timezone = TimezoneProbe::new(client.clone(), &self.settings.timezone_base_url);
        report.push(self.execute(&timezone).await);

        match &firmware.ntp_server {
            Some(server) => {
                let probe = NtpProbe::new(server.clone(), self.settings.ntp_timeout());
                report.push(self.execute(&probe).await);
            }
            None => report.push(self.skip("NTP server", header::NTP_SERVER)),
        }

        if self.settings.verbose {
            println!();
            println!("{}", self.formatter.format_summary(&report));
            println!("Completed in {:.1}s", started.elapsed().as_secs_f64());
        }

        Ok(report)
    }

    /// Header failures degrade to a warning and an empty config so the
    /// remaining checks still run
    fn load_firmware_config(&self) -> FirmwareConfig {
        match FirmwareConfig::load(&self.settings.header_path) {
            Ok(config) => {
                if self.settings.debug {
                    println!(
                        "Parsed {}: weather key {}, NTP server {}",
                        self.settings.header_path.display(),
                        presence(config.weather_api_key.is_some()),
                        presence(config.ntp_server.is_some()),
                    );
                }
                config
            }
            Err(e) => {
                println!("{}", self.formatter.format_warning(&e.to_string()));
                FirmwareConfig::default()
            }
        }
    }

    async fn execute(&self, probe: &dyn Probe) -> CheckReport {
        println!("{}", self.formatter.format_progress(&probe.describe()));
        let check = CheckReport::new(probe.name(), probe.run().await);
        println!("{}", self.formatter.format_check(&check));
        check
    }

    fn skip(&self, name: &str, declaration: &str) -> CheckReport {
        let reason = format!(
            "{} not found in {}",
            declaration,
            self.settings.header_path.display()
        );
        let check = CheckReport::new(name, CheckOutcome::skipped(reason));
        println!("{}", self.formatter.format_check(&check));
        check
    }
}

fn presence(found: bool) -> &'static str {
    if found {
        "present"
    } else {
        "absent"
    }
}
