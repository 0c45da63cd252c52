//! Clock Firmware Pre-flight Verifier - Main CLI Application
//!
//! Checks that the external services the clock firmware depends on are
//! reachable: the OpenWeatherMap API, the Open-Meteo timezone API, and the
//! configured NTP server.

use clap::Parser;
use clock_preflight::{
    app::Runner,
    cli::Cli,
    config::{display_settings_summary, load_settings},
    PKG_NAME, VERSION,
};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(message) = cli.validate() {
        eprintln!("Error: {}", message);
        process::exit(2);
    }

    let settings = match load_settings(cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    if settings.debug {
        println!("{} v{}", PKG_NAME, VERSION);
        println!("{}", display_settings_summary(&settings));
        println!();
    }

    // Individual check failures are already reported line by line, and a
    // broken service must not fail the flash pipeline, so the process exits
    // successfully whenever the run itself completed.
    if let Err(e) = Runner::new(settings).run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
