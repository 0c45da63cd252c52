//! Reachability probes for the firmware's external services
//!
//! Each probe is one stateless request/response check. Errors never escape
//! a probe: every failure is folded into the returned [`CheckOutcome`] so
//! the runner can keep going.

pub mod ntp;
pub mod timezone;
pub mod weather;

pub use ntp::NtpProbe;
pub use timezone::TimezoneProbe;
pub use weather::WeatherProbe;

use crate::models::CheckOutcome;
use async_trait::async_trait;

/// A single stateless reachability check against one external dependency
#[async_trait]
pub trait Probe: Send + Sync {
    /// Short display name used in report lines
    fn name(&self) -> &'static str;

    /// Progress line printed before the check runs
    fn describe(&self) -> String;

    /// Execute the check
    async fn run(&self) -> CheckOutcome;
}

/// Mask a credential for console display, keeping a short prefix
pub(crate) fn mask_key(key: &str) -> String {
    let prefix: String = key.chars().take(5).collect();
    format!("{}...", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key_keeps_prefix_only() {
        assert_eq!(mask_key("a964c5573241cc845e8d53941e28b6a0"), "a964c...");
    }

    #[test]
    fn test_mask_key_short_input() {
        assert_eq!(mask_key("abc"), "abc...");
        assert_eq!(mask_key(""), "...");
    }
}
