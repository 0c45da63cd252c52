//! Core formatting trait and plain text implementation

use crate::models::{CheckOutcome, CheckReport, VerificationReport};

/// Glyph printed before a passing check
pub const PASS_GLYPH: &str = "\u{2705}";
/// Glyph printed before a failing check
pub const FAIL_GLYPH: &str = "\u{274C}";
/// Glyph printed before skips and warnings
pub const WARN_GLYPH: &str = "\u{26A0}\u{FE0F}";

/// Rendering interface for verification output
pub trait OutputFormatter: Send + Sync {
    /// Banner printed before the checks run
    fn format_header(&self, title: &str) -> String;

    /// Progress line printed before each check
    fn format_progress(&self, message: &str) -> String;

    /// Outcome line for a completed or skipped check
    fn format_check(&self, check: &CheckReport) -> String;

    /// Standalone warning line (missing config file and the like)
    fn format_warning(&self, message: &str) -> String;

    /// Run summary footer
    fn format_summary(&self, report: &VerificationReport) -> String;
}

/// Formatter without any terminal styling
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_header(&self, title: &str) -> String {
        format!("--- {} ---", title)
    }

    fn format_progress(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_check(&self, check: &CheckReport) -> String {
        match &check.outcome {
            CheckOutcome::Passed { detail: Some(detail) } => {
                format!("{} {}: Success ({})", PASS_GLYPH, check.name, detail)
            }
            CheckOutcome::Passed { detail: None } => {
                format!("{} {}: Success", PASS_GLYPH, check.name)
            }
            CheckOutcome::Failed { reason } => {
                format!("{} {}: {}", FAIL_GLYPH, check.name, reason)
            }
            CheckOutcome::Skipped { reason } => {
                format!("{} {}: skipped ({})", WARN_GLYPH, check.name, reason)
            }
        }
    }

    fn format_warning(&self, message: &str) -> String {
        format!("{} {}", WARN_GLYPH, message)
    }

    fn format_summary(&self, report: &VerificationReport) -> String {
        format!(
            "{} passed, {} failed, {} skipped",
            report.passed_count(),
            report.failed_count(),
            report.skipped_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_lines_carry_glyphs() {
        let formatter = PlainFormatter;

        let passed = CheckReport::new("Weather API", CheckOutcome::passed());
        assert_eq!(
            formatter.format_check(&passed),
            format!("{} Weather API: Success", PASS_GLYPH)
        );

        let failed = CheckReport::new(
            "Weather API",
            CheckOutcome::failed("HTTP 401 Unauthorized"),
        );
        assert_eq!(
            formatter.format_check(&failed),
            format!("{} Weather API: HTTP 401 Unauthorized", FAIL_GLYPH)
        );

        let skipped = CheckReport::new(
            "NTP server",
            CheckOutcome::skipped("NTP_SERVER not found in src/config.h"),
        );
        assert_eq!(
            formatter.format_check(&skipped),
            format!(
                "{} NTP server: skipped (NTP_SERVER not found in src/config.h)",
                WARN_GLYPH
            )
        );
    }

    #[test]
    fn test_pass_detail_is_appended() {
        let formatter = PlainFormatter;
        let check = CheckReport::new("Timezone API", CheckOutcome::passed_with("UTC offset 0s"));
        assert_eq!(
            formatter.format_check(&check),
            format!("{} Timezone API: Success (UTC offset 0s)", PASS_GLYPH)
        );
    }

    #[test]
    fn test_summary_counts() {
        let formatter = PlainFormatter;
        let mut report = VerificationReport::new();
        report.push(CheckReport::new("Weather API", CheckOutcome::passed()));
        report.push(CheckReport::new("Timezone API", CheckOutcome::passed()));
        report.push(CheckReport::new("NTP server", CheckOutcome::skipped("x")));
        assert_eq!(
            formatter.format_summary(&report),
            "2 passed, 0 failed, 1 skipped"
        );
    }
}
