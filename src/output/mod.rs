//! Console output for verification runs
//!
//! One glyph-prefixed line per check, colored when the terminal supports
//! it. There is deliberately no machine-readable format here.

mod colored;
mod formatter;

pub use colored::ColoredFormatter;
pub use formatter::{OutputFormatter, PlainFormatter, FAIL_GLYPH, PASS_GLYPH, WARN_GLYPH};

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color preference
    pub fn create_formatter(enable_color: bool) -> Box<dyn OutputFormatter> {
        if enable_color {
            Box::new(ColoredFormatter::new())
        } else {
            Box::new(PlainFormatter)
        }
    }
}
