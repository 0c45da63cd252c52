//! Firmware configuration header extraction
//!
//! The clock firmware keeps its settings in a C preprocessor header
//! (`src/config.h`). Only the declarations the verifier needs are
//! extracted; everything else in the header is ignored.

use crate::error::{AppError, Result};
use std::fs;
use std::path::Path;

/// Declaration carrying the OpenWeatherMap API key
pub const WEATHER_API_KEY: &str = "WEATHER_API_KEY";

/// Declaration carrying the NTP server hostname
pub const NTP_SERVER: &str = "NTP_SERVER";

/// Values extracted from the firmware configuration header.
///
/// Absent declarations stay `None`; a name declared twice keeps the last
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirmwareConfig {
    pub weather_api_key: Option<String>,
    pub ntp_server: Option<String>,
}

impl FirmwareConfig {
    /// Read and parse the header at `path`.
    ///
    /// A missing file maps to [`AppError::ConfigMissing`] so the caller can
    /// degrade to a warning instead of aborting the run.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::config_missing(path.display().to_string())
            } else {
                AppError::io(format!("{}: {}", path.display(), e))
            }
        })?;
        Ok(Self::parse(&content))
    }

    /// Extract the recognized `#define NAME "value"` declarations from
    /// header text.
    pub fn parse(content: &str) -> Self {
        let mut config = Self::default();
        for line in content.lines() {
            let Some((name, value)) = parse_define(line) else {
                continue;
            };
            match name {
                WEATHER_API_KEY => config.weather_api_key = Some(value.to_string()),
                NTP_SERVER => config.ntp_server = Some(value.to_string()),
                _ => {}
            }
        }
        config
    }

    /// True when no recognized declaration was found
    pub fn is_empty(&self) -> bool {
        self.weather_api_key.is_none() && self.ntp_server.is_none()
    }
}

/// Parse a single `#define NAME "value"` line.
///
/// Returns the declaration name and the content of the quoted literal, or
/// `None` for any line that is not a string-valued define. Escape
/// sequences are not interpreted; the header values are plain tokens.
fn parse_define(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim_start().strip_prefix("#define")?;
    // "#define" must be a whole token, not a prefix of a longer name
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start();

    let name_end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if name_end == 0 {
        return None;
    }
    let (name, rest) = rest.split_at(name_end);

    let rest = rest.trim_start().strip_prefix('"')?;
    let end = rest.find('"')?;
    Some((name, &rest[..end]))
}
