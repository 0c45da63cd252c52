//! Open-Meteo timezone reachability probe
//!
//! The firmware derives its UTC offset from the forecast endpoint, so the
//! probe requires both a 200 response and the `utc_offset_seconds` field in
//! the body. A well-formed response without the field is a format failure,
//! not a transport one.

use crate::{
    error::{AppError, Result},
    models::CheckOutcome,
    probes::Probe,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

/// Fixed verification query (central London)
const QUERY: &[(&str, &str)] = &[
    ("latitude", "51.5074"),
    ("longitude", "-0.1278"),
    ("current", "weather_code"),
    ("timezone", "auto"),
];

/// Subset of the forecast response the probe inspects
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    utc_offset_seconds: Option<i64>,
}

/// Verifies that the Open-Meteo forecast endpoint answers with timezone data
pub struct TimezoneProbe {
    client: Client,
    base_url: String,
}

impl TimezoneProbe {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?.join("/v1/forecast")?;
        for (name, value) in QUERY {
            url.query_pairs_mut().append_pair(name, value);
        }
        Ok(url)
    }

    async fn attempt(&self) -> Result<i64> {
        let response = self.client.get(self.endpoint()?).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::protocol(
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status"),
            ));
        }

        let body: ForecastResponse = response.json().await?;
        body.utc_offset_seconds
            .ok_or_else(|| AppError::bad_format("missing utc_offset_seconds in response"))
    }
}

#[async_trait]
impl Probe for TimezoneProbe {
    fn name(&self) -> &'static str {
        "Timezone API"
    }

    fn describe(&self) -> String {
        "Checking Open-Meteo timezone API...".to_string()
    }

    async fn run(&self) -> CheckOutcome {
        match self.attempt().await {
            Ok(offset) => CheckOutcome::passed_with(format!("UTC offset {}s", offset)),
            Err(e) => CheckOutcome::failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_query_parameters() {
        let probe = TimezoneProbe::new(Client::new(), "https://api.open-meteo.com");
        let url = probe.endpoint().unwrap();
        assert_eq!(url.path(), "/v1/forecast");
        assert_eq!(
            url.query(),
            Some("latitude=51.5074&longitude=-0.1278&current=weather_code&timezone=auto")
        );
    }

    #[test]
    fn test_response_field_is_optional_in_deserialization() {
        // The field check happens after parsing, so an empty body must
        // deserialize cleanly
        let body: ForecastResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body.utc_offset_seconds, None);

        let body: ForecastResponse =
            serde_json::from_str(r#"{"utc_offset_seconds": 3600, "elevation": 38.0}"#).unwrap();
        assert_eq!(body.utc_offset_seconds, Some(3600));
    }
}
