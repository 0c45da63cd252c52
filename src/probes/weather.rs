//! OpenWeatherMap reachability probe

use crate::{
    error::{AppError, Result},
    models::CheckOutcome,
    probes::{mask_key, Probe},
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

/// Query location for the verification request. Any known city works; the
/// probe only cares whether the key is accepted.
const QUERY_CITY: &str = "London";

/// Verifies that the configured OpenWeatherMap API key is accepted
pub struct WeatherProbe {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherProbe {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?.join("/data/2.5/weather")?;
        url.query_pairs_mut()
            .append_pair("q", QUERY_CITY)
            .append_pair("appid", &self.api_key);
        Ok(url)
    }

    async fn attempt(&self) -> Result<()> {
        let response = self.client.get(self.endpoint()?).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::protocol(
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Probe for WeatherProbe {
    fn name(&self) -> &'static str {
        "Weather API"
    }

    fn describe(&self) -> String {
        format!(
            "Checking OpenWeatherMap API key: {}",
            mask_key(&self.api_key)
        )
    }

    async fn run(&self) -> CheckOutcome {
        match self.attempt().await {
            Ok(()) => CheckOutcome::passed(),
            Err(e) => CheckOutcome::failed(e.to_string()),
        }
    }
}
