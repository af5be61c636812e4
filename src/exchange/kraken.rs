use std::time::Duration;

use anyhow::{ Context, Result };
use reqwest::Client;
use tracing::{ debug, instrument };
use url::Url;

use crate::exchange::ExchangeError;
use crate::models::kraken_models::KrakenOhlcResponse;

/// Interval of the requested bars in minutes; 1440 gives daily OHLC data
const DAILY_INTERVAL: &str = "1440";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the Kraken public OHLC endpoint.
#[derive(Debug)]
pub struct KrakenClient {
    client: Client,
    base_url: Url,
}

impl KrakenClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).context("Invalid Kraken OHLC URL")?;
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Fetch daily OHLC rows for `pair` starting at the unix time `since`.
    ///
    /// The rows come back untyped under a symbol key that may differ from
    /// the requested pair; resolution is the extractor's job.
    #[instrument(skip(self))]
    pub async fn fetch_daily_ohlc(
        &self,
        pair: &str,
        since: i64
    ) -> Result<KrakenOhlcResponse, ExchangeError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("pair", pair)
            .append_pair("interval", DAILY_INTERVAL)
            .append_pair("since", &since.to_string());

        debug!("GET {}", url);

        let response = self.client
            .get(url)
            .send().await
            .map_err(|e| ExchangeError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| ExchangeError::Request(e.to_string()))?;

        response
            .json::<KrakenOhlcResponse>().await
            .map_err(|e| ExchangeError::Request(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_against_the_public_endpoint() {
        let client = KrakenClient::new("https://api.kraken.com/0/public/OHLC").unwrap();

        assert_eq!(client.base_url.as_str(), "https://api.kraken.com/0/public/OHLC");
    }

    #[test]
    fn rejects_a_malformed_endpoint() {
        assert!(KrakenClient::new("api.kraken.com").is_err());
    }
}
