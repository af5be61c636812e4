pub mod extractor;
pub mod kraken;

use thiserror::Error;

/// Failures while fetching or extracting Kraken market data.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Request failed at the transport level or with a not-ok status
    #[error("kraken request failed: {0}")]
    Request(String),

    /// Kraken answered with entries in its `error` array
    #[error("kraken reported errors: {0:?}")]
    ErrorResponse(Vec<String>),

    /// The response carries no result related to the requested symbol
    #[error("response does not match requested symbol {0}")]
    UnrelatedResponse(String),
}
