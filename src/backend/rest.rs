use std::time::Duration;

use anyhow::{ Context, Result };
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

use crate::backend::client::{ BackendError, SubmissionOutcome, SymbolBackend };
use crate::models::symbol::{ SymbolDraft, SymbolRecord };

// Shared singleton client for connection pooling
lazy_static::lazy_static! {
    static ref HTTP_CLIENT: HttpClient = HttpClient::builder()
        .timeout(Duration::from_secs(10))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .pool_idle_timeout(Some(Duration::from_secs(30)))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to create HTTP client");
}

/// REST implementation of [`SymbolBackend`] over the kraken-symbols service.
pub struct RestBackend {
    /// Resolved URL for `GET kraken-symbols/`
    list_url: Url,

    /// Resolved URL for `POST /kraken-symbols/`
    create_url: Url,
}

impl RestBackend {
    /// Create a client rooted at the service base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).context("Invalid backend base URL")?;

        // The service exposes the collection relative to the root; keep the
        // exact relative and absolute spellings of the two operations.
        let list_url = base.join("kraken-symbols/").context("Invalid symbol list URL")?;
        let create_url = base.join("/kraken-symbols/").context("Invalid symbol create URL")?;

        Ok(Self { list_url, create_url })
    }
}

#[async_trait]
impl SymbolBackend for RestBackend {
    fn name(&self) -> &str {
        "kraken-symbols"
    }

    async fn list_symbols(&self) -> Result<Vec<SymbolRecord>, BackendError> {
        debug!("GET {}", self.list_url);

        let response = HTTP_CLIENT
            .get(self.list_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .send().await
            .map_err(|e| BackendError::Load(e.to_string()))?;

        // A not-ok status is a load failure; the body is not touched.
        if !response.status().is_success() {
            return Err(BackendError::Load(format!("unexpected status {}", response.status())));
        }

        response
            .json::<Vec<SymbolRecord>>().await
            .map_err(|e| BackendError::Load(e.to_string()))
    }

    async fn create_symbol(&self, draft: &SymbolDraft) -> Result<SubmissionOutcome, BackendError> {
        debug!("POST {} for {}", self.create_url, draft.coin_symbol);

        let response = HTTP_CLIENT
            .post(self.create_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(draft)
            .send().await
            .map_err(|e| BackendError::Submission(e.to_string()))?;

        // Any status is folded into the outcome; the body is ignored.
        let status = response.status();

        Ok(SubmissionOutcome {
            accepted: status.is_success(),
            status: status.as_u16(),
        })
    }
}
