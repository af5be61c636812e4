use async_trait::async_trait;
use thiserror::Error;

use crate::models::symbol::{ SymbolDraft, SymbolRecord };

/// Failures talking to the kraken-symbols service.
///
/// Transport problems (DNS, refused connection, timeout) and non-2xx
/// statuses are folded into the same two kinds, one per operation.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Loading the symbol list failed
    #[error("symbol list request failed: {0}")]
    Load(String),

    /// Submitting a symbol draft failed before a status was received
    #[error("symbol submission failed: {0}")]
    Submission(String),
}

/// Result of one symbol submission.
///
/// The service answers with a bare status; the caller receives it but the
/// UI deliberately renders nothing for it (open product question).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub accepted: bool,
    pub status: u16,
}

/// Client seam over the kraken-symbols service.
///
/// Network access is injected through this trait so flows can be driven by
/// the recording mock in tests instead of a live socket.
#[async_trait]
pub trait SymbolBackend: Send + Sync {
    /// Name of the backend, for logs
    fn name(&self) -> &str;

    /// Fetch the full list of tracked symbols with their OHLC values
    async fn list_symbols(&self) -> Result<Vec<SymbolRecord>, BackendError>;

    /// Register one symbol draft; any HTTP status becomes an outcome
    async fn create_symbol(&self, draft: &SymbolDraft) -> Result<SubmissionOutcome, BackendError>;
}
