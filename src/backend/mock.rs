use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::backend::client::{ BackendError, SubmissionOutcome, SymbolBackend };
use crate::models::symbol::{ SymbolDraft, SymbolRecord };

/// Canned reply for the next call of an operation
#[derive(Debug, Clone)]
pub enum CannedReply {
    /// Succeed; list calls return the configured records, submissions 201
    Ok,
    /// Answer with this HTTP status
    Status(u16),
    /// Fail at the transport level before any status arrives
    Transport(String),
}

/// One recorded call, with the request body as it would go on the wire
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    List,
    Create(Value),
}

/// In-memory stand-in for the kraken-symbols service.
///
/// Records every call so tests can assert on request counts and on the
/// exact JSON body of a submission.
pub struct MockBackend {
    records: Vec<SymbolRecord>,
    reply: CannedReply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockBackend {
    /// A backend whose symbol list answers with `records`
    pub fn with_records(records: Vec<SymbolRecord>) -> Self {
        Self {
            records,
            reply: CannedReply::Ok,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A backend that accepts everything and holds no symbols
    pub fn accepting() -> Self {
        Self::with_records(Vec::new())
    }

    /// A backend answering every call with `reply`
    pub fn replying(reply: CannedReply) -> Self {
        Self {
            records: Vec::new(),
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls seen so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().expect("mock call log poisoned").push(call);
    }
}

#[async_trait]
impl SymbolBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn list_symbols(&self) -> Result<Vec<SymbolRecord>, BackendError> {
        self.record(RecordedCall::List);

        match &self.reply {
            CannedReply::Ok => Ok(self.records.clone()),
            CannedReply::Status(status) => {
                Err(BackendError::Load(format!("unexpected status {}", status)))
            }
            CannedReply::Transport(message) => Err(BackendError::Load(message.clone())),
        }
    }

    async fn create_symbol(&self, draft: &SymbolDraft) -> Result<SubmissionOutcome, BackendError> {
        let body = serde_json::to_value(draft).expect("draft always serializes");
        self.record(RecordedCall::Create(body));

        match &self.reply {
            CannedReply::Ok => Ok(SubmissionOutcome { accepted: true, status: 201 }),
            CannedReply::Status(status) => {
                Ok(SubmissionOutcome { accepted: false, status: *status })
            }
            CannedReply::Transport(message) => Err(BackendError::Submission(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_the_wire_body_of_a_submission() {
        let backend = MockBackend::accepting();
        let draft = SymbolDraft::default();

        let outcome = backend.create_symbol(&draft).await.unwrap();

        assert!(outcome.accepted);
        assert_eq!(
            backend.calls(),
            vec![RecordedCall::Create(serde_json::json!({
                "coinName": "symbol name",
                "coinSymbol": "BTC",
                "currency": "USD",
            }))]
        );
    }

    #[tokio::test]
    async fn status_reply_becomes_a_rejected_outcome() {
        let backend = MockBackend::replying(CannedReply::Status(400));

        let outcome = backend.create_symbol(&SymbolDraft::default()).await.unwrap();

        assert!(!outcome.accepted);
        assert_eq!(outcome.status, 400);
    }

    #[tokio::test]
    async fn transport_reply_becomes_a_load_error() {
        let backend = MockBackend::replying(CannedReply::Transport("connection refused".into()));

        assert!(matches!(backend.list_symbols().await, Err(BackendError::Load(_))));
    }
}
