use anyhow::{ anyhow, Context, Result };
use tracing::{ debug, info };

use crate::backend::client::{ BackendError, SubmissionOutcome, SymbolBackend };
use crate::backend::rest::RestBackend;
use crate::config::Config;
use crate::models::symbol::SymbolDraft;

/// Serialize the draft and issue exactly one POST; any HTTP status comes
/// back as an outcome, transport failures as an error.
pub async fn submit_draft(
    backend: &dyn SymbolBackend,
    draft: &SymbolDraft
) -> Result<SubmissionOutcome, BackendError> {
    debug!("Submitting draft {}", draft);
    backend.create_symbol(draft).await
}

pub fn run_submit(
    config: Config,
    coin_name: Option<String>,
    coin_symbol: Option<String>,
    currency: Option<String>
) -> Result<()> {
    let backend = RestBackend::new(&config.backend_url).context(
        "Failed to create backend client"
    )?;

    let draft = SymbolDraft::new(coin_name, coin_symbol, currency);
    info!("Submitting symbol {} to {}", draft.coin_symbol, backend.name());

    let rt = tokio::runtime::Builder
        ::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    let outcome = rt.block_on(async {
        tokio::time::timeout(crate::API_TIMEOUT, submit_draft(&backend, &draft)).await
    });

    match outcome {
        Ok(Ok(outcome)) => {
            // No user-facing feedback is rendered for a submission; the
            // outcome only reaches the debug log.
            debug!(
                status = outcome.status,
                accepted = outcome.accepted,
                "Submission response received"
            );
            Ok(())
        }
        Ok(Err(e)) => Err(e).context("Failed to submit symbol"),
        Err(_) => Err(anyhow!("Timed out while submitting symbol")),
    }
}
