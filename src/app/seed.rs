use anyhow::{ anyhow, Context, Result };
use futures::future;
use tracing::{ info, warn };

use crate::backend::client::SymbolBackend;
use crate::backend::rest::RestBackend;
use crate::config::Config;
use crate::enums::currency::Currency;
use crate::models::symbol::SymbolDraft;

/// Starter coins registered by the seed mode, as (coin name, ticker)
pub const STARTER_COINS: [(&str, &str); 6] = [
    ("bitcoin", "BTC"),
    ("etherum", "ETH"),
    ("thether usd", "USDT"),
    ("cardano", "ADA"),
    ("ripple", "XRP"),
    ("solana", "SOL"),
];

/// Register every starter coin for `currency`, best effort per coin.
///
/// The service owns the combined pair symbol (ticker + currency); the client
/// only sends the three draft fields. Returns how many submissions were
/// accepted; rejections are logged and do not stop the run.
pub async fn seed_symbols(backend: &dyn SymbolBackend, currency: Currency) -> usize {
    let drafts: Vec<SymbolDraft> = STARTER_COINS
        .iter()
        .map(|(coin_name, coin_symbol)| {
            SymbolDraft::new(
                Some(coin_name.to_string()),
                Some(coin_symbol.to_string()),
                Some(currency.code().to_string())
            )
        })
        .collect();

    let results = future::join_all(drafts.iter().map(|draft| backend.create_symbol(draft))).await;

    let mut accepted = 0;
    for (draft, result) in drafts.iter().zip(results) {
        match result {
            Ok(outcome) if outcome.accepted => {
                accepted += 1;
            }
            Ok(outcome) => {
                warn!("{} rejected with status {}", draft.coin_symbol, outcome.status);
            }
            Err(e) => {
                warn!("{} failed: {}", draft.coin_symbol, e);
            }
        }
    }

    accepted
}

pub fn run_seed(config: Config, currency: &str) -> Result<()> {
    let currency = Currency::from_str(currency).ok_or_else(||
        anyhow!("Unknown currency code: {}", currency)
    )?;

    let backend = RestBackend::new(&config.backend_url).context(
        "Failed to create backend client"
    )?;

    let rt = tokio::runtime::Builder
        ::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    let accepted = rt
        .block_on(async {
            tokio::time::timeout(crate::API_TIMEOUT, seed_symbols(&backend, currency)).await
        })
        .map_err(|_| anyhow!("Timed out while seeding starter coins"))?;

    info!("✓ Registered {} of {} starter coins", accepted, STARTER_COINS.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::{ CannedReply, MockBackend, RecordedCall };

    #[tokio::test]
    async fn submits_every_starter_coin_with_the_chosen_currency() {
        let backend = MockBackend::accepting();

        let accepted = seed_symbols(&backend, Currency::Euro).await;

        assert_eq!(accepted, STARTER_COINS.len());

        let calls = backend.calls();
        assert_eq!(calls.len(), STARTER_COINS.len());
        assert!(
            calls.contains(
                &RecordedCall::Create(serde_json::json!({
                "coinName": "bitcoin",
                "coinSymbol": "BTC",
                "currency": "EUR",
            }))
            )
        );
        assert!(
            calls.contains(
                &RecordedCall::Create(serde_json::json!({
                "coinName": "solana",
                "coinSymbol": "SOL",
                "currency": "EUR",
            }))
            )
        );
    }

    #[tokio::test]
    async fn rejections_are_counted_out_but_do_not_stop_the_run() {
        let backend = MockBackend::replying(CannedReply::Status(400));

        let accepted = seed_symbols(&backend, Currency::UsDollar).await;

        assert_eq!(accepted, 0);
        assert_eq!(backend.calls().len(), STARTER_COINS.len());
    }

    #[tokio::test]
    async fn transport_failures_do_not_stop_the_run_either() {
        let backend = MockBackend::replying(CannedReply::Transport("connection refused".into()));

        let accepted = seed_symbols(&backend, Currency::UsDollar).await;

        assert_eq!(accepted, 0);
        assert_eq!(backend.calls().len(), STARTER_COINS.len());
    }
}
