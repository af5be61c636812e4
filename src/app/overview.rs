use anyhow::{ Context, Result };
use tracing::{ info, warn };

use crate::backend::client::SymbolBackend;
use crate::backend::rest::RestBackend;
use crate::config::Config;
use crate::models::load_state::LoadState;
use crate::ui::table;
use crate::utils::console;

/// Fixed user-facing message for any failure while loading the overview
pub const LOAD_ERROR_MESSAGE: &str = "error loading data";

/// Owns the tri-state load status of the symbol overview and performs at
/// most one fetch over its lifetime.
pub struct OverviewLoader {
    state: LoadState,
}

impl OverviewLoader {
    pub fn new() -> Self {
        Self { state: LoadState::NotLoaded }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Fetch the symbol list once; later calls return without a request.
    ///
    /// Non-ok statuses, transport errors and timeouts all collapse into the
    /// fixed error message; the body of a failed response is never touched.
    pub async fn load(&mut self, backend: &dyn SymbolBackend) {
        if !self.state.is_not_loaded() {
            return;
        }

        let result = tokio::time::timeout(crate::API_TIMEOUT, backend.list_symbols()).await;

        self.state = match result {
            Ok(Ok(records)) => {
                info!("✓ Loaded {} symbols from {}", records.len(), backend.name());
                LoadState::Loaded(records)
            }
            Ok(Err(e)) => {
                warn!("Failed to load symbols: {}", e);
                LoadState::Errored(LOAD_ERROR_MESSAGE.to_string())
            }
            Err(_) => {
                warn!("Timed out while loading symbols");
                LoadState::Errored(LOAD_ERROR_MESSAGE.to_string())
            }
        };
    }

    /// Text for the current state: the error message alone when errored,
    /// otherwise the table of whatever is loaded (an empty list before
    /// resolution).
    pub fn render(&self) -> String {
        match &self.state {
            LoadState::Errored(message) => message.clone(),
            state => table::render_symbol_table(state.records()),
        }
    }
}

impl Default for OverviewLoader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_overview(config: Config) -> Result<()> {
    let backend = RestBackend::new(&config.backend_url).context(
        "Failed to create backend client"
    )?;

    let rt = tokio::runtime::Builder
        ::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;

    let mut loader = OverviewLoader::new();
    rt.block_on(loader.load(&backend));

    match loader.state() {
        LoadState::Errored(_) => console::print_error(&loader.render()),
        _ => console::print_table(&loader.render()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::{ CannedReply, MockBackend, RecordedCall };
    use crate::models::symbol::SymbolRecord;
    use crate::ui::table::NO_DATA_MESSAGE;

    fn records() -> Vec<SymbolRecord> {
        [
            ("BTCUSD", 152.21, 170.0, 162.0, 165.0),
            ("ETHUSD", 100.21, 105.0, 95.0, 102.78),
            ("USDTUSD", 50.0, 58.0, 45.0, 55.32),
            ("ADAUSD", 25.0, 26.0, 18.0, 20.85),
        ]
            .into_iter()
            .map(|(name, open, high, low, close)| SymbolRecord {
                name: name.to_string(),
                open,
                high,
                low,
                close,
            })
            .collect()
    }

    #[test]
    fn renders_the_empty_table_before_resolution() {
        let loader = OverviewLoader::new();

        assert!(loader.state().is_not_loaded());
        assert_eq!(loader.render(), NO_DATA_MESSAGE);
    }

    #[tokio::test]
    async fn issues_exactly_one_fetch_regardless_of_repeated_loads() {
        let backend = MockBackend::with_records(records());
        let mut loader = OverviewLoader::new();

        loader.load(&backend).await;
        loader.load(&backend).await;
        loader.load(&backend).await;

        assert_eq!(backend.calls(), vec![RecordedCall::List]);
    }

    #[tokio::test]
    async fn a_successful_fetch_reaches_the_renderer_unchanged() {
        let backend = MockBackend::with_records(records());
        let mut loader = OverviewLoader::new();

        loader.load(&backend).await;

        assert_eq!(loader.state(), &LoadState::Loaded(records()));
        // header + separator + one row per record
        assert_eq!(loader.render().lines().count(), 2 + records().len());
    }

    #[tokio::test]
    async fn a_not_ok_response_renders_the_fixed_error_message() {
        let backend = MockBackend::replying(CannedReply::Status(500));
        let mut loader = OverviewLoader::new();

        loader.load(&backend).await;

        assert_eq!(loader.render(), "error loading data");
    }

    #[tokio::test]
    async fn a_transport_failure_renders_the_same_error_message() {
        let backend = MockBackend::replying(CannedReply::Transport("dns failure".into()));
        let mut loader = OverviewLoader::new();

        loader.load(&backend).await;

        assert_eq!(loader.render(), LOAD_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn an_errored_loader_does_not_retry() {
        let backend = MockBackend::replying(CannedReply::Status(500));
        let mut loader = OverviewLoader::new();

        loader.load(&backend).await;
        loader.load(&backend).await;

        assert_eq!(backend.calls().len(), 1);
    }
}
