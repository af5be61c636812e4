use std::fmt;
use serde::{ Deserialize, Serialize };

/// Default values used when the caller supplies nothing for a draft field
pub const DEFAULT_COIN_NAME: &str = "symbol name";
pub const DEFAULT_COIN_SYMBOL: &str = "BTC";
pub const DEFAULT_CURRENCY: &str = "USD";

/// In-progress symbol registration, edited field by field before submission.
///
/// Serializes with the wire spelling (`coinName`, `coinSymbol`, `currency`)
/// expected by the kraken-symbols service. Content is free-form; the service
/// owns validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolDraft {
    pub coin_name: String,
    pub coin_symbol: String,
    pub currency: String,
}

impl SymbolDraft {
    /// Create a draft, falling back to the well-known defaults per field
    pub fn new(
        coin_name: Option<String>,
        coin_symbol: Option<String>,
        currency: Option<String>
    ) -> Self {
        Self {
            coin_name: coin_name.unwrap_or_else(|| DEFAULT_COIN_NAME.to_string()),
            coin_symbol: coin_symbol.unwrap_or_else(|| DEFAULT_COIN_SYMBOL.to_string()),
            currency: currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        }
    }

    /// Replace the named field with `value`. No trimming, no coercion.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::CoinName => self.coin_name = value,
            DraftField::CoinSymbol => self.coin_symbol = value,
            DraftField::Currency => self.currency = value,
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::CoinName => &self.coin_name,
            DraftField::CoinSymbol => &self.coin_symbol,
            DraftField::Currency => &self.currency,
        }
    }
}

impl Default for SymbolDraft {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

impl fmt::Display for SymbolDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}{})", self.coin_name, self.coin_symbol, self.currency)
    }
}

/// Editable draft fields, named with their wire spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    CoinName,
    CoinSymbol,
    Currency,
}

impl DraftField {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "coinName" => Some(DraftField::CoinName),
            "coinSymbol" => Some(DraftField::CoinSymbol),
            "currency" => Some(DraftField::Currency),
            _ => None,
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DraftField::CoinName => "coinName",
            DraftField::CoinSymbol => "coinSymbol",
            DraftField::Currency => "currency",
        };
        write!(f, "{}", s)
    }
}

/// One tracked symbol with its latest OHLC values, as returned by the
/// kraken-symbols service. The shape is dictated by the service; nothing is
/// validated client side. `name` is treated as the row identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolRecord {
    pub name: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}
