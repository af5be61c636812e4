use std::collections::HashMap;
use serde::Deserialize;
use serde_json::Value;

/// Response envelope of the Kraken public OHLC endpoint.
///
/// `result` maps one symbol key to an array of OHLC rows plus a `last`
/// cursor. The symbol key is not guaranteed to match the requested pair
/// (Kraken answers `BTCUSD` under `XXBTUSD`), so rows are kept untyped here
/// and resolved by the extractor.
#[derive(Debug, Deserialize)]
pub struct KrakenOhlcResponse {
    #[serde(default)]
    pub error: Vec<String>,
    #[serde(default)]
    pub result: HashMap<String, Value>,
}

/// Column positions inside one Kraken OHLC row:
/// `[time, open, high, low, close, vwap, volume, count]`
pub mod row_index {
    pub const DATE: usize = 0;
    pub const OPEN: usize = 1;
    pub const HIGH: usize = 2;
    pub const LOW: usize = 3;
    pub const CLOSE: usize = 4;
}

/// Key of the pagination cursor inside `result`, next to the symbol key.
pub const LAST_CURSOR_KEY: &str = "last";

#[cfg(test)]
mod tests {
    use super::*;

    const OHLC_EXAMPLE_DATA: &str = r#"{
  "error": [],
  "result": {
    "XXBTZUSD": [
      [
        1628812800,
        "44500.0",
        "46000.0",
        "44000.1",
        "45800.9",
        "45100.3",
        "120.25537510",
        614
      ]
    ],
    "last": 1628812800
  }
}"#;

    #[test]
    fn example_payload_deserializes() {
        let response: KrakenOhlcResponse = serde_json::from_str(OHLC_EXAMPLE_DATA).unwrap();

        assert!(response.error.is_empty());
        assert!(response.result.contains_key("XXBTZUSD"));
        assert!(response.result.contains_key(LAST_CURSOR_KEY));
    }

    #[test]
    fn error_payload_deserializes() {
        let response: KrakenOhlcResponse = serde_json::from_str(
            r#"{"error": ["EQuery:Unknown asset pair"]}"#
        ).unwrap();

        assert_eq!(response.error, vec!["EQuery:Unknown asset pair".to_string()]);
        assert!(response.result.is_empty());
    }
}
