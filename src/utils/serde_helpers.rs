use serde::{ Deserialize, Deserializer, Serializer };
use serde::de;
use tracing::Level;

/// Serialize `tracing::Level` to a lowercase string
pub fn serialize_level<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
{
    let level_str = match *level {
        Level::TRACE => "trace",
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
    };

    serializer.serialize_str(level_str)
}

/// Deserialize `tracing::Level` from a string
pub fn deserialize_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where D: Deserializer<'de>
{
    let value = String::deserialize(deserializer)?;

    match value.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(de::Error::custom(format!("unknown log level: {}", other))),
    }
}
