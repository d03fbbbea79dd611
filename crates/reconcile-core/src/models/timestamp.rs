//! Serde adapter for wall-clock instants on the wire.
//!
//! Accepts either an RFC 3339 / ISO-8601 string or an integer count of
//! epoch milliseconds. Always writes RFC 3339 with millisecond precision
//! and a `Z` suffix.
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Stamp {
//!     #[serde(with = "reconcile_core::models::timestamp")]
//!     at: DateTime<Utc>,
//! }
//!
//! let a: Stamp = serde_json::from_str(r#"{"at": 1700000000000}"#).unwrap();
//! let b: Stamp = serde_json::from_str(r#"{"at": "2023-11-14T22:13:20Z"}"#).unwrap();
//! assert_eq!(a.at, b.at);
//! ```

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    EpochMillis(i64),
    Text(String),
}

pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::EpochMillis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| de::Error::custom(format!("epoch milliseconds out of range: {ms}"))),
        RawTimestamp::Text(text) => DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| de::Error::custom(format!("invalid timestamp {text:?}: {e}"))),
    }
}
