//! Timestamp text codec for `TIMESTAMP` columns.
//!
//! Clients send dates as strings. Output is always `YYYY-MM-DD HH:MM:SS`
//! (plus fractional seconds when present).

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

const INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a client-supplied timestamp. Offsets are normalized to UTC and a
/// bare date means midnight.
pub fn parse(raw: &str) -> Result<NaiveDateTime, String> {
    let s = raw.trim();
    for fmt in INPUT_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ts);
        }
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.naive_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid timestamp `{raw}`"))
}

pub fn format(ts: &NaiveDateTime) -> String {
    ts.format(OUTPUT_FORMAT).to_string()
}

pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(ts))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(D::Error::custom)
}
