//! Lenient parsers for the optional document fields.
//!
//! None of these fail. Unparseable input degrades to an empty or absent value
//! so that optional metadata never blocks the document itself.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Editor settings: a JSON object with values of any type.
pub type Settings = Map<String, Value>;

/// Features: feature identifier mapped to its parameter object. A `null`
/// parameter object is kept and written back as `null`.
pub type Features = BTreeMap<String, Option<Map<String, Value>>>;

/// Comma-separated integers, in order of appearance. Entries that are blank or
/// not integers are skipped.
pub fn parse_ports(raw: &str) -> Vec<i64> {
    port_entries(raw).filter_map(|entry| entry.parse().ok()).collect()
}

/// Non-blank entries of `raw` that [`parse_ports`] skipped.
pub fn discarded_ports(raw: &str) -> Vec<&str> {
    port_entries(raw).filter(|entry| entry.parse::<i64>().is_err()).collect()
}

fn port_entries(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|entry| !entry.is_empty())
}

/// Parse settings text as a JSON object. `None` when blank or malformed.
pub fn parse_settings(raw: &str) -> Option<Settings> {
    parse_object(raw)
}

/// Parse features text as an object of objects. `None` when blank, malformed,
/// or when any feature's value is neither an object nor `null`.
pub fn parse_features(raw: &str) -> Option<Features> {
    parse_object(raw)
}

fn parse_object<T: serde::de::DeserializeOwned>(raw: &str) -> Option<T> {
    if raw.trim().is_empty() {
        return None;
    }
    serde_json::from_str(raw).ok()
}
