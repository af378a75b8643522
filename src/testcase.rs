use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use num_bigint::BigInt;
use serde::Deserialize;
use thiserror::Error;

use crate::{ShamirError, Share, recover_secret};

/// One record as found in a test-case file: the `keys` header plus one entry
/// per 1-based share index.
///
/// ```json
/// {
///     "keys": { "n": 4, "k": 3 },
///     "1": { "base": "10", "value": "4" },
///     "2": { "base": "2", "value": "111" }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct TestCase {
    keys: Option<Keys>,
    #[serde(flatten)]
    entries: BTreeMap<String, Entry>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Keys {
    n: usize,
    k: usize,
}

// Field presence is checked per entry so the diagnostic can name the index.
#[derive(Debug, Deserialize)]
struct Entry {
    base: Option<String>,
    value: Option<String>,
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Malformed record: {0}")]
    MalformedInput(String),
    #[error("Threshold k ({k}) cannot be greater than share count n ({n})")]
    ParameterViolation { k: usize, n: usize },
    #[error(transparent)]
    Recover(#[from] ShamirError),
    #[error("Cannot read {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("Record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl TestCase {
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Recover the secret of a single record: decode the entries `1..=n` in
/// index order, using each entry's 1-based index as its x-coordinate, then
/// interpolate over the first k. Entries keyed outside `1..=n` are ignored.
pub fn recover_record(case: &TestCase) -> Result<BigInt, RecordError> {
    let Keys { n, k } = case
        .keys
        .ok_or_else(|| RecordError::MalformedInput("missing 'keys'".to_string()))?;
    if k > n {
        return Err(RecordError::ParameterViolation { k, n });
    }

    let mut decoded = Vec::with_capacity(n);
    for i in 1..=n {
        let entry = case
            .entries
            .get(&i.to_string())
            .ok_or_else(|| RecordError::MalformedInput(format!("missing entry {i}")))?;
        let base = entry
            .base
            .as_ref()
            .ok_or_else(|| RecordError::MalformedInput(format!("missing 'base' in entry {i}")))?;
        let value = entry
            .value
            .as_ref()
            .ok_or_else(|| RecordError::MalformedInput(format!("missing 'value' in entry {i}")))?;
        let base: u32 = base.parse().map_err(|_| {
            RecordError::MalformedInput(format!("entry {i} has a non-numeric base '{base}'"))
        })?;
        let share = Share { x: i as u32, base, raw: value.clone() };
        decoded.push(share.decode()?);
    }

    Ok(recover_secret(&decoded, k)?)
}

/// Load one record file and recover its secret. Errors are per-record
/// values; the caller decides whether to stop or move on to the next file.
pub fn process_file(path: &Path) -> Result<BigInt, RecordError> {
    let json = fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.display().to_string(),
        source,
    })?;
    recover_record(&TestCase::from_json(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recovered(json: &str) -> Result<BigInt, RecordError> {
        recover_record(&TestCase::from_json(json)?)
    }

    #[test]
    fn recovers_a_mixed_base_record() {
        let json = r#"{
            "keys": { "n": 4, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "2", "value": "111" },
            "3": { "base": "10", "value": "12" },
            "4": { "base": "4", "value": "213" }
        }"#;
        assert_eq!(recovered(json).unwrap(), BigInt::from(3));
    }

    #[test]
    fn ignores_entries_past_n() {
        let json = r#"{
            "keys": { "n": 2, "k": 2 },
            "1": { "base": "10", "value": "5" },
            "2": { "base": "10", "value": "7" },
            "9": { "base": "10", "value": "999" }
        }"#;
        assert_eq!(recovered(json).unwrap(), BigInt::from(3));
    }

    #[test]
    fn reports_missing_keys_header() {
        let json = r#"{ "1": { "base": "10", "value": "4" } }"#;
        assert!(matches!(
            recovered(json),
            Err(RecordError::MalformedInput(message)) if message.contains("keys")
        ));
    }

    #[test]
    fn reports_threshold_above_share_count() {
        let json = r#"{ "keys": { "n": 2, "k": 3 } }"#;
        assert!(matches!(
            recovered(json),
            Err(RecordError::ParameterViolation { k: 3, n: 2 })
        ));
    }

    #[test]
    fn reports_missing_entries_and_fields() {
        let json = r#"{
            "keys": { "n": 2, "k": 2 },
            "1": { "base": "10", "value": "5" }
        }"#;
        assert!(matches!(
            recovered(json),
            Err(RecordError::MalformedInput(message)) if message.contains("entry 2")
        ));

        let json = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "value": "5" }
        }"#;
        assert!(matches!(
            recovered(json),
            Err(RecordError::MalformedInput(message)) if message.contains("'base' in entry 1")
        ));

        let json = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "ten", "value": "5" }
        }"#;
        assert!(matches!(
            recovered(json),
            Err(RecordError::MalformedInput(message)) if message.contains("non-numeric base")
        ));
    }

    #[test]
    fn propagates_core_errors() {
        let json = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "1", "value": "0" }
        }"#;
        assert!(matches!(
            recovered(json),
            Err(RecordError::Recover(ShamirError::InvalidBase(1)))
        ));

        let json = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "10", "value": "4x" }
        }"#;
        assert!(matches!(
            recovered(json),
            Err(RecordError::Recover(ShamirError::InvalidDigit { digit: 'x', base: 10 }))
        ));
    }

    #[test]
    fn rejects_non_json_input() {
        assert!(matches!(
            TestCase::from_json("not json"),
            Err(RecordError::Json(_))
        ));
    }
}
