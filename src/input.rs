//! Input/output records of the reconstruction tool.
//!
//! A document is a JSON object. The "keys" entry holds the threshold `k` (and
//! optionally the share count `n`); every other entry maps a decimal
//! x-coordinate to { "base": "<radix>", "value": "<digits>" }. Entries are
//! taken in the order they appear in the document.

use std::io::Read;
use std::str::FromStr;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{ReconstructError, Result};
use crate::types::{RawShare, ShareSet};

pub const METADATA_KEY: &str = "keys";

/// JSON numbers and numeric strings are both accepted for counts and bases.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Numeric {
    Int(u64),
    Text(String),
}

impl Numeric {
    fn parse<T: FromStr + TryFrom<u64>>(&self, field: &str) -> Result<T> {
        let parsed = match self {
            Numeric::Int(n) => T::try_from(*n).ok(),
            Numeric::Text(s) => s.parse::<T>().ok(),
        };
        parsed.ok_or_else(|| {
            ReconstructError::MalformedInput(format!("`{field}` is not a valid number: {self:?}"))
        })
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    k: Option<Numeric>,
    n: Option<Numeric>,
}

#[derive(Debug, Deserialize)]
struct ShareRecord {
    base: Option<Numeric>,
    value: Option<String>,
}

/// The result record written by the tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Output {
    pub constant: String,
}

impl Output {
    pub fn new(constant: &BigInt) -> Self {
        Output {
            constant: constant.to_string(),
        }
    }
}

/// Render `{"constant": "<decimal>"}`, two-space indented unless `compact`.
pub fn render(constant: &BigInt, compact: bool) -> Result<String> {
    let out = Output::new(constant);
    let text = if compact {
        serde_json::to_string(&out)?
    } else {
        serde_json::to_string_pretty(&out)?
    };
    Ok(text)
}

pub fn load_shares<R: Read>(reader: R) -> Result<ShareSet> {
    let doc: Value = serde_json::from_reader(reader)?;
    share_set(&doc)
}

pub fn parse_shares(document: &str) -> Result<ShareSet> {
    let doc: Value = serde_json::from_str(document)?;
    share_set(&doc)
}

fn metadata(root: &Map<String, Value>) -> Result<(usize, Option<usize>)> {
    let raw = root
        .get(METADATA_KEY)
        .ok_or_else(|| ReconstructError::MissingField(METADATA_KEY.to_string()))?;
    let meta = Metadata::deserialize(raw).map_err(|e| {
        ReconstructError::MalformedInput(format!("`{METADATA_KEY}` record: {e}"))
    })?;

    let k_field = format!("{METADATA_KEY}.k");
    let threshold: usize = meta
        .k
        .as_ref()
        .ok_or_else(|| ReconstructError::MissingField(k_field.clone()))?
        .parse(&k_field)?;
    if threshold == 0 {
        return Err(ReconstructError::MalformedInput(
            "threshold k must be at least 1".to_string(),
        ));
    }

    let declared_total = match &meta.n {
        Some(n) => Some(n.parse::<usize>(&format!("{METADATA_KEY}.n"))?),
        None => None,
    };
    Ok((threshold, declared_total))
}

// Optional sign, then ASCII digits only. `BigInt::from_str` alone would also
// take "1_0".
fn is_decimal(key: &str) -> bool {
    let digits = key.strip_prefix(['+', '-']).unwrap_or(key);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn raw_share(key: &str, record: &Value) -> Result<RawShare> {
    let x = Some(key)
        .filter(|k| is_decimal(k))
        .and_then(|k| BigInt::from_str(k).ok())
        .ok_or_else(|| {
            ReconstructError::MalformedInput(format!("point key {key:?} is not a decimal integer"))
        })?;
    let rec = ShareRecord::deserialize(record)
        .map_err(|e| ReconstructError::MalformedInput(format!("point {key}: {e}")))?;

    let base_field = format!("{key}.base");
    let base = rec
        .base
        .as_ref()
        .ok_or_else(|| ReconstructError::MissingField(base_field.clone()))?
        .parse::<u32>(&base_field)?;
    let value = rec
        .value
        .ok_or_else(|| ReconstructError::MissingField(format!("{key}.value")))?;

    Ok(RawShare { x, base, value })
}

/// Build the share set from a parsed document.
///
/// Only the first `k` point entries are inspected; anything after them is
/// counted but never parsed, so trailing garbage cannot affect the result.
pub fn share_set(doc: &Value) -> Result<ShareSet> {
    let root = doc.as_object().ok_or_else(|| {
        ReconstructError::MalformedInput("document must be a JSON object".to_string())
    })?;
    let (threshold, declared_total) = metadata(root)?;

    let entries: Vec<(&String, &Value)> =
        root.iter().filter(|(key, _)| *key != METADATA_KEY).collect();
    if entries.len() < threshold {
        return Err(ReconstructError::InsufficientPoints {
            needed: threshold,
            available: entries.len(),
        });
    }
    if let Some(n) = declared_total {
        if n != entries.len() {
            warn!(declared = n, found = entries.len(), "share count mismatch");
        }
    }

    let shares = entries
        .into_iter()
        .take(threshold)
        .map(|(key, record)| raw_share(key, record))
        .collect::<Result<Vec<_>>>()?;

    Ok(ShareSet {
        threshold,
        declared_total,
        shares,
    })
}
