//! JSON-lines sample logs → (sum, count) of the `power` field.

use std::{fs, path::Path};

use log::warn;
use serde::Deserialize;
use serde_json::error::Category;

use crate::error::AuditError;

/// Running totals for one log file
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SampleTotals {
    pub sum: f64,
    pub count: usize,
    /// Lines that were neither a sample nor a truncated tail
    pub rejected: usize,
}

#[derive(Debug, Deserialize)]
struct Sample {
    #[serde(deserialize_with = "number_or_text")]
    power: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Power {
    Number(f64),
    Text(String),
}

fn number_or_text<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Power::deserialize(de)? {
        Power::Number(v) => Ok(v),
        Power::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("power is not a number: {s:?}"))),
    }
}

/// Sum the `power` field over every parseable line of `content`.
///
/// Empty and truncated lines (JSON that ends early) are skipped silently; any other
/// failure is logged against `origin` and skipped.
pub fn reduce_lines(origin: &Path, content: &str) -> SampleTotals {
    let mut totals = SampleTotals::default();
    for (idx, line) in content.split('\n').enumerate() {
        match serde_json::from_str::<Sample>(line) {
            Ok(sample) => {
                totals.sum += sample.power;
                totals.count += 1;
            }
            Err(e) if e.classify() == Category::Eof => {}
            Err(e) => {
                totals.rejected += 1;
                warn!("{}:{}: {}", origin.display(), idx + 1, e);
            }
        }
    }
    totals
}

/// Read and reduce one log file. Bytes that are not UTF-8 are replaced, so a
/// corrupt or binary file only costs its own lines.
pub fn read_samples(path: &Path) -> Result<SampleTotals, AuditError> {
    let bytes = fs::read(path).map_err(|e| AuditError::io(path, e))?;
    Ok(reduce_lines(path, &String::from_utf8_lossy(&bytes)))
}
