//! Devices ordered by spread, written as `device\tmaxDiff\tratio` lines.

use std::{fs::File, io::Write, path::Path};

use csv::WriterBuilder;

use crate::{error::AuditError, stats::DeviceSummary};

#[derive(Debug, Clone, PartialEq)]
pub struct RankedDevice {
    pub device: String,
    pub max_diff: Option<f64>,
    pub ratio: Option<f64>,
}

/// Order summaries by descending `max_diff`.
///
/// Repeatedly takes the first remaining device with the largest spread, so ties
/// keep their input order. Devices without any valid reading go last.
pub fn rank(summaries: &[DeviceSummary]) -> Vec<RankedDevice> {
    let mut remaining: Vec<&DeviceSummary> = summaries.iter().collect();
    let mut out = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let mut best = 0;
        for (idx, s) in remaining.iter().enumerate().skip(1) {
            if is_larger(s.max_diff, remaining[best].max_diff) {
                best = idx;
            }
        }
        let s = remaining.remove(best);
        out.push(RankedDevice {
            device: s.device.clone(),
            max_diff: s.max_diff,
            ratio: s.ratio(),
        });
    }
    out
}

fn is_larger(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a > b,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

fn fmt_num(v: Option<f64>) -> String {
    v.unwrap_or(f64::NAN).to_string()
}

/// Serialize ranked devices as tab-delimited lines
pub fn write_ranked<W: Write>(out: W, ranked: &[RankedDevice]) -> Result<(), AuditError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(out);
    for r in ranked {
        wtr.write_record([r.device.clone(), fmt_num(r.max_diff), fmt_num(r.ratio)])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Rank `summaries` and overwrite `path` with the result
pub fn write_ranking(path: &Path, summaries: &[DeviceSummary]) -> Result<Vec<RankedDevice>, AuditError> {
    let ranked = rank(summaries);
    let file = File::create(path).map_err(|e| AuditError::io(path, e))?;
    write_ranked(file, &ranked)?;
    Ok(ranked)
}
