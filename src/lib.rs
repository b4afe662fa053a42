// src/lib.rs

// Audits a directory of PowerBlade measurement logs:
// 1) Every `.dat`/`.txt` file name is decoded into a (device, sensor, configuration) key.
// 2) Each file's JSON-lines samples are reduced to one classified value per key.
// 3) The per-device store feeds a completeness report, spread statistics and a ranking file.

pub mod classify;
pub mod error;
pub mod key;
pub mod ranking;
pub mod report;
pub mod samples;
pub mod scaffold;
pub mod stats;
pub mod store;


pub use classify::{ClassifiedValue, classify, classify_any};
pub use error::AuditError;
pub use key::MeasurementKey;
pub use ranking::{RankedDevice, rank, write_ranked, write_ranking};
pub use report::{render_device, render_report};
pub use samples::{SampleTotals, read_samples, reduce_lines};
pub use scaffold::{create_missing_files, missing_files};
pub use stats::{DeviceSummary, summarize_device, summarize_store};
pub use store::{AggregationStore, DeviceRecord, GroundTruth, build_store, list_data_files};

// ─────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────

/// Hardware ids of the PowerBlade sensors under test
pub const SENSOR_IDS: [&str; 5] = [
    "c098e5700048",
    "c098e570004a",
    "c098e570004e",
    "c098e5700053",
    "c098e570013c",
];

/// Test configurations, in report column order
pub const CONFIGURATIONS: [&str; 3] = ["jumper", "outlet", "surge"];

/// File extensions the recorder writes
pub const DATA_EXTENSIONS: [&str; 2] = ["dat", "txt"];

/// Samples in a complete sensor log
pub const SENSOR_SAMPLES: usize = 50;
/// Samples in a complete per-configuration ground truth log
pub const GROUND_TRUTH_SAMPLES: usize = 10;

pub const RANKING_FILE: &str = "sorted_maxDiff_power.dat";
pub const SCAFFOLD_EXTENSION: &str = "dat";
