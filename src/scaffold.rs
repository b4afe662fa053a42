//! "clear" mode: create empty logs for every gap of one device, so the
//! recording session can be ticked off file by file.

use std::{
    fs::OpenOptions,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    CONFIGURATIONS, SCAFFOLD_EXTENSION, SENSOR_IDS,
    error::AuditError,
    store::{AggregationStore, DeviceRecord, GroundTruth},
};

/// Paths that would be created for `device`, configuration-major.
///
/// Ground truth files are only listed for devices already recorded per
/// configuration; a device with scalar or no ground truth gets sensor files only.
pub fn missing_files(dir: &Path, store: &AggregationStore, device: &str) -> Vec<PathBuf> {
    let empty = DeviceRecord::default();
    let record = store.get(device).unwrap_or(&empty);
    let configured = matches!(record.actual, Some(GroundTruth::Configured(_)));

    let mut out = Vec::new();
    for config in CONFIGURATIONS {
        if configured && record.actual_for(config).is_none() {
            out.push(dir.join(format!("{device}_{config}.{SCAFFOLD_EXTENSION}")));
        }
        for sensor in SENSOR_IDS {
            if record.cell(sensor, config).is_none() {
                out.push(dir.join(format!("{sensor}_{device}_{config}.{SCAFFOLD_EXTENSION}")));
            }
        }
    }
    out
}

/// Create every missing file for `device`; existing files are left untouched
pub fn create_missing_files(
    dir: &Path,
    store: &AggregationStore,
    device: &str,
) -> Result<Vec<PathBuf>, AuditError> {
    let mut created = Vec::new();
    for path in missing_files(dir, store, device) {
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => {
                println!("Creating file: {}", path.display());
                created.push(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => return Err(AuditError::io(path, e)),
        }
    }
    Ok(created)
}
