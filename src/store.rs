//! Per-device aggregation of every classified log in the data directory.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use log::{debug, warn};

use crate::{
    DATA_EXTENSIONS, GROUND_TRUTH_SAMPLES, SENSOR_SAMPLES,
    classify::{ClassifiedValue, classify, classify_any},
    error::AuditError,
    key::MeasurementKey,
    samples::{SampleTotals, read_samples},
};

/// Reference measurement of a device; a device records one shape or the other, never both
#[derive(Debug, Clone, PartialEq)]
pub enum GroundTruth {
    /// One log for the whole device (`<device>.dat`)
    Scalar(ClassifiedValue),
    /// One log per configuration (`<device>_<config>.dat`)
    Configured(BTreeMap<String, ClassifiedValue>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceRecord {
    pub actual: Option<GroundTruth>,
    /// sensor id → configuration → value
    pub sensors: BTreeMap<String, BTreeMap<String, ClassifiedValue>>,
}

impl DeviceRecord {
    pub fn cell(&self, sensor: &str, configuration: &str) -> Option<ClassifiedValue> {
        self.sensors.get(sensor)?.get(configuration).copied()
    }

    /// Ground truth for one configuration; `None` unless ground truth is per-configuration
    pub fn actual_for(&self, configuration: &str) -> Option<ClassifiedValue> {
        match &self.actual {
            Some(GroundTruth::Configured(map)) => map.get(configuration).copied(),
            _ => None,
        }
    }
}

/// device → record, ordered by device name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationStore {
    devices: BTreeMap<String, DeviceRecord>,
}

impl AggregationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, device: &str) -> Option<&DeviceRecord> {
        self.devices.get(device)
    }

    pub fn devices(&self) -> impl Iterator<Item = (&str, &DeviceRecord)> {
        self.devices.iter().map(|(name, rec)| (name.as_str(), rec))
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Fold one reduced log into the store. The first write to a slot wins; a
    /// second one means the directory holds duplicate logs and is an error.
    pub fn insert(&mut self, key: MeasurementKey, totals: SampleTotals) -> Result<(), AuditError> {
        let SampleTotals { sum, count, .. } = totals;
        match key {
            MeasurementKey::Sensor { sensor, device, configuration } => {
                let record = self.devices.entry(device.clone()).or_default();
                let cells = record.sensors.entry(sensor.clone()).or_default();
                if cells.contains_key(&configuration) {
                    return Err(AuditError::RepeatConfiguration { device, sensor, configuration });
                }
                cells.insert(configuration, classify(sum, count, SENSOR_SAMPLES));
            }
            MeasurementKey::GroundTruth { device, configuration } => {
                let record = self.devices.entry(device.clone()).or_default();
                let map = match record
                    .actual
                    .get_or_insert_with(|| GroundTruth::Configured(BTreeMap::new()))
                {
                    GroundTruth::Configured(map) => map,
                    GroundTruth::Scalar(_) => {
                        return Err(AuditError::InconsistentGroundTruth { device });
                    }
                };
                if map.contains_key(&configuration) {
                    return Err(AuditError::RepeatGroundTruth {
                        device,
                        configuration: Some(configuration),
                    });
                }
                map.insert(configuration, classify(sum, count, GROUND_TRUTH_SAMPLES));
            }
            MeasurementKey::Device { device } => {
                let record = self.devices.entry(device.clone()).or_default();
                match record.actual {
                    None => {
                        if count == 0 {
                            warn!("ground truth for {device} has no samples");
                        }
                        record.actual = Some(GroundTruth::Scalar(classify_any(sum, count)));
                    }
                    Some(GroundTruth::Scalar(_)) => {
                        return Err(AuditError::RepeatGroundTruth { device, configuration: None });
                    }
                    Some(GroundTruth::Configured(_)) => {
                        return Err(AuditError::InconsistentGroundTruth { device });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Collects every `.dat`/`.txt` file directly in `dir`, sorted by path
pub fn list_data_files(dir: &Path) -> Result<Vec<PathBuf>, AuditError> {
    let base = Pattern::escape(&dir.display().to_string());
    let mut files = Vec::new();
    for ext in DATA_EXTENSIONS {
        files.extend(
            glob(&format!("{base}/*.{ext}"))?
                .filter_map(|entry| match entry {
                    Ok(path) => Some(path),
                    Err(e) => {
                        warn!("skipping {}: {}", e.path().display(), e.error());
                        None
                    }
                })
                .filter(|p| p.is_file()),
        );
    }
    files.sort();
    Ok(files)
}

/// Build the store from every recognized log in `dir`
pub fn build_store(dir: &Path) -> Result<AggregationStore, AuditError> {
    if !dir.is_dir() {
        return Err(AuditError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    let mut store = AggregationStore::new();
    for path in list_data_files(dir)? {
        let Some(key) = MeasurementKey::from_path(&path) else {
            debug!("ignoring {}", path.display());
            continue;
        };
        let totals = read_samples(&path)?;
        debug!("{}: {} samples for {}", path.display(), totals.count, key.device());
        store.insert(key, totals)?;
    }
    Ok(store)
}
