//! Per-device average and spread across sensor readings.

use log::debug;

use crate::{CONFIGURATIONS, SENSOR_IDS, store::AggregationStore, store::DeviceRecord};

/// A (sensor, configuration) cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub sensor: &'static str,
    pub configuration: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSummary {
    pub device: String,
    /// Mean over valid cells; `None` when the device has none
    pub average: Option<f64>,
    /// Largest minus smallest valid cell; `None` when the device has none
    pub max_diff: Option<f64>,
    pub max_cell: Option<CellRef>,
    pub min_cell: Option<CellRef>,
    pub valid_cells: usize,
}

impl DeviceSummary {
    /// `max_diff / average`, the spread relative to the device's draw
    pub fn ratio(&self) -> Option<f64> {
        Some(self.max_diff? / self.average?)
    }
}

/// Scan every known sensor/configuration cell that holds a complete average.
/// Ground truth is not part of the scan.
pub fn summarize_device(device: &str, record: &DeviceRecord) -> DeviceSummary {
    let mut sum = 0.0;
    let mut valid_cells = 0usize;
    let mut max_val = f64::NEG_INFINITY;
    let mut min_val = f64::INFINITY;
    let mut max_cell = None;
    let mut min_cell = None;

    for sensor in SENSOR_IDS {
        for configuration in CONFIGURATIONS {
            let Some(value) = record.cell(sensor, configuration).and_then(|v| v.average()) else {
                continue;
            };
            sum += value;
            valid_cells += 1;

            let here = CellRef { sensor, configuration };
            if value < min_val {
                min_val = value;
                min_cell = Some(here);
            }
            if value > max_val {
                max_val = value;
                max_cell = Some(here);
            }
        }
    }

    let (average, max_diff) = if valid_cells == 0 {
        (None, None)
    } else {
        (Some(sum / valid_cells as f64), Some(max_val - min_val))
    };

    if let (Some(hi), Some(lo)) = (max_cell, min_cell) {
        debug!(
            "{device}: max {max_val} ({}, {}), min {min_val} ({}, {})",
            hi.sensor, hi.configuration, lo.sensor, lo.configuration
        );
    }

    DeviceSummary {
        device: device.to_string(),
        average,
        max_diff,
        max_cell,
        min_cell,
        valid_cells,
    }
}

/// Summaries for every device, in store order
pub fn summarize_store(store: &AggregationStore) -> Vec<DeviceSummary> {
    store
        .devices()
        .map(|(device, record)| summarize_device(device, record))
        .collect()
}
