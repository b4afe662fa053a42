//! File name → measurement key.
//!
//! The recorder names every log after what it measured:
//!
//! | Stem                            | Key                         |
//! |---------------------------------|-----------------------------|
//! | `<device>`                      | whole-device ground truth   |
//! | `<device>_<config>`             | ground truth for one config |
//! | `<sensor>_<device>_<config>`    | one sensor reading          |

use std::path::Path;

use crate::DATA_EXTENSIONS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeasurementKey {
    Device {
        device: String,
    },
    GroundTruth {
        device: String,
        configuration: String,
    },
    Sensor {
        sensor: String,
        device: String,
        configuration: String,
    },
}

impl MeasurementKey {
    /// Split a file stem on `_`; `None` for any segment count other than 1..=3
    pub fn parse_stem(stem: &str) -> Option<Self> {
        let parts: Vec<&str> = stem.split('_').collect();
        match parts.as_slice() {
            [device] => Some(Self::Device { device: device.to_string() }),
            [device, config] => Some(Self::GroundTruth {
                device: device.to_string(),
                configuration: config.to_string(),
            }),
            [sensor, device, config] => Some(Self::Sensor {
                sensor: sensor.to_string(),
                device: device.to_string(),
                configuration: config.to_string(),
            }),
            _ => None,
        }
    }

    /// Key for a log file path, or `None` when the file is not a recognized data file
    pub fn from_path(path: &Path) -> Option<Self> {
        match split_name(path)? {
            (stem, Some(_)) if !stem.is_empty() && is_data_file(path) => Self::parse_stem(stem),
            _ => None,
        }
    }

    pub fn device(&self) -> &str {
        match self {
            Self::Device { device }
            | Self::GroundTruth { device, .. }
            | Self::Sensor { device, .. } => device,
        }
    }

    pub fn sensor(&self) -> Option<&str> {
        match self {
            Self::Sensor { sensor, .. } => Some(sensor),
            _ => None,
        }
    }

    pub fn configuration(&self) -> Option<&str> {
        match self {
            Self::Device { .. } => None,
            Self::GroundTruth { configuration, .. } | Self::Sensor { configuration, .. } => {
                Some(configuration)
            }
        }
    }
}

/// (stem, extension) split at the first two dots of the file name, so
/// `vac_jumper.bak.dat` has extension `bak`
fn split_name(path: &Path) -> Option<(&str, Option<&str>)> {
    let mut parts = path.file_name()?.to_str()?.split('.');
    let stem = parts.next()?;
    Some((stem, parts.next()))
}

/// True when the path carries one of the recorder's extensions
pub fn is_data_file(path: &Path) -> bool {
    matches!(split_name(path), Some((_, Some(ext))) if DATA_EXTENSIONS.contains(&ext))
}
