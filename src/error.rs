//! Error taxonomy for the audit.
//!
//! Record-level parse problems never surface here: they are skipped or logged
//! by the sample reducer. Everything in [`AuditError`] stops the run.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bad data directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("repeat configuration: {device}, {sensor}, {configuration}")]
    RepeatConfiguration {
        device: String,
        sensor: String,
        configuration: String,
    },

    #[error("repeat ground truth: {device}{}", .configuration.as_deref().map(|c| format!(", {c}")).unwrap_or_default())]
    RepeatGroundTruth {
        device: String,
        configuration: Option<String>,
    },

    #[error("inconsistent ground truth: {device}")]
    InconsistentGroundTruth { device: String },

    #[error("no data for device: {0}")]
    UnknownDevice(String),

    #[error("writing ranking: {0}")]
    Ranking(#[from] csv::Error),
}

impl AuditError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// True for the errors that mean the input directory itself is corrupt
    pub fn is_fatal_input(&self) -> bool {
        matches!(
            self,
            Self::RepeatConfiguration { .. }
                | Self::RepeatGroundTruth { .. }
                | Self::InconsistentGroundTruth { .. }
        )
    }
}
