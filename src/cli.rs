use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use pb_data_check::RANKING_FILE;

/// Check PowerBlade measurement logs for completeness and rank devices by spread
#[derive(Parser, Debug)]
#[command(name = "pb_data_check")]
pub struct Args {
    /// Directory holding the measurement logs
    #[arg(long, env = "PB_DATA")]
    pub data_dir: PathBuf,

    /// Where to write the ranking
    #[arg(long, default_value = RANKING_FILE)]
    pub output: PathBuf,

    /// A device name, `missing` (only show gaps) or `clear` (scaffold empty logs)
    pub target: Option<String>,

    /// Device to scaffold, with `clear`
    pub clear_device: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    All,
    Missing,
    Device(String),
    Clear(String),
}

impl Args {
    pub fn mode(&self) -> Result<Mode> {
        match (self.target.as_deref(), self.clear_device.as_deref()) {
            (None, _) => Ok(Mode::All),
            (Some("clear"), Some(device)) => Ok(Mode::Clear(device.to_string())),
            (Some("clear"), None) => bail!("`clear` needs the device to scaffold"),
            (Some(target), Some(extra)) => bail!("unexpected argument `{extra}` after `{target}`"),
            (Some("missing"), None) => Ok(Mode::Missing),
            (Some(device), None) => Ok(Mode::Device(device.to_string())),
        }
    }
}
