//! Console completeness tables.

use colored::Colorize;

use crate::{
    CONFIGURATIONS, SENSOR_IDS,
    classify::ClassifiedValue,
    error::AuditError,
    store::{AggregationStore, DeviceRecord, GroundTruth},
};

pub const BANNER: &str = "Data checkup for PowerBlade measurements";

/// What a table cell shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellStatus {
    /// No log at all
    Missing,
    Incomplete,
    Placeholder,
    Value(f64),
}

impl CellStatus {
    pub fn of(value: Option<ClassifiedValue>) -> Self {
        match value {
            None => Self::Missing,
            Some(ClassifiedValue::Incomplete) => Self::Incomplete,
            Some(ClassifiedValue::Placeholder) => Self::Placeholder,
            Some(ClassifiedValue::Average(v)) => Self::Value(v),
        }
    }

    /// Missing and incomplete cells both need a new recording
    pub fn is_gap(self) -> bool {
        matches!(self, Self::Missing | Self::Incomplete)
    }

    fn render(self) -> String {
        match self {
            Self::Missing => format!("{}\t\t", "Missing".bold().red()),
            Self::Incomplete => format!("{}\t", "Incomplete".yellow()),
            Self::Placeholder => format!("{}\t\t", "--".bright_black()),
            Self::Value(v) => format!("{}\t\t", format!("{v:.1}").green()),
        }
    }
}

/// One row: label followed by a cell per configuration; returns (text, gaps)
fn render_row<F>(label: String, cell: F) -> (String, usize)
where
    F: Fn(&str) -> Option<ClassifiedValue>,
{
    let mut row = label;
    let mut gaps = 0;
    for config in CONFIGURATIONS {
        let status = CellStatus::of(cell(config));
        if status.is_gap() {
            gaps += 1;
        }
        row.push_str(&status.render());
    }
    (row, gaps)
}

fn column_title(config: &str) -> String {
    let mut chars = config.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn render_record(device: &str, record: &DeviceRecord, missing_only: bool) -> String {
    let mut header = format!("{device}\t");
    for config in CONFIGURATIONS {
        header.push('\t');
        header.push_str(&column_title(config));
        header.push('\t');
    }
    let mut out = format!("{}\n", header.trim_end().bold().white());
    let mut gaps = 0;

    match &record.actual {
        Some(GroundTruth::Scalar(value)) => {
            if !missing_only {
                let shown = match value.average() {
                    Some(v) => format!("{v:.1}").green(),
                    None => "--".bright_black(),
                };
                out.push_str(&format!("{}{}\n", "Actual: ".bold().white(), shown));
            }
        }
        Some(GroundTruth::Configured(map)) => {
            let (row, row_gaps) =
                render_row(format!("{}", "Actual:\t\t".bold().white()), |c| map.get(c).copied());
            if !missing_only || row_gaps > 0 {
                out.push_str(&format!("{row}\n"));
                gaps += row_gaps;
            }
        }
        None => {
            out.push_str(&format!("{}{}\n", "Actual: ".bold().white(), "Missing".bold().red()));
            gaps += 1;
        }
    }

    for sensor in SENSOR_IDS {
        let (row, row_gaps) =
            render_row(format!("{}\t", sensor.bold().white()), |c| record.cell(sensor, c));
        if !missing_only || row_gaps > 0 {
            out.push_str(&format!("{row}\n"));
            gaps += row_gaps;
        }
    }

    if missing_only && gaps == 0 {
        String::new()
    } else {
        out
    }
}

/// Table for one device; empty when `missing_only` and the device is complete
pub fn render_device(
    store: &AggregationStore,
    device: &str,
    missing_only: bool,
) -> Result<String, AuditError> {
    let record = store
        .get(device)
        .ok_or_else(|| AuditError::UnknownDevice(device.to_string()))?;
    Ok(render_record(device, record, missing_only))
}

/// Banner plus one table per selected device (all devices when `device` is `None`)
pub fn render_report(
    store: &AggregationStore,
    device: Option<&str>,
    missing_only: bool,
) -> Result<String, AuditError> {
    let mut out = format!("\n{BANNER}\n\n");
    let tables = match device {
        Some(name) => vec![render_device(store, name, missing_only)?],
        None => store
            .devices()
            .map(|(name, record)| render_record(name, record, missing_only))
            .collect(),
    };
    for table in tables.into_iter().filter(|t| !t.is_empty()) {
        out.push_str(&table);
        out.push('\n');
    }
    Ok(out)
}
