/// Outcome of reducing one log file
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassifiedValue {
    /// File exists but holds no samples
    Placeholder,
    /// Sample count differs from what a complete log holds
    Incomplete,
    /// Mean `power` of a complete log
    Average(f64),
}

impl ClassifiedValue {
    pub fn average(self) -> Option<f64> {
        match self {
            Self::Average(v) => Some(v),
            _ => None,
        }
    }
}

/// Classify a log whose complete form has exactly `expected` samples
pub fn classify(sum: f64, count: usize, expected: usize) -> ClassifiedValue {
    if count == 0 {
        ClassifiedValue::Placeholder
    } else if count == expected {
        ClassifiedValue::Average(sum / count as f64)
    } else {
        ClassifiedValue::Incomplete
    }
}

/// Classify a log with no expected length (whole-device ground truth).
/// An empty log is a placeholder rather than a 0/0 average.
pub fn classify_any(sum: f64, count: usize) -> ClassifiedValue {
    if count == 0 {
        ClassifiedValue::Placeholder
    } else {
        ClassifiedValue::Average(sum / count as f64)
    }
}
