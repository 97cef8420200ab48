use thiserror::Error;

use crate::MilestoneId;

/// A milestone edit carried a value outside its allowed range.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("planned month {month} is outside 1..={max}")]
    PlannedMonthOutOfRange { month: u32, max: u32 },
    #[error("actual month {month} is outside 1..={max}")]
    ActualMonthOutOfRange { month: u32, max: u32 },
    #[error("progress {0}% is outside 0..=100")]
    ProgressOutOfRange(u8),
}

/// Errors returned by milestone store mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("milestone not found: {0}")]
    NotFound(MilestoneId),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Invalid project or risk configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SettingsError {
    #[error("project area must be positive, got {0}")]
    NonPositiveArea(f64),
    #[error("project duration must be at least one month")]
    ZeroDuration,
    #[error("risk thresholds must be strictly ascending, got {low}, {medium}, {high}")]
    UnorderedRiskThresholds {
        low: usize,
        medium: usize,
        high: usize,
    },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write csv record: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv output: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv output is not valid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
