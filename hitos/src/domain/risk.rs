use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::SettingsError;

/// Workload risk of a month, by number of planned activities.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Inclusive upper bounds of the Low, Medium and High tiers. Anything above
/// `high_max` is Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub low_max: usize,
    pub medium_max: usize,
    pub high_max: usize,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low_max: 5,
            medium_max: 10,
            high_max: 20,
        }
    }
}

impl RiskThresholds {
    pub fn new(low_max: usize, medium_max: usize, high_max: usize) -> Result<Self, SettingsError> {
        let thresholds = Self {
            low_max,
            medium_max,
            high_max,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.low_max < self.medium_max && self.medium_max < self.high_max {
            Ok(())
        } else {
            Err(SettingsError::UnorderedRiskThresholds {
                low: self.low_max,
                medium: self.medium_max,
                high: self.high_max,
            })
        }
    }

    pub fn classify(&self, activity_count: usize) -> RiskLevel {
        if activity_count <= self.low_max {
            RiskLevel::Low
        } else if activity_count <= self.medium_max {
            RiskLevel::Medium
        } else if activity_count <= self.high_max {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }
}
