use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::SettingsError;

/// Building-level configuration shown alongside the milestone catalogue.
///
/// Missing fields fall back to the Icon Bay Torres defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub tower: String,
    /// Total floor area in m².
    pub area_m2: f64,
    /// Defines the valid month range `1..=duration_months` for all milestones.
    pub duration_months: u32,
    pub client: String,
    pub start_date: NaiveDate,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            tower: "13B".to_string(),
            area_m2: 1563.32,
            duration_months: 13,
            client: "Icon Bay Torres".to_string(),
            start_date: chrono::Local::now().date_naive(),
        }
    }
}

impl ProjectInfo {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.area_m2.is_nan() || self.area_m2 <= 0.0 {
            return Err(SettingsError::NonPositiveArea(self.area_m2));
        }
        if self.duration_months == 0 {
            return Err(SettingsError::ZeroDuration);
        }
        Ok(())
    }

    pub fn months(&self) -> RangeInclusive<u32> {
        1..=self.duration_months
    }

    /// File name for a CSV export taken on `date`, e.g.
    /// `Icon_Bay_Torres_13B_20250314.csv`.
    pub fn export_file_name(&self, date: NaiveDate) -> String {
        let mut stem = self.client.split_whitespace().collect::<Vec<_>>().join("_");
        let tower = self.tower.trim();
        if !tower.is_empty() {
            if !stem.is_empty() {
                stem.push('_');
            }
            stem.push_str(&tower.replace(char::is_whitespace, "_"));
        }
        if stem.is_empty() {
            stem.push_str("hitos");
        }
        format!("{}_{}.csv", stem, date.format("%Y%m%d"))
    }
}
