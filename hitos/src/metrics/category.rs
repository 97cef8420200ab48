use std::collections::BTreeMap;

use serde::Serialize;

use super::{percent_of, Tally};
use crate::Milestone;

/// Aggregates for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub category: String,
    pub total_count: usize,
    pub average_progress: f64,
    pub progress_sum: u64,
    /// Milestones with an actual month recorded. This is what the category
    /// breakdown has always reported as "completed"; it is not the same as
    /// `completed_count`.
    pub recorded_count: usize,
    /// Milestones at 100% progress, the KPI definition of completed.
    pub completed_count: usize,
}

impl CategoryStat {
    /// Share of `total` milestones that fall in this category, in percent.
    pub fn share_percent(&self, total: usize) -> f64 {
        percent_of(self.total_count as f64, total)
    }
}

/// One row per distinct category, ordered alphabetically by category.
pub fn compute_category_distribution(milestones: &[Milestone]) -> Vec<CategoryStat> {
    let mut groups: BTreeMap<&str, Tally> = BTreeMap::new();
    for milestone in milestones {
        groups
            .entry(milestone.category.as_str())
            .or_default()
            .add(milestone);
    }

    groups
        .into_iter()
        .map(|(category, tally)| CategoryStat {
            category: category.to_string(),
            total_count: tally.count,
            average_progress: tally.average_progress(),
            progress_sum: tally.progress_sum,
            recorded_count: tally.recorded,
            completed_count: tally.completed,
        })
        .collect()
}
