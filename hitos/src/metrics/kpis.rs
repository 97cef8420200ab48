use serde::Serialize;

use super::{percent_of, Tally};
use crate::Milestone;

/// Headline figures for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectKpis {
    pub total_count: usize,
    /// Milestones at 100% progress.
    pub completed_count: usize,
    pub average_progress: f64,
    /// Milestones reached after their planned month.
    pub delayed_count: usize,
    pub completed_percent: f64,
}

impl ProjectKpis {
    pub fn pending_count(&self) -> usize {
        self.total_count - self.completed_count
    }
}

pub fn compute_kpis(milestones: &[Milestone]) -> ProjectKpis {
    let mut tally = Tally::default();
    let mut delayed_count = 0;
    for milestone in milestones {
        tally.add(milestone);
        if milestone.is_delayed() {
            delayed_count += 1;
        }
    }

    ProjectKpis {
        total_count: tally.count,
        completed_count: tally.completed,
        average_progress: tally.average_progress(),
        delayed_count,
        completed_percent: percent_of(tally.completed as f64, tally.count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_milestone_example() {
        let milestones = vec![
            Milestone::new(1, "a", 1, "Estructura")
                .with_progress(100)
                .with_actual_month(2),
            Milestone::new(2, "b", 3, "Estructura").with_progress(50),
        ];

        let kpis = compute_kpis(&milestones);
        assert_eq!(kpis.total_count, 2);
        assert_eq!(kpis.completed_count, 1);
        assert_eq!(kpis.average_progress, 75.0);
        assert_eq!(kpis.delayed_count, 1);
        assert_eq!(kpis.completed_percent, 50.0);
        assert_eq!(kpis.pending_count(), 1);
    }

    #[test]
    fn empty_input_is_all_zero() {
        let kpis = compute_kpis(&[]);
        assert_eq!(kpis.total_count, 0);
        assert_eq!(kpis.completed_count, 0);
        assert_eq!(kpis.average_progress, 0.0);
        assert_eq!(kpis.delayed_count, 0);
        assert_eq!(kpis.completed_percent, 0.0);
    }

    #[test]
    fn on_time_milestone_is_not_delayed() {
        let milestones = vec![Milestone::new(1, "a", 4, "Otros").with_actual_month(4)];
        assert_eq!(compute_kpis(&milestones).delayed_count, 0);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(compute_kpis(&[])).unwrap();
        assert!(json.get("completedPercent").is_some());
        assert!(json.get("delayedCount").is_some());
    }
}
