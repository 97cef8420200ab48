use serde::Serialize;

use super::Tally;
use crate::Milestone;

/// Cumulative progress over all milestones planned up to `month`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub month: u32,
    pub cumulative_average_progress: f64,
    pub cumulative_completed_count: usize,
}

/// One point per month `1..=duration_months`, each over the milestones with
/// `planned_month <= month`.
///
/// Milestones are bucketed by planned month once and the buckets are folded
/// in month order, so the cost is linear in milestones plus months.
pub fn compute_timeline(milestones: &[Milestone], duration_months: u32) -> Vec<TimelinePoint> {
    // Bucket 0 holds planned months below 1; those fall inside every window.
    let mut buckets = vec![Tally::default(); duration_months as usize + 1];
    for milestone in milestones {
        if let Some(bucket) = buckets.get_mut(milestone.planned_month as usize) {
            bucket.add(milestone);
        }
    }

    let mut running = Tally::default();
    buckets
        .iter()
        .zip(0u32..)
        .filter_map(|(bucket, month)| {
            running.absorb(bucket);
            (month > 0).then(|| TimelinePoint {
                month,
                cumulative_average_progress: running.average_progress(),
                cumulative_completed_count: running.completed,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestones() -> Vec<Milestone> {
        vec![
            Milestone::new(1, "a", 1, "Estructura").with_progress(100),
            Milestone::new(2, "b", 3, "Estructura").with_progress(50),
            Milestone::new(3, "c", 3, "Otros").with_progress(100),
            Milestone::new(4, "d", 5, "Otros"),
        ]
    }

    #[test]
    fn covers_every_month() {
        let timeline = compute_timeline(&milestones(), 6);
        let months: Vec<u32> = timeline.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn accumulates_planned_milestones() {
        let timeline = compute_timeline(&milestones(), 6);

        assert_eq!(timeline[0].cumulative_average_progress, 100.0);
        assert_eq!(timeline[0].cumulative_completed_count, 1);
        assert_eq!(timeline[1], TimelinePoint { month: 2, ..timeline[0] });

        let march = timeline[2];
        assert!((march.cumulative_average_progress - 250.0 / 3.0).abs() < 1e-9);
        assert_eq!(march.cumulative_completed_count, 2);

        let may = timeline[4];
        assert_eq!(may.cumulative_average_progress, 62.5);
        assert_eq!(may.cumulative_completed_count, 2);
    }

    #[test]
    fn months_before_first_milestone_are_zero() {
        let timeline = compute_timeline(&[Milestone::new(1, "a", 3, "Otros").with_progress(100)], 3);
        assert_eq!(timeline[0].cumulative_average_progress, 0.0);
        assert_eq!(timeline[0].cumulative_completed_count, 0);
        assert_eq!(timeline[2].cumulative_completed_count, 1);
    }

    #[test]
    fn completed_count_never_decreases() {
        let timeline = compute_timeline(&milestones(), 6);
        assert!(timeline
            .windows(2)
            .all(|w| w[0].cumulative_completed_count <= w[1].cumulative_completed_count));
    }

    #[test]
    fn milestones_past_duration_are_never_counted() {
        let timeline = compute_timeline(&[Milestone::new(1, "a", 9, "Otros").with_progress(100)], 4);
        assert!(timeline.iter().all(|p| p.cumulative_completed_count == 0));
    }

    #[test]
    fn zero_duration_is_empty() {
        assert!(compute_timeline(&milestones(), 0).is_empty());
    }
}
