use serde::{Deserialize, Serialize};

use super::MilestoneId;
use crate::ValidationError;

/// Progress value at which a milestone counts as completed.
pub const COMPLETE_PROGRESS: u8 = 100;

/// A scheduled project activity ("hito").
///
/// Field names double as the CSV export header, see [`crate::CSV_HEADERS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: MilestoneId,
    /// Display ordering key. Equals `id` in the seed catalogue but is not
    /// guaranteed to be unique.
    pub number: u32,
    pub title: String,
    /// Month (1-based) the milestone is scheduled for.
    pub planned_month: u32,
    /// Month the milestone was actually reached, if recorded.
    pub actual_month: Option<u32>,
    pub progress_percent: u8,
    pub category: String,
}

impl Milestone {
    /// Creates a milestone with no recorded month and zero progress. The
    /// display number defaults to the id.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        planned_month: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: MilestoneId::new(id),
            number: id,
            title: title.into(),
            planned_month,
            actual_month: None,
            progress_percent: 0,
            category: category.into(),
        }
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = number;
        self
    }

    pub fn with_actual_month(mut self, month: u32) -> Self {
        self.actual_month = Some(month);
        self
    }

    pub fn with_progress(mut self, progress_percent: u8) -> Self {
        self.progress_percent = progress_percent;
        self
    }

    /// Completed means fully progressed, whether or not an actual month was
    /// recorded.
    pub fn is_completed(&self) -> bool {
        self.progress_percent == COMPLETE_PROGRESS
    }

    /// Delayed means reached after the planned month. Milestones without an
    /// actual month are never delayed.
    pub fn is_delayed(&self) -> bool {
        self.actual_month
            .is_some_and(|actual| actual > self.planned_month)
    }

    pub fn has_actual_month(&self) -> bool {
        self.actual_month.is_some()
    }

    pub(crate) fn apply(&mut self, update: MilestoneUpdate) {
        self.title = update.title;
        self.planned_month = update.planned_month;
        self.actual_month = update.actual_month;
        self.progress_percent = update.progress_percent;
        self.category = update.category;
    }
}

/// The editable fields of a milestone, submitted together.
///
/// Start from an existing record with `MilestoneUpdate::from(&milestone)` and
/// change what the user edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneUpdate {
    pub title: String,
    pub planned_month: u32,
    pub actual_month: Option<u32>,
    pub progress_percent: u8,
    pub category: String,
}

impl MilestoneUpdate {
    /// Checks every numeric field against the project month range and the
    /// progress range. Nothing is applied here.
    pub fn validate(&self, duration_months: u32) -> Result<(), ValidationError> {
        let in_range = |month: u32| (1..=duration_months).contains(&month);

        if !in_range(self.planned_month) {
            return Err(ValidationError::PlannedMonthOutOfRange {
                month: self.planned_month,
                max: duration_months,
            });
        }

        if let Some(actual) = self.actual_month {
            if !in_range(actual) {
                return Err(ValidationError::ActualMonthOutOfRange {
                    month: actual,
                    max: duration_months,
                });
            }
        }

        if self.progress_percent > COMPLETE_PROGRESS {
            return Err(ValidationError::ProgressOutOfRange(self.progress_percent));
        }

        Ok(())
    }
}

impl From<&Milestone> for MilestoneUpdate {
    fn from(milestone: &Milestone) -> Self {
        Self {
            title: milestone.title.clone(),
            planned_month: milestone.planned_month,
            actual_month: milestone.actual_month,
            progress_percent: milestone.progress_percent,
            category: milestone.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone() -> Milestone {
        Milestone::new(1, "Fundición de piso 1", 2, "Estructura")
    }

    #[test]
    fn new_milestone_uses_id_as_number() {
        let m = milestone();
        assert_eq!(m.number, 1);
        assert_eq!(m.actual_month, None);
        assert_eq!(m.progress_percent, 0);
    }

    #[test]
    fn completed_ignores_actual_month() {
        assert!(milestone().with_progress(100).is_completed());
        assert!(!milestone().with_progress(99).with_actual_month(2).is_completed());
    }

    #[test]
    fn delayed_requires_actual_after_planned() {
        assert!(!milestone().is_delayed());
        assert!(!milestone().with_actual_month(2).is_delayed());
        assert!(!milestone().with_actual_month(1).is_delayed());
        assert!(milestone().with_actual_month(3).is_delayed());
    }

    #[test]
    fn delayed_and_completed_are_independent() {
        let m = milestone().with_progress(100).with_actual_month(5);
        assert!(m.is_completed());
        assert!(m.is_delayed());
    }

    #[test]
    fn validate_accepts_bounds() {
        let mut update = MilestoneUpdate::from(&milestone());
        update.planned_month = 13;
        update.actual_month = Some(1);
        update.progress_percent = 100;
        assert_eq!(update.validate(13), Ok(()));
    }

    #[test]
    fn validate_rejects_planned_month_zero() {
        let mut update = MilestoneUpdate::from(&milestone());
        update.planned_month = 0;
        assert_eq!(
            update.validate(13),
            Err(ValidationError::PlannedMonthOutOfRange { month: 0, max: 13 })
        );
    }

    #[test]
    fn validate_rejects_actual_month_past_duration() {
        let mut update = MilestoneUpdate::from(&milestone());
        update.actual_month = Some(14);
        assert_eq!(
            update.validate(13),
            Err(ValidationError::ActualMonthOutOfRange { month: 14, max: 13 })
        );
    }

    #[test]
    fn validate_rejects_progress_over_hundred() {
        let mut update = MilestoneUpdate::from(&milestone());
        update.progress_percent = 101;
        assert_eq!(
            update.validate(13),
            Err(ValidationError::ProgressOutOfRange(101))
        );
    }
}
