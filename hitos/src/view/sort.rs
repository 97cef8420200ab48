use std::borrow::Borrow;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::Milestone;

/// Column a milestone table can be ordered by. Parses the English names as
/// well as the Spanish column names used on site.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum SortKey {
    #[default]
    #[strum(to_string = "number", serialize = "numero")]
    Number,
    #[strum(to_string = "planned_month", serialize = "mes_programado")]
    PlannedMonth,
    #[strum(to_string = "progress_percent", serialize = "avance")]
    ProgressPercent,
    #[strum(to_string = "category", serialize = "categoria")]
    Category,
}

impl SortKey {
    pub fn compare(&self, a: &Milestone, b: &Milestone) -> Ordering {
        match self {
            SortKey::Number => a.number.cmp(&b.number),
            SortKey::PlannedMonth => a.planned_month.cmp(&b.planned_month),
            SortKey::ProgressPercent => a.progress_percent.cmp(&b.progress_percent),
            SortKey::Category => a.category.cmp(&b.category),
        }
    }
}

/// Ascending, stable sort: ties keep their current relative order.
pub fn sort_milestones<M: Borrow<Milestone>>(milestones: &mut [M], key: SortKey) {
    milestones.sort_by(|a, b| key.compare(a.borrow(), b.borrow()));
}
