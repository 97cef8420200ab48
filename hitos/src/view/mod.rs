//! Filtered, sorted and paginated views of the milestone table.

mod page;
mod query;
mod sort;

pub use page::*;
pub use query::*;
pub use sort::*;

use crate::Milestone;

/// Filters by `query`, then sorts by `key`.
pub fn select_milestones<'a>(
    milestones: &'a [Milestone],
    query: &MilestoneQuery,
    key: SortKey,
) -> Vec<&'a Milestone> {
    let mut selected = filter_milestones(milestones, query);
    sort_milestones(&mut selected, key);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_before_sorting() {
        let milestones = vec![
            Milestone::new(1, "Tumbado P2", 9, "Otros"),
            Milestone::new(2, "Pintura Exterior", 12, "Acabados"),
            Milestone::new(3, "Tumbado PB", 8, "Otros"),
        ];
        let query = MilestoneQuery::new().with_search("tumbado");
        let selected = select_milestones(&milestones, &query, SortKey::PlannedMonth);
        let numbers: Vec<u32> = selected.iter().map(|m| m.number).collect();
        assert_eq!(numbers, vec![3, 1]);
    }
}
