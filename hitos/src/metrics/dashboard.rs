use serde::Serialize;

use super::{
    classify_risk, compute_category_distribution, compute_kpis, compute_monthly_load,
    compute_timeline, critical_months, summarize_workload, CategoryStat, MonthlyRisk, ProjectKpis,
    TimelinePoint, WorkloadSummary,
};
use crate::{Milestone, MilestoneStore, ProjectInfo, RiskThresholds};

/// Catalogue-level statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub milestone_count: usize,
    pub category_count: usize,
    pub duration_months: u32,
    pub area_m2: f64,
}

pub fn summarize_project(milestones: &[Milestone], project: &ProjectInfo) -> ProjectSummary {
    let mut categories: Vec<&str> = milestones.iter().map(|m| m.category.as_str()).collect();
    categories.sort_unstable();
    categories.dedup();

    ProjectSummary {
        milestone_count: milestones.len(),
        category_count: categories.len(),
        duration_months: project.duration_months,
        area_m2: project.area_m2,
    }
}

/// Everything the dashboard renders, computed over the full store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub summary: ProjectSummary,
    pub kpis: ProjectKpis,
    pub timeline: Vec<TimelinePoint>,
    pub categories: Vec<CategoryStat>,
    pub risk: Vec<MonthlyRisk>,
    pub workload: Option<WorkloadSummary>,
    pub critical_months: Vec<u32>,
}

impl Dashboard {
    pub fn compute(store: &MilestoneStore, thresholds: &RiskThresholds) -> Self {
        let milestones = store.get_all();
        let project = store.project_info();
        let load = compute_monthly_load(milestones, project.duration_months);
        let risk = classify_risk(&load, thresholds);

        Self {
            summary: summarize_project(milestones, project),
            kpis: compute_kpis(milestones),
            timeline: compute_timeline(milestones, project.duration_months),
            categories: compute_category_distribution(milestones),
            workload: summarize_workload(&load),
            critical_months: critical_months(&risk),
            risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_distinct_categories() {
        let milestones = vec![
            Milestone::new(1, "a", 1, "Otros"),
            Milestone::new(2, "b", 1, "Estructura"),
            Milestone::new(3, "c", 1, "Otros"),
        ];
        let summary = summarize_project(&milestones, &ProjectInfo::default());
        assert_eq!(summary.milestone_count, 3);
        assert_eq!(summary.category_count, 2);
        assert_eq!(summary.duration_months, 13);
        assert_eq!(summary.area_m2, 1563.32);
    }

    #[test]
    fn empty_store_dashboard() {
        let store = MilestoneStore::new(ProjectInfo::default(), Vec::new());
        let dashboard = Dashboard::compute(&store, &RiskThresholds::default());
        assert_eq!(dashboard.kpis.total_count, 0);
        assert_eq!(dashboard.timeline.len(), 13);
        assert!(dashboard.categories.is_empty());
        assert_eq!(dashboard.risk.len(), 13);
        assert_eq!(dashboard.workload, None);
        assert!(dashboard.critical_months.is_empty());
    }
}
