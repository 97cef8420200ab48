use std::cmp::Reverse;

use serde::Serialize;

use crate::{Milestone, RiskLevel, RiskThresholds};

/// Number of milestones planned for exactly one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyLoad {
    pub month: u32,
    pub activity_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRisk {
    pub month: u32,
    pub activity_count: usize,
    pub risk_level: RiskLevel,
}

/// Busiest month and average load, over months with planned work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadSummary {
    pub busiest_month: u32,
    pub busiest_count: usize,
    pub average_active_load: f64,
}

/// Non-cumulative count per month `1..=duration_months`.
pub fn compute_monthly_load(milestones: &[Milestone], duration_months: u32) -> Vec<MonthlyLoad> {
    let mut counts = vec![0usize; duration_months as usize];
    for milestone in milestones {
        let Some(index) = (milestone.planned_month as usize).checked_sub(1) else {
            continue;
        };
        if let Some(count) = counts.get_mut(index) {
            *count += 1;
        }
    }

    counts
        .into_iter()
        .zip(1u32..)
        .map(|(activity_count, month)| MonthlyLoad {
            month,
            activity_count,
        })
        .collect()
}

pub fn classify_risk(load: &[MonthlyLoad], thresholds: &RiskThresholds) -> Vec<MonthlyRisk> {
    load.iter()
        .map(|l| MonthlyRisk {
            month: l.month,
            activity_count: l.activity_count,
            risk_level: thresholds.classify(l.activity_count),
        })
        .collect()
}

pub fn critical_months(risk: &[MonthlyRisk]) -> Vec<u32> {
    risk.iter()
        .filter(|r| r.risk_level == RiskLevel::Critical)
        .map(|r| r.month)
        .collect()
}

/// `None` when no month has any planned milestone. Ties for the busiest month
/// go to the earliest one.
pub fn summarize_workload(load: &[MonthlyLoad]) -> Option<WorkloadSummary> {
    let active: Vec<&MonthlyLoad> = load.iter().filter(|l| l.activity_count > 0).collect();
    let busiest = active
        .iter()
        .min_by_key(|l| (Reverse(l.activity_count), l.month))?;
    let total: usize = active.iter().map(|l| l.activity_count).sum();

    Some(WorkloadSummary {
        busiest_month: busiest.month,
        busiest_count: busiest.activity_count,
        average_active_load: total as f64 / active.len() as f64,
    })
}
