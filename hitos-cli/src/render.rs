use std::io::{self, Write};

use hitos::metrics::{
    CategoryStat, MonthlyRisk, ProjectKpis, ProjectSummary, TimelinePoint, WorkloadSummary,
};
use hitos::view::Page;
use hitos::{Milestone, RiskLevel};
use itertools::Itertools;

const RECOMMENDED_ACTIONS: [&str; 4] = [
    "Redistribute non-critical activities",
    "Assign additional resources",
    "Track progress weekly",
    "Run tasks in parallel where possible",
];

pub fn kpis(out: &mut impl Write, kpis: &ProjectKpis) -> io::Result<()> {
    writeln!(out, "Overall progress   {:>6.1}%", kpis.average_progress)?;
    writeln!(out, "Completed          {:>6.1}%", kpis.completed_percent)?;
    writeln!(out, "Milestones         {:>6}", kpis.total_count)?;
    writeln!(
        out,
        "Completed          {:>6}  ({} pending)",
        kpis.completed_count,
        kpis.pending_count()
    )?;
    let delay_note = if kpis.delayed_count > 0 {
        "need attention"
    } else {
        "on schedule"
    };
    writeln!(out, "Delayed            {:>6}  ({})", kpis.delayed_count, delay_note)
}

pub fn project_summary(out: &mut impl Write, summary: &ProjectSummary) -> io::Result<()> {
    writeln!(out, "Records            {:>6}", summary.milestone_count)?;
    writeln!(out, "Categories         {:>6}", summary.category_count)?;
    writeln!(out, "Duration           {:>6} months", summary.duration_months)?;
    writeln!(out, "Total area         {:>9.2} m²", summary.area_m2)
}

pub fn categories(out: &mut impl Write, stats: &[CategoryStat], total: usize) -> io::Result<()> {
    writeln!(
        out,
        "{:<28} {:>6} {:>7} {:>9} {:>9} {:>8}",
        "Category", "Count", "Share", "Recorded", "Complete", "Avg %"
    )?;
    for stat in stats {
        writeln!(
            out,
            "{:<28} {:>6} {:>6.1}% {:>9} {:>9} {:>7.1}%",
            stat.category,
            stat.total_count,
            stat.share_percent(total),
            stat.recorded_count,
            stat.completed_count,
            stat.average_progress
        )?;
    }
    Ok(())
}

pub fn timeline(out: &mut impl Write, points: &[TimelinePoint]) -> io::Result<()> {
    writeln!(out, "{:<8} {:>12} {:>10}", "Month", "Cumulative %", "Completed")?;
    for point in points {
        writeln!(
            out,
            "{:<8} {:>11.1}% {:>10}",
            format!("Month {}", point.month),
            point.cumulative_average_progress,
            point.cumulative_completed_count
        )?;
    }
    Ok(())
}

pub fn risk(
    out: &mut impl Write,
    risk: &[MonthlyRisk],
    workload: Option<&WorkloadSummary>,
    critical_months: &[u32],
) -> io::Result<()> {
    writeln!(out, "{:<8} {:>10} {:>9}", "Month", "Activities", "Risk")?;
    for row in risk {
        writeln!(
            out,
            "{:<8} {:>10} {:>9}",
            row.month,
            row.activity_count,
            row.risk_level.to_string()
        )?;
    }

    if let Some(workload) = workload {
        writeln!(out)?;
        writeln!(
            out,
            "Busiest month: {} ({} activities)",
            workload.busiest_month, workload.busiest_count
        )?;
        writeln!(
            out,
            "Monthly average: {:.1} activities",
            workload.average_active_load
        )?;
    }

    writeln!(out)?;
    if critical_months.is_empty() {
        return writeln!(out, "Workload is balanced.");
    }
    writeln!(
        out,
        "Attention: months {} carry a {} workload.",
        critical_months.iter().join(", "),
        RiskLevel::Critical
    )?;
    for action in RECOMMENDED_ACTIONS {
        writeln!(out, "  - {}", action)?;
    }
    Ok(())
}

pub fn milestone_page(out: &mut impl Write, page: &Page<'_, &Milestone>) -> io::Result<()> {
    writeln!(
        out,
        "{:>4}  {:<52} {:>7} {:>6} {:>5}  {}",
        "#", "Title", "Planned", "Actual", "Prog", "Category"
    )?;
    for milestone in page.items {
        milestone_row(out, milestone)?;
    }
    writeln!(
        out,
        "Page {} of {} ({} milestones)",
        page.page_index + 1,
        page.total_pages,
        page.total_items
    )
}

pub fn milestone_row(out: &mut impl Write, milestone: &Milestone) -> io::Result<()> {
    let actual = milestone
        .actual_month
        .map(|m| m.to_string())
        .unwrap_or_else(|| "-".to_string());
    writeln!(
        out,
        "{:>4}  {:<52} {:>7} {:>6} {:>4}%  {}",
        milestone.number,
        truncate(&milestone.title, 52),
        milestone.planned_month,
        actual,
        milestone.progress_percent,
        milestone.category
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars - 1).collect();
    truncated.push('…');
    truncated
}
