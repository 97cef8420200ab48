//! Aggregates over a milestone snapshot.
//!
//! Every function here is pure and total: empty input yields zero counts and
//! zero averages, never an error.

mod category;
mod dashboard;
mod kpis;
mod timeline;
mod workload;

pub use category::*;
pub use dashboard::*;
pub use kpis::*;
pub use timeline::*;
pub use workload::*;

use crate::Milestone;

/// Running counts shared by the cumulative and grouped aggregates.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    count: usize,
    progress_sum: u64,
    completed: usize,
    recorded: usize,
}

impl Tally {
    fn add(&mut self, milestone: &Milestone) {
        self.count += 1;
        self.progress_sum += u64::from(milestone.progress_percent);
        if milestone.is_completed() {
            self.completed += 1;
        }
        if milestone.has_actual_month() {
            self.recorded += 1;
        }
    }

    fn absorb(&mut self, other: &Tally) {
        self.count += other.count;
        self.progress_sum += other.progress_sum;
        self.completed += other.completed;
        self.recorded += other.recorded;
    }

    fn average_progress(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.progress_sum as f64 / self.count as f64
        }
    }
}

/// `part / whole * 100`, or 0 when `whole` is zero.
fn percent_of(part: f64, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part / whole as f64 * 100.0
    }
}
