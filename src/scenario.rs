//! Scenario runner for batches of schedules
//!
//! Holds one anchor date so that every schedule in a batch starts on the
//! same day, which keeps side-by-side comparisons meaningful.

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::error::Result;
use crate::input::RateInput;
use crate::projection::{self, ScheduleResult};
use crate::rates::DayCountConvention;

/// Runs schedules against a fixed anchor date
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(today);
///
/// let inputs: Vec<_> = [100.0, 110.0, 120.0]
///     .iter()
///     .map(|&pct| RateInput::new(10_000.0, 13.15, pct, DayCountConvention::CalendarDays))
///     .collect::<Result<_, _>>()?;
/// let results = runner.run_batch(&inputs)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioRunner {
    anchor_date: NaiveDate,
}

impl ScenarioRunner {
    pub fn new(anchor_date: NaiveDate) -> Self {
        Self { anchor_date }
    }

    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor_date
    }

    /// Run a single schedule
    pub fn run(&self, input: &RateInput) -> Result<ScheduleResult> {
        projection::project(input, self.anchor_date)
    }

    /// Run many schedules in parallel; results keep the input order
    pub fn run_batch(&self, inputs: &[RateInput]) -> Result<Vec<ScheduleResult>> {
        log::info!("Running {} scenarios from {}", inputs.len(), self.anchor_date);
        inputs.par_iter().map(|input| self.run(input)).collect()
    }

    /// The same amounts under each convention, calendar days first
    pub fn compare_conventions(&self, input: &RateInput) -> Result<Vec<ScheduleResult>> {
        let inputs: Vec<RateInput> = DayCountConvention::ALL
            .iter()
            .map(|&convention| input.with_convention(convention))
            .collect();
        self.run_batch(&inputs)
    }
}
