//! Compound balance projection over each horizon of a catalog

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::horizons::{catalog, HorizonDefinition, HorizonKey};
use crate::calendar::{add_business_days, add_calendar_days};
use crate::error::{Error, Result};
use crate::input::RateInput;
use crate::rates::{self, DayCountConvention};

/// Projected balance at the end of one horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub key: HorizonKey,
    pub label: String,
    /// Date the horizon ends
    pub until_date: NaiveDate,
    /// `final_amount - principal`
    pub earnings: f64,
    pub final_amount: f64,
}

/// Complete schedule for one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub convention: DayCountConvention,
    pub anchor_date: NaiveDate,
    pub principal: f64,
    /// Daily compounding rate as a decimal
    pub daily_rate: f64,
    /// One row per catalog horizon, shortest first
    pub rows: Vec<ScheduleRow>,
}

impl ScheduleResult {
    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let last = self.rows.last();

        ScheduleSummary {
            horizon_count: self.rows.len(),
            daily_rate: self.daily_rate,
            effective_annual_rate: rates::annualize(self.daily_rate, self.convention),
            final_amount: last.map(|r| r.final_amount).unwrap_or(self.principal),
            total_earnings: last.map(|r| r.earnings).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub horizon_count: usize,
    pub daily_rate: f64,
    pub effective_annual_rate: f64,
    /// Balance at the longest horizon
    pub final_amount: f64,
    pub total_earnings: f64,
}

/// Project `principal` over every horizon of the convention's catalog
///
/// Returns exactly one row per catalog entry, in catalog order. Inputs are
/// not validated here; non-positive or non-finite amounts give non-finite
/// balances. Fails only when an end date leaves chrono's date range, in
/// which case no rows are returned.
pub fn generate_schedule(
    principal: f64,
    annual_rate_pct: f64,
    percent_of_rate: f64,
    convention: DayCountConvention,
    anchor_date: NaiveDate,
) -> Result<Vec<ScheduleRow>> {
    let daily_rate = rates::daily_rate(annual_rate_pct, percent_of_rate, convention);
    log::debug!(
        "Projecting {:.2} at {}% of {}% ({}): daily rate {:.10}",
        principal,
        percent_of_rate,
        annual_rate_pct,
        convention,
        daily_rate
    );

    catalog(convention)
        .iter()
        .map(|horizon| project_horizon(horizon, principal, daily_rate, convention, anchor_date))
        .collect()
}

/// Project a validated input, keeping the rate and anchor alongside the rows
pub fn project(input: &RateInput, anchor_date: NaiveDate) -> Result<ScheduleResult> {
    let rows = generate_schedule(
        input.principal(),
        input.annual_rate_pct(),
        input.percent_of_rate(),
        input.convention(),
        anchor_date,
    )?;

    Ok(ScheduleResult {
        convention: input.convention(),
        anchor_date,
        principal: input.principal(),
        daily_rate: input.daily_rate(),
        rows,
    })
}

fn project_horizon(
    horizon: &HorizonDefinition,
    principal: f64,
    daily_rate: f64,
    convention: DayCountConvention,
    anchor_date: NaiveDate,
) -> Result<ScheduleRow> {
    let n = horizon.day_count;
    let final_amount = rates::compound(principal, daily_rate, n);
    let earnings = final_amount - principal;

    let until_date = match convention {
        DayCountConvention::CalendarDays => add_calendar_days(anchor_date, n),
        DayCountConvention::BusinessDays => add_business_days(anchor_date, n),
    }
    .ok_or(Error::DateOutOfRange { anchor: anchor_date, days: n })?;

    Ok(ScheduleRow {
        key: horizon.key,
        label: horizon.label.to_string(),
        until_date,
        earnings,
        final_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::horizons::{BUSINESS_HORIZONS, CALENDAR_HORIZONS};
    use approx::assert_relative_eq;
    use chrono::Datelike;

    const CALENDAR: DayCountConvention = DayCountConvention::CalendarDays;
    const BUSINESS: DayCountConvention = DayCountConvention::BusinessDays;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reference(convention: DayCountConvention) -> Vec<ScheduleRow> {
        generate_schedule(10_000.0, 13.15, 120.0, convention, date(2024, 1, 1)).unwrap()
    }

    #[test]
    fn test_calendar_year_recovers_annual_rate() {
        let rows = reference(DayCountConvention::CalendarDays);
        let year = &rows[7];

        assert_eq!(year.key, HorizonKey::Y1);
        assert_relative_eq!(year.final_amount, 11_578.0, max_relative = 1e-9);
        assert!((year.earnings - 1_578.0).abs() < 0.005, "earnings {}", year.earnings);
        assert_eq!(year.until_date, date(2024, 12, 31));
    }

    #[test]
    fn test_business_year_recovers_annual_rate() {
        let rows = reference(DayCountConvention::BusinessDays);
        let year = &rows[7];

        assert_eq!(year.key, HorizonKey::Y1);
        assert_eq!(year.label, "1 ano útil (252d)");
        assert_relative_eq!(year.final_amount, 11_578.0, max_relative = 1e-9);
        // 252 business days = 50 weeks + 2 days from a Monday
        assert_eq!(year.until_date, date(2024, 12, 18));
    }

    #[test]
    fn test_always_eight_rows_in_catalog_order() {
        let inputs = [(1.0, 0.01, 1.0), (10_000.0, 13.15, 120.0), (1e9, 99.0, 300.0)];

        for (principal, annual, pct) in inputs {
            for (convention, expected) in [
                (DayCountConvention::CalendarDays, &CALENDAR_HORIZONS),
                (DayCountConvention::BusinessDays, &BUSINESS_HORIZONS),
            ] {
                let anchor = date(2025, 6, 14);
                let rows = generate_schedule(principal, annual, pct, convention, anchor).unwrap();
                assert_eq!(rows.len(), 8);
                for (row, horizon) in rows.iter().zip(expected.iter()) {
                    assert_eq!(row.key, horizon.key);
                    assert_eq!(row.label, horizon.label);
                }
            }
        }
    }

    #[test]
    fn test_final_amount_strictly_increasing() {
        for convention in DayCountConvention::ALL {
            let rows = reference(convention);
            assert!(rows.windows(2).all(|w| w[0].final_amount < w[1].final_amount));
            assert!(rows.windows(2).all(|w| w[0].until_date < w[1].until_date));
        }
    }

    #[test]
    fn test_earnings_is_final_minus_principal() {
        for convention in DayCountConvention::ALL {
            for row in reference(convention) {
                assert_eq!(row.earnings, row.final_amount - 10_000.0);
            }
        }
    }

    #[test]
    fn test_calendar_dates_do_not_skip_weekends() {
        // Anchor on a Saturday
        let anchor = date(2024, 1, 6);
        let rows = generate_schedule(100.0, 10.0, 100.0, CALENDAR, anchor).unwrap();

        for (row, horizon) in rows.iter().zip(CALENDAR_HORIZONS.iter()) {
            assert_eq!((row.until_date - anchor).num_days(), horizon.day_count as i64);
        }
        assert_eq!(rows[0].until_date.weekday(), chrono::Weekday::Sat);
    }

    #[test]
    fn test_business_dates_skip_weekends() {
        // Friday anchor: one business week ends the next Friday
        let anchor = date(2024, 1, 5);
        let rows = generate_schedule(100.0, 10.0, 100.0, BUSINESS, anchor).unwrap();

        assert_eq!(rows[0].until_date, date(2024, 1, 12));
        assert_eq!(rows[1].until_date, date(2024, 1, 19));
        // 21 business days: four weeks plus one day
        assert_eq!(rows[4].until_date, date(2024, 2, 5));
    }

    #[test]
    fn test_identical_inputs_give_identical_output() {
        for convention in DayCountConvention::ALL {
            let first = reference(convention);
            let second = reference(convention);
            assert_eq!(first, second);
            for (a, b) in first.iter().zip(second.iter()) {
                assert_eq!(a.final_amount.to_bits(), b.final_amount.to_bits());
            }
        }
    }

    #[test]
    fn test_invalid_amounts_propagate_silently() {
        let rows = generate_schedule(f64::NAN, 13.15, 120.0, CALENDAR, date(2024, 1, 1)).unwrap();
        assert_eq!(rows.len(), 8);
        assert!(rows.iter().all(|r| r.final_amount.is_nan()));
    }

    #[test]
    fn test_date_overflow_returns_no_rows() {
        let err = generate_schedule(100.0, 10.0, 100.0, CALENDAR, NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, Error::DateOutOfRange { days: 7, .. }));
    }

    #[test]
    fn test_project_summary() {
        let input = RateInput::new(10_000.0, 13.15, 120.0, CALENDAR).unwrap();
        let result = project(&input, date(2024, 1, 1)).unwrap();
        let summary = result.summary();

        assert_eq!(result.rows.len(), 8);
        assert_eq!(summary.horizon_count, 8);
        assert_eq!(summary.daily_rate, input.daily_rate());
        assert_relative_eq!(summary.effective_annual_rate, 0.1578, max_relative = 1e-9);
        assert_eq!(summary.final_amount, result.rows[7].final_amount);
        assert_eq!(summary.total_earnings, result.rows[7].earnings);
    }
}
