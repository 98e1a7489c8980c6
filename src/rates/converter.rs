//! Annual to daily rate conversion
//!
//! Rates are converted geometrically: a daily rate compounded over the
//! convention's base days reproduces the effective annual rate exactly.
//! Inputs are percentages where 100 means 100%. Nothing here validates;
//! non-finite inputs propagate as NaN or infinity.

use super::DayCountConvention;

/// Effective annual rate as a decimal (e.g. 13.15% at 120% -> 0.1578)
pub fn effective_annual_rate(annual_rate_pct: f64, percent_of_rate: f64) -> f64 {
    (annual_rate_pct / 100.0) * (percent_of_rate / 100.0)
}

/// Daily compounding rate as a decimal
///
/// `(1 + effective)^(1 / base_days) - 1`, with 365 base days for calendar
/// days and 252 for business days.
pub fn daily_rate(
    annual_rate_pct: f64,
    percent_of_rate: f64,
    convention: DayCountConvention,
) -> f64 {
    let annual_rate = effective_annual_rate(annual_rate_pct, percent_of_rate);
    let base_days = convention.base_days() as f64;
    (1.0 + annual_rate).powf(1.0 / base_days) - 1.0
}

/// Convert a daily rate back to its effective annual rate
pub fn annualize(daily_rate: f64, convention: DayCountConvention) -> f64 {
    (1.0 + daily_rate).powi(convention.base_days() as i32) - 1.0
}

/// Balance after compounding `principal` for `periods` days
pub fn compound(principal: f64, daily_rate: f64, periods: u32) -> f64 {
    principal * (1.0 + daily_rate).powi(periods as i32)
}
