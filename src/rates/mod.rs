//! Rate conversion between annual and daily compounding rates

mod convention;
mod converter;

pub use convention::{DayCountConvention, BUSINESS_BASE_DAYS, CALENDAR_BASE_DAYS};
pub use converter::{annualize, compound, daily_rate, effective_annual_rate};
