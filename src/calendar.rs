//! Calendar-day and business-day date arithmetic
//!
//! Business days are Monday to Friday. No holiday calendar is consulted.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Weekday};

/// Normalize a timestamp to the calendar date in its own time zone
///
/// Time of day is discarded, so any two instants on the same local day
/// anchor a projection identically.
pub fn anchor_date<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> NaiveDate {
    timestamp.date_naive()
}

/// True for Monday through Friday
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Add `days` calendar days, with no weekday skipping
///
/// Returns None past the end of chrono's representable range.
pub fn add_calendar_days(date: NaiveDate, days: u32) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days as u64))
}

/// Advance `business_days` business days from `date`
///
/// Equivalent to stepping one calendar day at a time and counting only
/// weekdays until `business_days` have been counted. The anchor itself never
/// counts, and zero returns the anchor unchanged even on a weekend.
pub fn add_business_days(date: NaiveDate, business_days: u32) -> Option<NaiveDate> {
    if business_days == 0 {
        return Some(date);
    }

    // Saturday and Sunday advance exactly like the preceding Friday
    let weekday = date.weekday().num_days_from_monday();
    let (start, weekday) = if weekday >= 5 {
        (date.checked_sub_days(Days::new((weekday - 4) as u64))?, 4)
    } else {
        (date, weekday)
    };

    let full_weeks = business_days / 5;
    let remainder = business_days % 5;

    let mut calendar_days = full_weeks as u64 * 7 + remainder as u64;
    if weekday + remainder >= 5 {
        calendar_days += 2;
    }

    start.checked_add_days(Days::new(calendar_days))
}
