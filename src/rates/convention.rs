//! Day-count conventions for compounding periods

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compounding periods per year when every calendar day counts
pub const CALENDAR_BASE_DAYS: u32 = 365;

/// Compounding periods per year when only business days count
pub const BUSINESS_BASE_DAYS: u32 = 252;

/// Rule for counting compounding periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCountConvention {
    /// Every day accrues (365 per year)
    #[default]
    #[serde(alias = "all", alias = "calendar")]
    CalendarDays,
    /// Only Monday to Friday accrue (252 per year), no holiday calendar
    #[serde(alias = "biz", alias = "business")]
    BusinessDays,
}

impl DayCountConvention {
    /// Both conventions, calendar first
    pub const ALL: [DayCountConvention; 2] = [
        DayCountConvention::CalendarDays,
        DayCountConvention::BusinessDays,
    ];

    /// Number of compounding periods in one year
    pub const fn base_days(self) -> u32 {
        match self {
            DayCountConvention::CalendarDays => CALENDAR_BASE_DAYS,
            DayCountConvention::BusinessDays => BUSINESS_BASE_DAYS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayCountConvention::CalendarDays => "Dias corridos (365)",
            DayCountConvention::BusinessDays => "Dias úteis (252)",
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayCountConvention::CalendarDays => write!(f, "calendar_days"),
            DayCountConvention::BusinessDays => write!(f, "business_days"),
        }
    }
}

impl FromStr for DayCountConvention {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calendar" | "calendar_days" | "all" => Ok(DayCountConvention::CalendarDays),
            "business" | "business_days" | "biz" => Ok(DayCountConvention::BusinessDays),
            other => Err(ValidationError::UnknownConvention(other.to_string())),
        }
    }
}
