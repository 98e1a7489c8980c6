//! Simulation request with defaults, loadable from JSON
//!
//! Every field is optional in the JSON document; missing fields fall back
//! to the standard simulation (R$ 10.000,00 at 120% of a 13,15% CDI).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::input::RateInput;
use crate::rates::DayCountConvention;

/// Default amount invested (R$)
pub const DEFAULT_PRINCIPAL: f64 = 10_000.0;

/// Default annual CDI (% a.a.)
pub const DEFAULT_ANNUAL_CDI_PCT: f64 = 13.15;

/// Default share of CDI credited (%)
pub const DEFAULT_PERCENT_OF_CDI: f64 = 120.0;

/// Unvalidated simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Amount invested
    #[serde(default = "default_principal")]
    pub principal: f64,

    /// Annual CDI, 13.15 means 13.15% per year
    #[serde(default = "default_annual_cdi_pct")]
    pub annual_cdi_pct: f64,

    /// Share of CDI credited, 120 means 120%
    #[serde(default = "default_percent_of_cdi")]
    pub percent_of_cdi: f64,

    #[serde(default)]
    pub convention: DayCountConvention,

    /// Projection start; today's date when absent
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

fn default_principal() -> f64 {
    DEFAULT_PRINCIPAL
}

fn default_annual_cdi_pct() -> f64 {
    DEFAULT_ANNUAL_CDI_PCT
}

fn default_percent_of_cdi() -> f64 {
    DEFAULT_PERCENT_OF_CDI
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            principal: DEFAULT_PRINCIPAL,
            annual_cdi_pct: DEFAULT_ANNUAL_CDI_PCT,
            percent_of_cdi: DEFAULT_PERCENT_OF_CDI,
            convention: DayCountConvention::default(),
            start_date: None,
        }
    }
}

impl SimulationRequest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a request from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let request = serde_json::from_reader(reader)?;
        log::debug!("Loaded simulation request from {}", path.display());
        Ok(request)
    }

    /// Validate the amounts
    pub fn to_input(&self) -> std::result::Result<RateInput, ValidationError> {
        RateInput::new(self.principal, self.annual_cdi_pct, self.percent_of_cdi, self.convention)
    }

    /// Start date, or `today` when none was given
    pub fn anchor_date_or(&self, today: NaiveDate) -> NaiveDate {
        self.start_date.unwrap_or(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let request = SimulationRequest::from_json_str("{}").unwrap();
        assert_eq!(request, SimulationRequest::default());
        assert_eq!(request.principal, 10_000.0);
        assert_eq!(request.annual_cdi_pct, 13.15);
        assert_eq!(request.percent_of_cdi, 120.0);
        assert_eq!(request.convention, DayCountConvention::CalendarDays);
        assert!(request.start_date.is_none());
    }

    #[test]
    fn test_partial_json() {
        let request = SimulationRequest::from_json_str(
            r#"{ "principal": 2500.5, "convention": "biz", "start_date": "2024-07-01" }"#,
        )
        .unwrap();

        assert_eq!(request.principal, 2500.5);
        assert_eq!(request.annual_cdi_pct, DEFAULT_ANNUAL_CDI_PCT);
        assert_eq!(request.convention, DayCountConvention::BusinessDays);
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2024, 7, 1));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(SimulationRequest::from_json_str(r#"{ "principal": "lots" }"#).is_err());
        assert!(SimulationRequest::from_json_str(r#"{ "convention": "monthly" }"#).is_err());
    }

    #[test]
    fn test_to_input_validates() {
        let request = SimulationRequest { percent_of_cdi: 0.0, ..Default::default() };
        assert_eq!(
            request.to_input(),
            Err(ValidationError::NotPositive { field: "percent of rate", value: 0.0 })
        );
        assert!(SimulationRequest::default().to_input().is_ok());
    }

    #[test]
    fn test_anchor_date_or() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(SimulationRequest::default().anchor_date_or(today), today);

        let fixed = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let request = SimulationRequest { start_date: Some(fixed), ..Default::default() };
        assert_eq!(request.anchor_date_or(today), fixed);
    }
}
