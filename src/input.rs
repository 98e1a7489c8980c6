//! Validated calculation input

use crate::error::ValidationError;
use crate::rates::{self, DayCountConvention};
use serde::Serialize;

/// One calculation request
///
/// Every numeric field is finite and strictly positive. The only way to
/// build one is [`RateInput::new`], which enforces that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateInput {
    principal: f64,
    annual_rate_pct: f64,
    percent_of_rate: f64,
    convention: DayCountConvention,
}

impl RateInput {
    /// Validate and build an input
    ///
    /// # Arguments
    /// * `principal` - Amount invested
    /// * `annual_rate_pct` - Benchmark rate per year, 13.15 means 13.15%
    /// * `percent_of_rate` - Share of the benchmark credited, 120 means 120%
    /// * `convention` - Calendar days or business days
    pub fn new(
        principal: f64,
        annual_rate_pct: f64,
        percent_of_rate: f64,
        convention: DayCountConvention,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            principal: require_positive("principal", principal)?,
            annual_rate_pct: require_positive("annual rate", annual_rate_pct)?,
            percent_of_rate: require_positive("percent of rate", percent_of_rate)?,
            convention,
        })
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate_pct(&self) -> f64 {
        self.annual_rate_pct
    }

    pub fn percent_of_rate(&self) -> f64 {
        self.percent_of_rate
    }

    pub fn convention(&self) -> DayCountConvention {
        self.convention
    }

    /// Same amounts under another convention
    pub fn with_convention(self, convention: DayCountConvention) -> Self {
        Self { convention, ..self }
    }

    /// Daily compounding rate for this input (principal plays no part)
    pub fn daily_rate(&self) -> f64 {
        rates::daily_rate(self.annual_rate_pct, self.percent_of_rate, self.convention)
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(value)
}
