//! CDI Calculator - Compound return projections for CDI-indexed investments
//!
//! This library provides:
//! - Annual to daily rate conversion (365 calendar days or 252 business days)
//! - Fixed-horizon schedules from one week to one year
//! - Business-day date arithmetic (weekends skipped, no holiday calendar)
//! - pt-BR number parsing/formatting and `;`-delimited export
//! - Batch scenario runs against a shared anchor date
//!
//! Nothing in the library reads the clock: the anchor date is always passed in.

pub mod calendar;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod locale;
pub mod projection;
pub mod rates;
pub mod scenario;

// Re-export commonly used types
pub use config::SimulationRequest;
pub use error::{Error, Result, ValidationError};
pub use input::RateInput;
pub use projection::{generate_schedule, ScheduleResult, ScheduleRow};
pub use rates::{daily_rate, DayCountConvention};
pub use scenario::ScenarioRunner;
