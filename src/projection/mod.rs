//! Schedule generation over the fixed horizon catalogs

mod horizons;
mod schedule;

pub use horizons::{catalog, HorizonDefinition, HorizonKey, BUSINESS_HORIZONS, CALENDAR_HORIZONS};
pub use schedule::{generate_schedule, project, ScheduleResult, ScheduleRow, ScheduleSummary};
