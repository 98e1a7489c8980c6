//! Fixed projection horizons, one catalog per day-count convention

use crate::rates::DayCountConvention;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier shared by matching horizons of both catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizonKey {
    W1,
    W2,
    W3,
    W4,
    M1,
    M3,
    M6,
    Y1,
}

impl HorizonKey {
    pub fn as_str(self) -> &'static str {
        match self {
            HorizonKey::W1 => "w1",
            HorizonKey::W2 => "w2",
            HorizonKey::W3 => "w3",
            HorizonKey::W4 => "w4",
            HorizonKey::M1 => "m1",
            HorizonKey::M3 => "m3",
            HorizonKey::M6 => "m6",
            HorizonKey::Y1 => "y1",
        }
    }
}

impl fmt::Display for HorizonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named projection length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HorizonDefinition {
    pub key: HorizonKey,
    /// Display label (pt-BR)
    pub label: &'static str,
    /// Calendar days or business days, depending on the catalog
    pub day_count: u32,
}

const fn horizon(key: HorizonKey, label: &'static str, day_count: u32) -> HorizonDefinition {
    HorizonDefinition { key, label, day_count }
}

/// Horizons in calendar days, shortest first
pub const CALENDAR_HORIZONS: [HorizonDefinition; 8] = [
    horizon(HorizonKey::W1, "1 semana", 7),
    horizon(HorizonKey::W2, "2 semanas", 14),
    horizon(HorizonKey::W3, "3 semanas", 21),
    horizon(HorizonKey::W4, "4 semanas", 28),
    horizon(HorizonKey::M1, "1 mês (30d)", 30),
    horizon(HorizonKey::M3, "3 meses (90d)", 90),
    horizon(HorizonKey::M6, "6 meses (180d)", 180),
    horizon(HorizonKey::Y1, "1 ano (365d)", 365),
];

/// Horizons in business days, shortest first
pub const BUSINESS_HORIZONS: [HorizonDefinition; 8] = [
    horizon(HorizonKey::W1, "1 semana útil", 5),
    horizon(HorizonKey::W2, "2 semanas úteis", 10),
    horizon(HorizonKey::W3, "3 semanas úteis", 15),
    horizon(HorizonKey::W4, "4 semanas úteis", 20),
    horizon(HorizonKey::M1, "1 mês útil (21d)", 21),
    horizon(HorizonKey::M3, "3 meses úteis (63d)", 63),
    horizon(HorizonKey::M6, "6 meses úteis (126d)", 126),
    horizon(HorizonKey::Y1, "1 ano útil (252d)", 252),
];

/// Catalog for a convention. Its order is the schedule's output order.
pub fn catalog(convention: DayCountConvention) -> &'static [HorizonDefinition; 8] {
    match convention {
        DayCountConvention::CalendarDays => &CALENDAR_HORIZONS,
        DayCountConvention::BusinessDays => &BUSINESS_HORIZONS,
    }
}
