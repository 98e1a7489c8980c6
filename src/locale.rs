//! pt-BR number parsing and display formatting
//!
//! Dots group thousands and the comma marks decimals ("10.000,00").

use crate::error::ValidationError;
use chrono::NaiveDate;

/// Currency prefix, followed by a no-break space as pt-BR formatting does
const BRL_PREFIX: &str = "R$\u{a0}";

/// Parse a pt-BR formatted number
///
/// Every `.` is treated as a thousands separator, so "13.15" reads as 1315.
pub fn parse_pt_br_number(value: &str) -> Result<f64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let normalized = trimmed.replace('.', "").replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ValidationError::InvalidNumber(trimmed.to_string())),
    }
}

/// Format as Brazilian reais, e.g. `R$ 10.000,00`
pub fn format_brl(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    format!("{}{}{}", sign, BRL_PREFIX, localize(&fixed))
}

/// Format a percentage with up to 6 decimals, e.g. `0,040151%`
pub fn format_percent(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.6}", value.abs());
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    format!("{}{}%", sign, localize(trimmed))
}

/// Format as `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Turn "1234567.89" into "1.234.567,89"
fn localize(plain: &str) -> String {
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain, None),
    };

    let mut out = group_thousands(int_part);
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        // "inf" / "NaN"
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
