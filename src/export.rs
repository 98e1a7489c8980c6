//! Schedule export as `;`-delimited text or JSON
//!
//! The CSV layout is the one spreadsheet users in Brazil open directly:
//! semicolon delimiter, pt-BR dates and BRL amounts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::locale::{format_brl, format_date};
use crate::projection::{ScheduleResult, ScheduleRow};

/// Header of the delimited export
pub const CSV_HEADER: [&str; 4] = ["Período", "Até", "Rendimento (R$)", "Saldo final (R$)"];

/// Write rows as `;`-delimited text with a header line
pub fn write_csv<W: Write>(writer: W, rows: &[ScheduleRow]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for row in rows {
        csv_writer.write_record([
            row.label.clone(),
            format_date(row.until_date),
            format_brl(row.earnings),
            format_brl(row.final_amount),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render rows as `;`-delimited text
pub fn to_csv_string(rows: &[ScheduleRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, rows)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write rows to a CSV file, replacing it if present
pub fn write_csv_file<P: AsRef<Path>>(path: P, rows: &[ScheduleRow]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(file, rows)?;
    log::info!("Wrote {} rows to {}", rows.len(), path.as_ref().display());
    Ok(())
}

/// Write one or more schedules as pretty-printed JSON
pub fn write_json<W: Write>(writer: W, results: &[ScheduleResult]) -> Result<()> {
    serde_json::to_writer_pretty(writer, results)?;
    Ok(())
}
