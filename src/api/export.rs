use serde::Serialize;
use std::io::Write;

use crate::error::Result;

/// Writes a header row followed by one line per row. Column order follows the
/// field order of `T`.
pub fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn csv_string<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, rows)?;
    Ok(String::from_utf8(buf)?)
}
