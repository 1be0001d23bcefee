//! CSV output formatter

use std::io::{self, Write};

use super::common::escape_csv;
use super::DisplayRow;

/// Write rows as CSV with an `id,description` header line
pub fn write_csv<W: Write>(out: &mut W, rows: &[DisplayRow]) -> io::Result<()> {
    writeln!(out, "id,description")?;
    for row in rows {
        writeln!(
            out,
            "{},{}",
            escape_csv(&row.id),
            escape_csv(&row.description)
        )?;
    }
    Ok(())
}
