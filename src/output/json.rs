//! JSON and YAML output formatters

use std::io::Write;

use crate::error::Result;

use super::DisplayRow;

/// Write rows as a pretty-printed JSON array
pub fn write_json<W: Write>(out: &mut W, rows: &[DisplayRow]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

/// Write rows as a YAML sequence
pub fn write_yaml<W: Write>(out: &mut W, rows: &[DisplayRow]) -> Result<()> {
    let yaml = serde_yml::to_string(rows)?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}
