//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod common;
mod csv;
mod json;
mod table;

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

pub use self::common::{escape_csv, header_labels};
pub use self::csv::write_csv;
pub use self::json::{write_json, write_yaml};
pub use self::table::{build_table, render_table};

/// One `(id, description)` line of a resource listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub id: String,
    pub description: String,
}

impl DisplayRow {
    /// Create a new display row
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

impl From<(String, String)> for DisplayRow {
    fn from((id, description): (String, String)) -> Self {
        Self { id, description }
    }
}

/// Write rows to `out` using the specified format
pub fn write_rows<W: Write>(
    out: &mut W,
    format: OutputFormat,
    resource_name: &str,
    rows: &[DisplayRow],
) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(out, resource_name, rows)?,
        OutputFormat::Csv => write_csv(out, rows)?,
        OutputFormat::Json => write_json(out, rows)?,
        OutputFormat::Yaml => write_yaml(out, rows)?,
    }
    Ok(())
}
