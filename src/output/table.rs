//! Table output formatter

use std::io::{self, Write};

use comfy_table::{presets::NOTHING, Table, TableComponent};

use super::common::header_labels;
use super::DisplayRow;

/// Build the two-column resource table
///
/// Left and right borders only, `|` between columns, a dashed rule under
/// the header and no top or bottom border.
pub fn build_table(resource_name: &str, rows: &[DisplayRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING).force_no_tty();
    for (component, character) in [
        (TableComponent::LeftBorder, '|'),
        (TableComponent::RightBorder, '|'),
        (TableComponent::VerticalLines, '|'),
        (TableComponent::HeaderLines, '-'),
        (TableComponent::LeftHeaderIntersection, '|'),
        (TableComponent::MiddleHeaderIntersections, '|'),
        (TableComponent::RightHeaderIntersection, '|'),
    ] {
        table.set_style(component, character);
    }

    table.set_header(header_labels(resource_name));
    for row in rows {
        table.add_row(vec![row.id.as_str(), row.description.as_str()]);
    }
    table
}

/// Render a resource table to `out`
pub fn render_table<W: Write>(
    out: &mut W,
    resource_name: &str,
    rows: &[DisplayRow],
) -> io::Result<()> {
    let table = build_table(resource_name, rows);
    writeln!(out, "{table}")
}
