//! Common traits for Rainforest resources

use serde::de::DeserializeOwned;

use crate::output::DisplayRow;

/// A single record in a resource listing (folder, site, browser)
pub trait ResourceRecord {
    /// Identifier shown in the first column
    fn id(&self) -> &str;

    /// Human-readable description shown in the second column
    fn description(&self) -> &str;

    /// Convert into a display row, unchanged
    fn to_row(&self) -> DisplayRow {
        DisplayRow::new(self.id(), self.description())
    }
}

/// A decoded API response holding a list of records
///
/// Implement this for any `XResponse` struct to get `ToRows` for free.
pub trait ResourceResponse: DeserializeOwned + std::fmt::Debug {
    type Record: ResourceRecord;

    /// Label for table headers ("Folders" -> "Folders ID", "Folders Description")
    const LABEL: &'static str;

    /// Records in the order the API returned them
    fn records(&self) -> &[Self::Record];
}

/// Anything that can be flattened into display rows
pub trait ToRows {
    fn to_rows(&self) -> Vec<DisplayRow>;
}

impl<R: ResourceResponse> ToRows for R {
    fn to_rows(&self) -> Vec<DisplayRow> {
        self.records().iter().map(ResourceRecord::to_row).collect()
    }
}
