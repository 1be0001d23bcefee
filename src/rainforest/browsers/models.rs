//! Browser data models

use serde::Deserialize;

use crate::rainforest::helpers::deserialize_nullable_string;
use crate::rainforest::traits::{ResourceRecord, ResourceResponse};

/// Client document; only the browser list is used
#[derive(Deserialize, Debug, Default)]
pub struct BrowsersResponse {
    #[serde(default)]
    pub available_browsers: Vec<Browser>,
}

/// Browser available for test runs
///
/// Browsers have no numeric id; the API name (e.g. `chrome_1440_900`) is the identifier.
#[derive(Deserialize, Debug, Clone)]
pub struct Browser {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
}

impl ResourceRecord for Browser {
    fn id(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl ResourceResponse for BrowsersResponse {
    type Record = Browser;
    const LABEL: &'static str = "Browsers";

    fn records(&self) -> &[Browser] {
        &self.available_browsers
    }
}
