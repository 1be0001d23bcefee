//! Site data models

use serde::Deserialize;

use crate::rainforest::helpers::{deserialize_id, deserialize_nullable_string};
use crate::rainforest::traits::{ResourceRecord, ResourceResponse};

/// Response for the sites list (a bare JSON array)
#[derive(Deserialize, Debug, Default)]
#[serde(transparent)]
pub struct SitesResponse {
    pub data: Vec<Site>,
}

/// Site (application under test) from the Rainforest API
#[derive(Deserialize, Debug, Clone)]
pub struct Site {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
}

impl ResourceRecord for Site {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.name
    }
}

impl ResourceResponse for SitesResponse {
    type Record = Site;
    const LABEL: &'static str = "Sites";

    fn records(&self) -> &[Site] {
        &self.data
    }
}
