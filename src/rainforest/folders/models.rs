//! Folder data models

use serde::Deserialize;

use crate::rainforest::helpers::{deserialize_id, deserialize_nullable_string};
use crate::rainforest::traits::{ResourceRecord, ResourceResponse};

/// Response for the folders list (a bare JSON array)
#[derive(Deserialize, Debug, Default)]
#[serde(transparent)]
pub struct FoldersResponse {
    pub data: Vec<Folder>,
}

/// Test folder from the Rainforest API
#[derive(Deserialize, Debug, Clone)]
pub struct Folder {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
}

impl ResourceRecord for Folder {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.title
    }
}

impl ResourceResponse for FoldersResponse {
    type Record = Folder;
    const LABEL: &'static str = "Folders";

    fn records(&self) -> &[Folder] {
        &self.data
    }
}
