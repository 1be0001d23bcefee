//! Folder API operations

use crate::config::api;
use crate::error::Result;
use crate::rainforest::RfClient;

use super::models::FoldersResponse;

impl RfClient {
    /// Get test folders (single page of `DEFAULT_PAGE_SIZE` entries)
    pub async fn get_folders(&self) -> Result<FoldersResponse> {
        let path = format!("{}?page_size={}", api::FOLDERS, api::DEFAULT_PAGE_SIZE);
        self.fetch(&path, "folders").await
    }
}
