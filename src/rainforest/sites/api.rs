//! Site API operations

use crate::config::api;
use crate::error::Result;
use crate::rainforest::RfClient;

use super::models::SitesResponse;

impl RfClient {
    /// Get all sites configured for the account
    pub async fn get_sites(&self) -> Result<SitesResponse> {
        self.fetch(api::SITES, "sites").await
    }
}
