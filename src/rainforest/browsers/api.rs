//! Browser API operations

use crate::config::api;
use crate::error::Result;
use crate::rainforest::RfClient;

use super::models::BrowsersResponse;

impl RfClient {
    /// Get browsers available to the account
    ///
    /// The browser list lives on the client document, not on `sites.json`.
    pub async fn get_browsers(&self) -> Result<BrowsersResponse> {
        self.fetch(api::CLIENTS, "browsers").await
    }
}
