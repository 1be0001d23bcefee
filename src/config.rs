/// Configuration constants for the Rainforest API
pub mod api {
    /// Default base URL for Rainforest API v1
    pub const BASE_URL: &str = "https://app.rainforestqa.com/api/1";

    /// Folders endpoint
    pub const FOLDERS: &str = "folders.json";

    /// Sites endpoint
    pub const SITES: &str = "sites.json";

    /// Client endpoint, carries the list of available browsers
    pub const CLIENTS: &str = "clients.json";

    /// Page size requested for folder listings
    pub const DEFAULT_PAGE_SIZE: u32 = 100;
}

/// Environment variable names
pub mod env {
    /// Overrides the API base URL
    pub const API_URL: &str = "RFCTL_API_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
