//! Rainforest API client module
//!
//! Fetchers for the resource collections the CLI reports on, plus the
//! command handlers that turn them into output.

mod client;
pub mod browsers;
pub mod commands;
mod endpoint;
pub mod folders;
pub mod helpers;
pub mod sites;
pub mod traits;

pub use browsers::{Browser, BrowsersResponse};
pub use client::RfClient;
pub use commands::{fetch_report, print_report, print_resource, run_get_command, Report};
pub use endpoint::ApiUrlResolver;
pub use folders::{Folder, FoldersResponse};
pub use sites::{Site, SitesResponse};
pub use traits::{ResourceRecord, ResourceResponse, ToRows};

/// Resource collections the CLI can list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Folders,
    Sites,
    Browsers,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Folders => write!(f, "folders"),
            ResourceKind::Sites => write!(f, "sites"),
            ResourceKind::Browsers => write!(f, "browsers"),
        }
    }
}
