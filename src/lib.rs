//! rfctl - List Rainforest QA resources from the command line
//!
//! Fetches folders, sites and browsers from the Rainforest API and prints
//! them as two-column tables.
//!
//! # Example
//!
//! ```bash
//! # List test folders
//! rfctl get folders
//!
//! # List sites as JSON
//! rfctl get sites -o json
//!
//! # Point at another API root
//! rfctl --api-url http://localhost:3000/api/1 get browsers
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod rainforest;
pub mod ui;

pub use cli::{Cli, Command, GetResource, ListArgs, OutputFormat};
pub use error::{Result, RfError};
pub use output::{render_table, write_rows, DisplayRow};
pub use rainforest::{
    fetch_report, print_report, print_resource, run_get_command, ApiUrlResolver, Report,
    ResourceKind, ResourceRecord, ResourceResponse, RfClient, ToRows,
};
