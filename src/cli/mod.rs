//! CLI argument parsing

mod common;
mod get;

use clap::{Parser, Subcommand};

use crate::config::{defaults, env};

pub use common::OutputFormat;
pub use get::{GetResource, ListArgs};

/// Rainforest QA resource lister
#[derive(Parser, Debug)]
#[command(name = "rfctl")]
#[command(version)]
#[command(about = "List Rainforest QA folders, sites and browsers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Rainforest API base URL
    #[arg(long, global = true, env = env::API_URL)]
    pub api_url: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinner or other interactive output
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },
}
