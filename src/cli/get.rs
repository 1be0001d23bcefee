//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;
use crate::rainforest::ResourceKind;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// List test folders
    #[command(visible_alias = "folder")]
    Folders(ListArgs),

    /// List sites
    #[command(visible_alias = "site")]
    Sites(ListArgs),

    /// List browsers available to the account
    #[command(visible_alias = "browser")]
    Browsers(ListArgs),
}

impl GetResource {
    /// Resource kind selected by this subcommand
    pub fn kind(&self) -> ResourceKind {
        match self {
            GetResource::Folders(_) => ResourceKind::Folders,
            GetResource::Sites(_) => ResourceKind::Sites,
            GetResource::Browsers(_) => ResourceKind::Browsers,
        }
    }

    /// Shared list arguments
    pub fn args(&self) -> &ListArgs {
        match self {
            GetResource::Folders(args) | GetResource::Sites(args) | GetResource::Browsers(args) => {
                args
            }
        }
    }
}

/// Arguments shared by every list subcommand
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
