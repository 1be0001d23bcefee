//! Folders module

mod api;
mod models;

pub use models::{Folder, FoldersResponse};
