//! Sites module

mod api;
mod models;

pub use models::{Site, SitesResponse};
