//! Browsers module

mod api;
mod models;

pub use models::{Browser, BrowsersResponse};
