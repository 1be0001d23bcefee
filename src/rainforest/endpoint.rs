//! API base URL resolution

use log::debug;

use crate::config::api;
use crate::error::{Result, RfError};

/// API base URL resolution with fallback logic
pub struct ApiUrlResolver;

impl ApiUrlResolver {
    /// Resolve the API base URL:
    /// 1. CLI argument or `RFCTL_API_URL` (clap merges both into `cli_url`)
    /// 2. Built-in default
    pub fn resolve(cli_url: Option<&str>) -> Result<String> {
        match cli_url {
            Some(url) => {
                debug!("Using API URL from CLI/environment: {}", url);
                Self::validate(url)
            }
            None => {
                debug!("Using default API URL: {}", api::BASE_URL);
                Ok(api::BASE_URL.to_string())
            }
        }
    }

    /// Check scheme and strip trailing slashes
    fn validate(url: &str) -> Result<String> {
        let trimmed = url.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .ok_or_else(|| {
                RfError::Config(format!(
                    "API URL '{}' must start with http:// or https://",
                    url
                ))
            })?;

        if host.is_empty() {
            return Err(RfError::Config(format!("API URL '{}' has no host", url)));
        }

        Ok(trimmed.to_string())
    }
}
