//! Runtime configuration for the admin dashboard.

use std::env;

use crate::client::AdminApi;
use crate::endpoints::AdminUrls;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be an http(s) URL, got {value:?}")]
    InvalidUrl { name: &'static str, value: String },
}

/// Where the API lives and where the admin pages are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub api_base_url: String,
    pub admin_base_url: String,
}

impl AdminConfig {
    pub fn new(api_base_url: &str, admin_base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: validate_url("ADMIN_API_URL", api_base_url)?,
            admin_base_url: validate_url("ADMIN_SITE_URL", admin_base_url)?,
        })
    }

    /// Load from `ADMIN_API_URL` and `ADMIN_SITE_URL`, falling back to the
    /// local development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api = env::var("ADMIN_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let site = env::var("ADMIN_SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());
        Self::new(&api, &site)
    }

    pub fn api(&self) -> AdminApi {
        AdminApi::new(&self.api_base_url)
    }

    pub fn admin_urls(&self) -> AdminUrls {
        AdminUrls::new(&self.admin_base_url)
    }
}

fn validate_url(name: &'static str, value: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidUrl {
        name,
        value: value.to_string(),
    };
    let parsed = url::Url::parse(value).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(invalid());
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
