//! Endpoint registry: API resources and admin page URLs.

/// API resource URLs, rooted at the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn service_providers(&self) -> String {
        format!("{}/service-providers", self.base_url)
    }

    /// The key is percent-encoded so it always stays one path segment.
    pub fn service_provider(&self, key: &str) -> String {
        format!("{}/{}", self.service_providers(), urlencoding::encode(key))
    }

    pub fn general_information(&self, key: &str) -> String {
        format!("{}/general-information", self.service_provider(key))
    }

    pub fn service_provider_verifications(&self) -> String {
        format!("{}/service-provider-verifications", self.base_url)
    }

    pub fn sessions(&self) -> String {
        format!("{}/sessions", self.base_url)
    }

    pub fn create_session(&self) -> String {
        format!("{}/create", self.sessions())
    }
}

/// Admin site pages the view-models navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUrls {
    pub dashboard: String,
    pub redirector: String,
}

impl AdminUrls {
    pub fn new(site_url: &str) -> Self {
        let site = site_url.trim_end_matches('/');
        Self {
            dashboard: format!("{site}/dashboard"),
            redirector: format!("{site}/redirector"),
        }
    }
}
