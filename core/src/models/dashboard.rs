//! Provider listing with verification toggles.

use tracing::{debug, warn};

use crate::browser::Browser;
use crate::client::AdminApi;
use crate::error::{ApiError, ErrorState};
use crate::http::HttpClient;
use crate::types::{ServiceProviderSummary, VerificationToggle};

/// One row of the dashboard. Labels are derived from `is_verified` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardEntry {
    pub key: String,
    pub name: String,
    pub is_verified: bool,
}

impl DashboardEntry {
    pub fn verified_label(&self) -> &'static str {
        if self.is_verified {
            "verified"
        } else {
            "under review"
        }
    }

    pub fn toggle_verification_button_label(&self) -> &'static str {
        if self.is_verified {
            "un-verify"
        } else {
            "verify"
        }
    }
}

impl From<ServiceProviderSummary> for DashboardEntry {
    fn from(summary: ServiceProviderSummary) -> Self {
        Self {
            key: summary.key,
            name: summary.name,
            is_verified: summary.is_verified,
        }
    }
}

pub struct DashboardModel<H, B> {
    api: AdminApi,
    http: H,
    browser: B,
    service_providers: Vec<DashboardEntry>,
    errors: ErrorState,
}

impl<H: HttpClient, B: Browser> DashboardModel<H, B> {
    /// Build the model and fetch the provider list.
    pub fn new(api: AdminApi, http: H, browser: B) -> Self {
        let mut model = Self {
            api,
            http,
            browser,
            service_providers: Vec::new(),
            errors: ErrorState::new(),
        };
        model.reload();
        model
    }

    pub fn service_providers(&self) -> &[DashboardEntry] {
        &self.service_providers
    }

    pub fn errors(&self) -> &[String] {
        self.errors.messages()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    pub fn reload(&mut self) {
        self.browser.loading();
        let result = self
            .http
            .send(self.api.build_list_service_providers())
            .and_then(|response| self.api.parse_list_service_providers(response));
        self.browser.loaded();

        match result {
            Ok(providers) => {
                debug!(count = providers.len(), "loaded service providers");
                self.service_providers = providers.into_iter().map(DashboardEntry::from).collect();
                self.errors.clear();
            }
            Err(err) => {
                warn!(error = %err, "failed to load service providers");
                self.errors.set_from(&err);
            }
        }
        self.browser.refresh();
    }

    /// Ask the backend to flip `key` to `!is_verified`. The local entry is
    /// only flipped once the backend confirms.
    pub fn toggle_verified(&mut self, key: &str, is_verified: bool) {
        let input = VerificationToggle {
            key: key.to_string(),
            is_verified: !is_verified,
        };
        self.browser.loading();
        let result = self.send_toggle(&input);
        self.browser.loaded();

        match result {
            Ok(()) => {
                debug!(key, is_verified = input.is_verified, "verification toggled");
                if let Some(entry) = self.service_providers.iter_mut().find(|e| e.key == key) {
                    entry.is_verified = input.is_verified;
                }
                self.errors.clear();
            }
            Err(err) => {
                warn!(key, error = %err, "failed to toggle verification");
                self.errors.set_from(&err);
            }
        }
        self.browser.refresh();
    }

    fn send_toggle(&self, input: &VerificationToggle) -> Result<(), ApiError> {
        let request = self.api.build_toggle_verification(input)?;
        let response = self.http.send(request)?;
        self.api.parse_toggle_verification(response)
    }
}
