//! Editing a provider's general details.
//!
//! The model starts in viewing mode. `edit_general_details` loads the
//! provider named by the `key` URL parameter and opens the form;
//! `save_general_details` closes it again only when the backend accepts the
//! change. A rejected save keeps the form open with the backend's messages.

use tracing::{debug, warn};

use crate::browser::Browser;
use crate::catalog::CatalogTag;
use crate::client::AdminApi;
use crate::cookies::CookieStore;
use crate::error::{ApiError, ErrorState};
use crate::http::HttpClient;
use crate::types::{GeneralDetails, ServiceProvider};

pub const KEY_PARAMETER: &str = "key";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableTag {
    pub id: String,
    pub name: String,
    pub is_selected: bool,
}

/// Form state for one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableServiceProvider {
    pub key: String,
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub city_id: String,
    /// The whole catalog, in catalog order, with the provider's tags selected.
    pub tags: Vec<SelectableTag>,
    /// The record as loaded, for the read-only parts of the page.
    pub loaded: ServiceProvider,
}

impl EditableServiceProvider {
    pub fn new(provider: ServiceProvider, catalog: &[CatalogTag]) -> Self {
        let tags = catalog
            .iter()
            .map(|tag| SelectableTag {
                id: tag.id.clone(),
                name: tag.name.clone(),
                is_selected: provider.tags.contains(&tag.id),
            })
            .collect();
        Self {
            key: provider.key.clone(),
            name: provider.name.clone(),
            description: provider.description.clone(),
            short_description: provider.short_description.clone(),
            city_id: provider.city_id.clone(),
            tags,
            loaded: provider,
        }
    }

    pub fn selected_tag_ids(&self) -> Vec<String> {
        self.tags
            .iter()
            .filter(|t| t.is_selected)
            .map(|t| t.id.clone())
            .collect()
    }

    pub fn general_details(&self) -> GeneralDetails {
        GeneralDetails {
            name: self.name.clone(),
            description: self.description.clone(),
            short_description: self.short_description.clone(),
            city_id: self.city_id.clone(),
            tags: self.selected_tag_ids(),
        }
    }
}

pub struct ServiceProviderDetailsModel<H, C, B> {
    api: AdminApi,
    http: H,
    cookies: C,
    browser: B,
    catalog: Vec<CatalogTag>,
    service_provider: Option<EditableServiceProvider>,
    is_editing_general_details: bool,
    errors: ErrorState,
}

impl<H: HttpClient, C: CookieStore, B: Browser> ServiceProviderDetailsModel<H, C, B> {
    pub fn new(api: AdminApi, http: H, cookies: C, browser: B, catalog: Vec<CatalogTag>) -> Self {
        Self {
            api,
            http,
            cookies,
            browser,
            catalog,
            service_provider: None,
            is_editing_general_details: false,
            errors: ErrorState::new(),
        }
    }

    pub fn service_provider(&self) -> Option<&EditableServiceProvider> {
        self.service_provider.as_ref()
    }

    pub fn is_editing_general_details(&self) -> bool {
        self.is_editing_general_details
    }

    pub fn errors(&self) -> &[String] {
        self.errors.messages()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    /// Seed the error list, e.g. when restoring a page.
    pub fn set_errors(&mut self, messages: Vec<String>) {
        self.errors.set(messages);
        self.browser.refresh();
    }

    pub fn edit_general_details(&mut self) {
        let Some(key) = self.browser.url_parameter(KEY_PARAMETER) else {
            warn!("no service provider key in the page address");
            return;
        };

        self.browser.loading();
        let result = self.load(&key);
        self.browser.loaded();

        match result {
            Ok(provider) => {
                debug!(key = %key, tags = provider.tags.len(), "loaded service provider");
                self.service_provider = Some(EditableServiceProvider::new(provider, &self.catalog));
                self.is_editing_general_details = true;
                self.errors.clear();
            }
            Err(err) => {
                warn!(key = %key, error = %err, "failed to load service provider");
                self.errors.set_from(&err);
            }
        }
        self.browser.refresh();
    }

    /// Apply a form change. Nothing happens until a provider is loaded.
    pub fn update_service_provider(&mut self, f: impl FnOnce(&mut EditableServiceProvider)) {
        if let Some(provider) = self.service_provider.as_mut() {
            f(provider);
            self.browser.refresh();
        }
    }

    pub fn save_general_details(&mut self) {
        self.errors.clear();
        let Some(provider) = self.service_provider.as_ref() else {
            warn!("save requested before a service provider was loaded");
            self.browser.refresh();
            return;
        };
        let key = provider.key.clone();
        let details = provider.general_details();

        self.browser.loading();
        let result = self.save(&key, &details);
        self.browser.loaded();

        match result {
            Ok(()) => {
                debug!(key = %key, "general details saved");
                self.errors.clear();
                self.is_editing_general_details = false;
            }
            Err(err) => {
                warn!(key = %key, error = %err, "general details rejected");
                self.errors.set_from(&err);
            }
        }
        self.browser.refresh();
    }

    /// Close the form without saving.
    pub fn cancel_general_details(&mut self) {
        self.is_editing_general_details = false;
        self.errors.clear();
        self.browser.refresh();
    }

    fn load(&self, key: &str) -> Result<ServiceProvider, ApiError> {
        let token = self.cookies.session_token();
        let request = self.api.build_get_service_provider(key, token.as_deref());
        let response = self.http.send(request)?;
        self.api.parse_get_service_provider(response)
    }

    fn save(&self, key: &str, details: &GeneralDetails) -> Result<(), ApiError> {
        let token = self.cookies.session_token();
        let request = self
            .api
            .build_update_general_details(key, token.as_deref(), details)?;
        let response = self.http.send(request)?;
        self.api.parse_update_general_details(response)
    }
}
