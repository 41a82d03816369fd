use tracing::{debug, warn};

use crate::browser::Browser;
use crate::catalog::City;
use crate::client::AdminApi;
use crate::cookies::CookieStore;
use crate::endpoints::AdminUrls;
use crate::error::{ApiError, ErrorState};
use crate::http::HttpClient;
use crate::types::NewServiceProvider;

/// Form for registering a new provider by name and city.
pub struct AddServiceProviderModel<H, C, B> {
    api: AdminApi,
    http: H,
    cookies: C,
    browser: B,
    urls: AdminUrls,
    cities: Vec<City>,
    pub name: String,
    pub city_id: String,
    errors: ErrorState,
}

impl<H: HttpClient, C: CookieStore, B: Browser> AddServiceProviderModel<H, C, B> {
    pub fn new(
        api: AdminApi,
        http: H,
        cookies: C,
        browser: B,
        urls: AdminUrls,
        cities: Vec<City>,
    ) -> Self {
        Self {
            api,
            http,
            cookies,
            browser,
            urls,
            cities,
            name: String::new(),
            city_id: String::new(),
            errors: ErrorState::new(),
        }
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn errors(&self) -> &[String] {
        self.errors.messages()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    /// Create the provider; on success navigate back to the dashboard.
    pub fn save(&mut self) {
        self.errors.clear();
        let input = NewServiceProvider {
            name: self.name.clone(),
            associated_city: self.city_id.clone(),
        };

        self.browser.loading();
        let result = self.create(&input);
        self.browser.loaded();

        match result {
            Ok(()) => {
                debug!(name = %input.name, city = %input.associated_city, "service provider created");
                self.browser.redirect(&self.urls.dashboard);
            }
            Err(err) => {
                warn!(name = %input.name, error = %err, "service provider rejected");
                self.errors.set_from(&err);
                self.browser.refresh();
            }
        }
    }

    fn create(&self, input: &NewServiceProvider) -> Result<(), ApiError> {
        let token = self.cookies.session_token();
        let request = self
            .api
            .build_create_service_provider(token.as_deref(), input)?;
        let response = self.http.send(request)?;
        self.api.parse_create_service_provider(response)
    }
}
