//! Admin credential form that opens a session.
//!
//! `is_submitting` ignores a second click while a request is outstanding.
//! It only matters to hosts that drive the request themselves through
//! `begin_submit` / `finish_submit`; `submit` does both halves in one call.
//! The flag is cleared when the response is handled, whatever its outcome.

use tracing::{debug, warn};

use crate::browser::Browser;
use crate::client::AdminApi;
use crate::cookies::{CookieStore, AUTH_CLAIMS, SESSION_TOKEN};
use crate::endpoints::AdminUrls;
use crate::error::{ApiError, ErrorState};
use crate::http::{HttpClient, HttpRequest, HttpResponse};
use crate::types::SessionRequest;
use crate::validation::validate_credentials;

pub const LOADING_MESSAGE: &str = "Loading, please wait";

pub struct ResetPasswordModel<H, C, B> {
    api: AdminApi,
    http: H,
    cookies: C,
    browser: B,
    urls: AdminUrls,
    pub username: String,
    pub password: String,
    message: String,
    is_submitting: bool,
    errors: ErrorState,
}

impl<H: HttpClient, C: CookieStore, B: Browser> ResetPasswordModel<H, C, B> {
    pub fn new(api: AdminApi, http: H, cookies: C, browser: B, urls: AdminUrls) -> Self {
        Self {
            api,
            http,
            cookies,
            browser,
            urls,
            username: String::new(),
            password: String::new(),
            message: String::new(),
            is_submitting: false,
            errors: ErrorState::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn errors(&self) -> &[String] {
        self.errors.messages()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    pub fn submit(&mut self) {
        let Some(request) = self.begin_submit() else {
            return;
        };
        let result = self.http.send(request);
        self.finish_submit(result);
    }

    /// Blank required fields, for hosts that want to disable the submit
    /// button. `submit` does not consult it; the backend has the final say.
    pub fn missing_fields(&self) -> Vec<String> {
        validate_credentials(&self.username, &self.password)
    }

    /// Start a submission. Returns `None` when one is already in flight.
    pub fn begin_submit(&mut self) -> Option<HttpRequest> {
        if self.is_submitting {
            debug!("submission already in flight");
            return None;
        }

        let input = SessionRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        };
        let request = match self.api.build_create_session(&input) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "could not build session request");
                self.errors.set_from(&err);
                self.browser.refresh();
                return None;
            }
        };

        self.is_submitting = true;
        self.errors.clear();
        self.message = LOADING_MESSAGE.to_string();
        self.browser.refresh();
        Some(request)
    }

    pub fn finish_submit(&mut self, result: Result<HttpResponse, ApiError>) {
        match result.and_then(|response| self.api.parse_create_session(response)) {
            Ok(session) => {
                debug!(username = %self.username, "session created");
                self.cookies.set(SESSION_TOKEN, &session.session_token);
                self.cookies.set(AUTH_CLAIMS, &session.auth_claims.join(","));
                self.is_submitting = false;
                self.browser.redirect(&self.urls.redirector);
            }
            Err(err) => {
                warn!(username = %self.username, error = %err, "log-in failed");
                self.errors.set_from(&err);
                self.message.clear();
                self.is_submitting = false;
                self.browser.refresh();
            }
        }
    }
}
