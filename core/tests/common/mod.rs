//! Recording doubles for the view-model collaborators.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use admin_core::{AdminApi, AdminUrls, ApiError, Browser, HttpClient, HttpRequest, HttpResponse};

pub const API_URL: &str = "http://api.test";
pub const SITE_URL: &str = "http://admin.test";

pub fn api() -> AdminApi {
    AdminApi::new(API_URL)
}

pub fn urls() -> AdminUrls {
    AdminUrls::new(SITE_URL)
}

/// Replays queued responses in order and records every request it sees.
/// Once the queue is empty it answers `200 {}`.
#[derive(Default)]
pub struct FakeHttp {
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl FakeHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn respond_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.respond(status, body.to_string())
    }

    pub fn fail_transport(&self, reason: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Transport(reason.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn clear_requests(&self) {
        self.requests.borrow_mut().clear();
    }
}

impl HttpClient for FakeHttp {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, "{}")))
    }
}

#[derive(Default)]
pub struct FakeBrowser {
    parameters: HashMap<String, String>,
    redirects: RefCell<Vec<String>>,
    refreshes: Cell<usize>,
    loading: Cell<usize>,
    loaded: Cell<usize>,
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameter(mut self, name: &str, value: &str) -> Self {
        self.parameters.insert(name.to_string(), value.to_string());
        self
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes.get()
    }

    pub fn loading_calls(&self) -> (usize, usize) {
        (self.loading.get(), self.loaded.get())
    }
}

impl Browser for FakeBrowser {
    fn redirect(&self, url: &str) {
        self.redirects.borrow_mut().push(url.to_string());
    }

    fn url_parameter(&self, name: &str) -> Option<String> {
        self.parameters.get(name).cloned()
    }

    fn loading(&self) {
        self.loading.set(self.loading.get() + 1);
    }

    fn loaded(&self) {
        self.loaded.set(self.loaded.get() + 1);
    }

    fn refresh(&self) {
        self.refreshes.set(self.refreshes.get() + 1);
    }
}

pub fn body_json(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_str(request.body.as_deref().expect("request has no body"))
        .expect("request body is not JSON")
}
