//! Headless core of the service-provider admin dashboard.
//!
//! # Overview
//! View-models for the dashboard listing, the general-details editor, the
//! add-provider form and the admin log-in form. Each model holds plain state
//! and talks to the admin REST API through collaborators handed to it at
//! construction: an `HttpClient`, a `CookieStore` and a `Browser`.
//!
//! # Design
//! - `AdminApi` is stateless. Each backend operation is split into `build_*`
//!   (produces a request) and `parse_*` (consumes a response).
//! - Any non-2xx response is one kind of failure: the body's `messages` list
//!   becomes the model's error list. Failures never escape a model method.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod browser;
pub mod catalog;
pub mod client;
pub mod config;
pub mod cookies;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod models;
pub mod types;
pub mod validation;

pub use browser::Browser;
pub use catalog::{CatalogTag, City};
pub use client::AdminApi;
pub use config::{AdminConfig, ConfigError};
pub use cookies::{CookieStore, MemoryCookieStore};
pub use endpoints::{AdminUrls, Endpoints};
pub use error::{ApiError, ErrorState};
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use models::{
    AddServiceProviderModel, DashboardEntry, DashboardModel, ResetPasswordModel,
    ServiceProviderDetailsModel,
};
pub use types::{
    GeneralDetails, NewServiceProvider, ServiceProvider, ServiceProviderSummary, SessionCreated,
    SessionRequest, VerificationToggle,
};
