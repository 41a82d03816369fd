//! Wire DTOs for the admin API.
//!
//! # Design
//! Read models use camelCase and default every field, because the backend
//! omits empty collections. Write payloads use the exact key casing the
//! backend binds on (`Name`, `AssociatedCity`, ...). These types are defined
//! independently from the mock-server crate; integration tests catch drift.

use serde::{Deserialize, Serialize};

/// One row of the provider listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProviderSummary {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub is_verified: bool,
}

/// A full service provider record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceProvider {
    pub key: String,
    pub name: String,
    pub description: String,
    pub short_description: String,
    #[serde(rename = "associatedCity", alias = "cityId")]
    pub city_id: String,
    pub tags: Vec<String>,
    pub is_verified: bool,
    pub addresses: Vec<Address>,
    pub grouped_services: Vec<GroupedService>,
    pub provided_services: Vec<ProvidedService>,
    pub need_categories: Vec<String>,
    pub donation_description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub key: String,
    pub street: String,
    pub street1: String,
    pub street2: String,
    pub street3: String,
    pub city: String,
    pub postcode: String,
}

/// Services grouped under a category, e.g. all meal sessions at one venue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupedService {
    pub key: String,
    pub category_id: String,
    pub category_name: String,
    pub info: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvidedService {
    pub key: String,
    pub name: String,
    pub info: String,
    pub tags: Vec<String>,
}

/// Body of a verification toggle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationToggle {
    pub key: String,
    pub is_verified: bool,
}

/// The editable general-details subset of a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct GeneralDetails {
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub city_id: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NewServiceProvider {
    pub name: String,
    pub associated_city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRequest {
    pub username: String,
    pub password: String,
}

/// Returned by the session endpoint on a successful log-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreated {
    pub session_token: String,
    #[serde(default)]
    pub auth_claims: Vec<String>,
}
