//! Dashboard listing: label derivation and verification toggles.

mod common;

use admin_core::{DashboardModel, HttpMethod};
use common::{api, body_json, FakeBrowser, FakeHttp};
use serde_json::json;

fn listing() -> serde_json::Value {
    json!([
        {"key": "albert-kennedy-trust", "name": "Albert Kennedy Trust", "isVerified": true},
        {"key": "coffee4craig", "name": "Coffee4Craig", "isVerified": false}
    ])
}

#[test]
fn loads_listing_with_one_get() {
    let http = FakeHttp::new();
    http.respond_json(200, listing());
    let browser = FakeBrowser::new();

    let dashboard = DashboardModel::new(api(), &http, &browser);

    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(requests[0].path, "http://api.test/service-providers");
    assert_eq!(dashboard.service_providers().len(), 2);
    assert_eq!(browser.loading_calls(), (1, 1));
}

#[test]
fn sets_verified_labels() {
    let http = FakeHttp::new();
    http.respond_json(200, listing());
    let dashboard = DashboardModel::new(api(), &http, FakeBrowser::new());

    let providers = dashboard.service_providers();
    assert_eq!(providers[0].verified_label(), "verified");
    assert_eq!(providers[1].verified_label(), "under review");
}

#[test]
fn sets_toggle_verification_button_labels() {
    let http = FakeHttp::new();
    http.respond_json(200, listing());
    let dashboard = DashboardModel::new(api(), &http, FakeBrowser::new());

    let providers = dashboard.service_providers();
    assert_eq!(providers[0].toggle_verification_button_label(), "un-verify");
    assert_eq!(providers[1].toggle_verification_button_label(), "verify");
}

#[test]
fn toggle_sends_key_and_inverse_of_current_flag() {
    let http = FakeHttp::new();
    http.respond_json(200, listing()).respond_json(200, json!({}));
    let mut dashboard = DashboardModel::new(api(), &http, FakeBrowser::new());
    http.clear_requests();

    dashboard.toggle_verified("albert-kennedy-trust", true);

    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].path, "http://api.test/service-provider-verifications");
    assert_eq!(
        body_json(&requests[0]),
        json!({"key": "albert-kennedy-trust", "isVerified": false})
    );
}

#[test]
fn confirmed_toggle_flips_entry_in_place() {
    let http = FakeHttp::new();
    http.respond_json(200, listing()).respond_json(200, json!({}));
    let mut dashboard = DashboardModel::new(api(), &http, FakeBrowser::new());

    dashboard.toggle_verified("coffee4craig", false);

    let entry = &dashboard.service_providers()[1];
    assert!(entry.is_verified);
    assert_eq!(entry.verified_label(), "verified");
    assert!(!dashboard.has_errors());
}

#[test]
fn rejected_toggle_keeps_entry_and_surfaces_messages() {
    let http = FakeHttp::new();
    http.respond_json(200, listing())
        .respond_json(500, json!({"messages": ["verification unavailable"]}));
    let mut dashboard = DashboardModel::new(api(), &http, FakeBrowser::new());

    dashboard.toggle_verified("coffee4craig", false);

    assert!(!dashboard.service_providers()[1].is_verified);
    assert_eq!(dashboard.errors(), ["verification unavailable"]);
}

#[test]
fn failed_listing_leaves_empty_list() {
    let http = FakeHttp::new();
    http.fail_transport("connection refused");
    let dashboard = DashboardModel::new(api(), &http, FakeBrowser::new());

    assert!(dashboard.service_providers().is_empty());
    assert!(!dashboard.has_errors());
}

#[test]
fn reload_issues_a_fresh_get() {
    let http = FakeHttp::new();
    http.respond_json(200, listing())
        .respond_json(200, json!([{"key": "only-one", "name": "Only One"}]));
    let mut dashboard = DashboardModel::new(api(), &http, FakeBrowser::new());

    dashboard.reload();

    assert_eq!(http.requests().len(), 2);
    assert_eq!(dashboard.service_providers().len(), 1);
    assert!(!dashboard.service_providers()[0].is_verified);
}

#[test]
fn toggle_is_bracketed_by_loading_hooks() {
    let http = FakeHttp::new();
    http.respond_json(200, listing()).respond_json(200, json!({}));
    let browser = FakeBrowser::new();
    let mut dashboard = DashboardModel::new(api(), &http, &browser);
    assert_eq!(browser.loading_calls(), (1, 1));

    dashboard.toggle_verified("coffee4craig", false);

    assert_eq!(browser.loading_calls(), (2, 2));
}
