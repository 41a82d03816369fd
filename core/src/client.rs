//! Request builder and response parser for the admin API.
//!
//! # Design
//! `AdminApi` holds only the endpoint registry and carries no state between
//! calls. Each backend operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The view-models sit on top and decide what to do with the
//! result; the `HttpClient` they were given executes the round-trip.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cookies::SESSION_TOKEN;
use crate::endpoints::Endpoints;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    GeneralDetails, NewServiceProvider, ServiceProvider, ServiceProviderSummary, SessionCreated,
    SessionRequest, VerificationToggle,
};

const JSON: &str = "application/json";

#[derive(Debug, Clone)]
pub struct AdminApi {
    endpoints: Endpoints,
}

impl AdminApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoints: Endpoints::new(base_url),
        }
    }

    pub fn build_list_service_providers(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.endpoints.service_providers(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_toggle_verification(
        &self,
        input: &VerificationToggle,
    ) -> Result<HttpRequest, ApiError> {
        json_request(
            HttpMethod::Post,
            self.endpoints.service_provider_verifications(),
            None,
            input,
        )
    }

    pub fn build_get_service_provider(&self, key: &str, session_token: Option<&str>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.endpoints.service_provider(key),
            headers: session_header(session_token).into_iter().collect(),
            body: None,
        }
    }

    pub fn build_update_general_details(
        &self,
        key: &str,
        session_token: Option<&str>,
        input: &GeneralDetails,
    ) -> Result<HttpRequest, ApiError> {
        json_request(
            HttpMethod::Put,
            self.endpoints.general_information(key),
            session_token,
            input,
        )
    }

    pub fn build_create_service_provider(
        &self,
        session_token: Option<&str>,
        input: &NewServiceProvider,
    ) -> Result<HttpRequest, ApiError> {
        json_request(
            HttpMethod::Post,
            self.endpoints.service_providers(),
            session_token,
            input,
        )
    }

    pub fn build_create_session(&self, input: &SessionRequest) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, self.endpoints.create_session(), None, input)
    }

    pub fn parse_list_service_providers(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<ServiceProviderSummary>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_toggle_verification(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_get_service_provider(
        &self,
        response: HttpResponse,
    ) -> Result<ServiceProvider, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_update_general_details(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_create_service_provider(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_create_session(&self, response: HttpResponse) -> Result<SessionCreated, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }
}

fn session_header(session_token: Option<&str>) -> Option<(String, String)> {
    session_token.map(|token| (SESSION_TOKEN.to_string(), token.to_string()))
}

fn json_request<T: Serialize>(
    method: HttpMethod,
    path: String,
    session_token: Option<&str>,
    input: &T,
) -> Result<HttpRequest, ApiError> {
    let body =
        serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
    let mut headers = vec![("content-type".to_string(), JSON.to_string())];
    headers.extend(session_header(session_token));
    Ok(HttpRequest {
        method,
        path,
        headers,
        body: Some(body),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Any non-2xx status is a failed request; 4xx and 5xx are not told apart.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::from_response(response.status, &response.body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> AdminApi {
        AdminApi::new("http://localhost:8080")
    }

    fn body(req: &HttpRequest) -> serde_json::Value {
        serde_json::from_str(req.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn build_list_has_no_headers_or_body() {
        let req = api().build_list_service_providers();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/service-providers");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn build_get_attaches_session_token() {
        let req = api().build_get_service_provider("coffee4craig", Some("stored-session-token"));
        assert_eq!(req.path, "http://localhost:8080/service-providers/coffee4craig");
        assert_eq!(
            req.headers,
            vec![("session-token".to_string(), "stored-session-token".to_string())]
        );
    }

    #[test]
    fn build_get_without_token_sends_no_header() {
        let req = api().build_get_service_provider("coffee4craig", None);
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_update_general_details_puts_json_with_token() {
        let input = GeneralDetails {
            name: "new name".to_string(),
            description: "new description".to_string(),
            short_description: "new short description".to_string(),
            city_id: "new city id".to_string(),
            tags: vec!["tag-a".to_string()],
        };
        let req = api()
            .build_update_general_details("coffee4craig", Some("tok"), &input)
            .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(
            req.path,
            "http://localhost:8080/service-providers/coffee4craig/general-information"
        );
        assert_eq!(
            req.headers,
            vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("session-token".to_string(), "tok".to_string()),
            ]
        );
        assert_eq!(body(&req)["ShortDescription"], "new short description");
    }

    #[test]
    fn build_toggle_posts_to_verifications() {
        let req = api()
            .build_toggle_verification(&VerificationToggle {
                key: "albert-kennedy-trust".to_string(),
                is_verified: false,
            })
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/service-provider-verifications");
        assert_eq!(req.header("session-token"), None);
        assert_eq!(body(&req)["isVerified"], false);
    }

    #[test]
    fn build_create_session_posts_credentials() {
        let req = api()
            .build_create_session(&SessionRequest {
                username: "admin".to_string(),
                password: "secret".to_string(),
            })
            .unwrap();
        assert_eq!(req.path, "http://localhost:8080/sessions/create");
        assert_eq!(body(&req), serde_json::json!({"username": "admin", "password": "secret"}));
    }

    #[test]
    fn parse_list_success() {
        let response = HttpResponse::new(
            200,
            r#"[{"key":"albert-kennedy-trust","name":"Albert Kennedy Trust","isVerified":true}]"#,
        );
        let providers = api().parse_list_service_providers(response).unwrap();
        assert_eq!(providers.len(), 1);
        assert!(providers[0].is_verified);
    }

    #[test]
    fn parse_list_bad_json() {
        let err = api()
            .parse_list_service_providers(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_update_failure_carries_messages() {
        let response = HttpResponse::new(
            400,
            r#"{"messages":["returned error message 1","returned error message 2"]}"#,
        );
        let err = api().parse_update_general_details(response).unwrap_err();
        assert_eq!(
            err.messages(),
            ["returned error message 1", "returned error message 2"]
        );
    }

    #[test]
    fn server_errors_surface_like_validation_errors() {
        let response = HttpResponse::new(503, r#"{"messages":["try later"]}"#);
        let err = api().parse_create_service_provider(response).unwrap_err();
        assert!(matches!(err, ApiError::Request { status: 503, .. }));
        assert_eq!(err.messages(), ["try later"]);
    }

    #[test]
    fn parse_create_session_reads_token_and_claims() {
        let response = HttpResponse::new(
            201,
            r#"{"sessionToken":"abc","authClaims":["SuperAdmin"]}"#,
        );
        let session = api().parse_create_session(response).unwrap();
        assert_eq!(session.session_token, "abc");
        assert_eq!(session.auth_claims, ["SuperAdmin"]);
    }
}
