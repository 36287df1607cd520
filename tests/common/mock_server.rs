//! Mock server helpers for integration tests
//!
//! Starts a wiremock server and points an `ApiClient` at it.

use authportal::egui_app::{ApiClient, Config};
use authportal::shared::AppConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// A running mock API with a client configured against it
pub struct MockApi {
    pub server: MockServer,
    pub client: ApiClient,
}

impl MockApi {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let client = client_for(&server.uri());
        Self { server, client }
    }

    /// Answer `POST {route}` with `response`, expecting exactly one call
    pub async fn expect_post(&self, route: &str, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(response)
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Requests the server has seen so far
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

pub fn client_for(base_url: &str) -> ApiClient {
    let config = Config::with_builder(AppConfig::builder().api_url(base_url))
        .expect("mock server URL is valid");
    ApiClient::new(&config).expect("client builds")
}
