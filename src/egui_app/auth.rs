/**
 * Authentication Module
 *
 * API calls for login, registration and token refresh, plus the small piece
 * of UI state that tracks an in-flight attempt.
 */

use crate::egui_app::http::{ApiClient, ApiError};
use crate::shared::auth::{read_outcome, AuthOutcome, LoginPayload, RegisterPayload};
use reqwest::Response;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const REFRESH_PATH: &str = "/refresh";

/// Authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub error: Option<String>,
    pub message: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.message = None;
    }

    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
        self.error = None;
    }
}

async fn into_outcome(response: Response) -> Result<AuthOutcome, ApiError> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    let outcome = read_outcome(status, &body);
    if outcome.is_err() {
        tracing::warn!(status, "response did not contain tokens");
    }
    Ok(outcome)
}

/// Log in with an identifier and password
pub async fn login(client: &ApiClient, payload: &LoginPayload) -> Result<AuthOutcome, ApiError> {
    tracing::debug!(identifier = %payload.identifier, "login");
    let response = client
        .post_json(LOGIN_PATH, payload)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "login failed"))?;
    into_outcome(response).await
}

/// Create an account
pub async fn register(
    client: &ApiClient,
    payload: &RegisterPayload,
) -> Result<AuthOutcome, ApiError> {
    tracing::debug!(username = %payload.username, email = %payload.email, role = %payload.role, "register");
    let response = client
        .post_json(REGISTER_PATH, payload)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "register failed"))?;
    into_outcome(response).await
}

/// Exchange a refresh token.
///
/// The body is the token as a JSON string literal (`"abc123"`), not wrapped
/// in an object.
pub async fn refresh_token(client: &ApiClient, token: &str) -> Result<AuthOutcome, ApiError> {
    tracing::debug!("refresh token");
    let response = client
        .post_json(REFRESH_PATH, token)
        .await
        .inspect_err(|e| tracing::warn!(error = %e, "refresh failed"))?;
    into_outcome(response).await
}
