//! Authentication request and response types
//!
//! Payloads sent to the remote API and the shapes its replies are read into.
//! A successful reply that does not look like [`AuthTokens`] is kept as an
//! [`UnrecognizedResponse`] instead of being forced into the expected shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Account role chosen at registration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Every accepted role, in display order
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("unknown role: {}", s))
    }
}

/// Login request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    /// Username or email
    pub identifier: String,
    pub password: String,
}

/// Registration request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Tokens returned by a successful login, registration or refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    /// Registration replies only carry an access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// A 2xx reply whose body is not an [`AuthTokens`] object
#[derive(Debug, Clone, PartialEq)]
pub struct UnrecognizedResponse {
    pub status: u16,
    /// Parsed JSON body, or the raw text as a JSON string when it was not JSON
    pub body: Value,
}

/// What a successful auth call produced
pub type AuthOutcome = Result<AuthTokens, UnrecognizedResponse>;

/// Interpret a successful reply body.
///
/// The body is never rejected: anything that is not a token object comes
/// back as [`UnrecognizedResponse`].
pub fn read_outcome(status: u16, body: &str) -> AuthOutcome {
    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(_) => {
            return Err(UnrecognizedResponse {
                status,
                body: Value::String(body.to_string()),
            })
        }
    };

    match serde_json::from_value::<AuthTokens>(value.clone()) {
        Ok(tokens) => Ok(tokens),
        Err(_) => Err(UnrecognizedResponse { status, body: value }),
    }
}
