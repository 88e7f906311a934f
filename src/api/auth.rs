use serde::{Deserialize, Serialize};

use super::client::ApiClient;
use super::transport::{join_url, Http, HttpRequest};
use super::error::ApiError;
use crate::services::session::{is_usable_token, Session, User};

pub const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct LoginEnvelope {
    data: LoginData,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<User>,
}

/// Login endpoint. Deliberately bypasses `ApiClient`'s interceptors: no stale
/// bearer token goes out, and a failed login never triggers the global 401
/// handling.
#[derive(Clone)]
pub struct AuthApi {
    http: Http,
    base_url: String,
}

impl AuthApi {
    pub fn new(http: Http, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login_url(&self) -> String {
        join_url(&self.base_url, LOGIN_PATH)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let request = HttpRequest::post(self.login_url())
            .header("Accept", "application/json")
            .json_body(credentials)?;

        log::info!("Signing in as {}", credentials.email);
        let envelope: LoginEnvelope = self.http.send(request).await?.into_result()?;

        let token = envelope
            .data
            .token
            .filter(|token| is_usable_token(token))
            .ok_or_else(|| ApiError::Decode("login response carried no token".to_string()))?;

        Ok(Session {
            token,
            user: envelope.data.user,
        })
    }
}

impl ApiClient {
    /// Un-intercepted login client sharing this client's transport.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.http().clone(), self.base_url())
    }
}
