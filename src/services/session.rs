//! Session service — sign-out pass-through to the external auth provider.

use async_trait::async_trait;

/// Auth provider connection settings loaded from environment.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl AuthConfig {
    /// Load from `AUTH_SERVICE_URL` and optional `AUTH_SERVICE_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if `AUTH_SERVICE_URL` is unset.
    pub fn from_env() -> Result<Self, SessionError> {
        let base_url =
            std::env::var("AUTH_SERVICE_URL").map_err(|_| SessionError::Config("AUTH_SERVICE_URL not set"))?;
        let api_key = std::env::var("AUTH_SERVICE_API_KEY").ok();
        Ok(Self { base_url, api_key })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("auth provider not configured: {0}")]
    Config(&'static str),
    #[error("auth provider request failed: {0}")]
    Request(String),
    #[error("auth provider error: {0}")]
    Upstream(String),
}

/// Sign-out capability of the external auth provider.
///
/// Sign-out is atomic: either the provider confirms the session is gone or
/// the call fails as a whole.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn sign_out(&self, token: &str) -> Result<(), SessionError>;
}

/// HTTP client for the auth provider.
pub struct AuthClient {
    config: AuthConfig,
    http: reqwest::Client,
}

impl AuthClient {
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self { config, http: reqwest::Client::new() }
    }

    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the auth provider URL is missing.
    pub fn from_env() -> Result<Self, SessionError> {
        Ok(Self::new(AuthConfig::from_env()?))
    }
}

/// Sign-out endpoint under the provider base URL.
pub(crate) fn sign_out_url(base_url: &str) -> String {
    format!("{}/sessions/sign-out", base_url.trim_end_matches('/'))
}

#[async_trait]
impl SessionProvider for AuthClient {
    async fn sign_out(&self, token: &str) -> Result<(), SessionError> {
        let mut req = self
            .http
            .post(sign_out_url(&self.config.base_url))
            .json(&serde_json::json!({ "token": token }));
        if let Some(key) = &self.config.api_key {
            req = req.header("Authorization", format!("Bearer {key}"));
        }

        let resp = req
            .send()
            .await
            .map_err(|e| SessionError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SessionError::Upstream(format!("{status}: {body}")));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
