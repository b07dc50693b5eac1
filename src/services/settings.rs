//! Settings service — boolean feature-flag reads from the settings store.

use async_trait::async_trait;

/// Settings store connection settings loaded from environment.
#[derive(Debug, Clone)]
pub struct SettingsConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl SettingsConfig {
    /// Load from `SETTINGS_SERVICE_URL` and optional `SETTINGS_SERVICE_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if `SETTINGS_SERVICE_URL` is unset.
    pub fn from_env() -> Result<Self, SettingsError> {
        let base_url = std::env::var("SETTINGS_SERVICE_URL")
            .map_err(|_| SettingsError::Config("SETTINGS_SERVICE_URL not set"))?;
        let api_key = std::env::var("SETTINGS_SERVICE_API_KEY").ok();
        Ok(Self { base_url, api_key })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings store not configured: {0}")]
    Config(&'static str),
    #[error("settings store request failed: {0}")]
    Request(String),
    #[error("settings store error: {0}")]
    Upstream(String),
}

/// Feature-flag read capability of the external settings store.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn auto_renewal_enabled(&self) -> Result<bool, SettingsError>;
}

/// Wire shape of a flag read: `{ "enabled": true }`.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct FlagResponse {
    pub enabled: bool,
}

/// HTTP client for the settings store.
pub struct SettingsClient {
    config: SettingsConfig,
    http: reqwest::Client,
}

impl SettingsClient {
    #[must_use]
    pub fn new(config: SettingsConfig) -> Self {
        Self { config, http: reqwest::Client::new() }
    }

    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings store URL is missing.
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self::new(SettingsConfig::from_env()?))
    }
}

/// Auto-renewal flag endpoint under the store base URL.
pub(crate) fn flag_url(base_url: &str) -> String {
    format!("{}/settings/auto-renewal", base_url.trim_end_matches('/'))
}

#[async_trait]
impl SettingsStore for SettingsClient {
    async fn auto_renewal_enabled(&self) -> Result<bool, SettingsError> {
        let mut req = self.http.get(flag_url(&self.config.base_url));
        if let Some(key) = &self.config.api_key {
            req = req.header("Authorization", format!("Bearer {key}"));
        }

        let resp = req
            .send()
            .await
            .map_err(|e| SettingsError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SettingsError::Upstream(format!("{status}: {body}")));
        }

        let flag = resp
            .json::<FlagResponse>()
            .await
            .map_err(|e| SettingsError::Upstream(e.to_string()))?;
        Ok(flag.enabled)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
