//! Pricing service — dynamic subscription price quotes from the payment
//! provider. Quotes come back as decimal-formatted strings; parsing and the
//! fallback guard live with the route handler.

use async_trait::async_trait;

/// Pricing provider connection settings loaded from environment.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl PricingConfig {
    /// Load from `PRICING_SERVICE_URL` and optional `PRICING_SERVICE_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PRICING_SERVICE_URL` is unset.
    pub fn from_env() -> Result<Self, PricingError> {
        let base_url = std::env::var("PRICING_SERVICE_URL")
            .map_err(|_| PricingError::Config("PRICING_SERVICE_URL not set"))?;
        let api_key = std::env::var("PRICING_SERVICE_API_KEY").ok();
        Ok(Self { base_url, api_key })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("pricing provider not configured: {0}")]
    Config(&'static str),
    #[error("pricing provider request failed: {0}")]
    Request(String),
    #[error("pricing provider error: {0}")]
    Upstream(String),
}

/// Quote capability of the external pricing provider.
#[async_trait]
pub trait PricingProvider: Send + Sync {
    /// Return the current subscription price as a decimal-formatted string.
    async fn dynamic_price(&self) -> Result<String, PricingError>;
}

/// Wire shape of a quote: `{ "price": "12.50" }`.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct QuoteResponse {
    pub price: String,
}

/// HTTP client for the pricing provider.
pub struct PricingClient {
    config: PricingConfig,
    http: reqwest::Client,
}

impl PricingClient {
    #[must_use]
    pub fn new(config: PricingConfig) -> Self {
        Self { config, http: reqwest::Client::new() }
    }

    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the pricing provider URL is missing.
    pub fn from_env() -> Result<Self, PricingError> {
        Ok(Self::new(PricingConfig::from_env()?))
    }
}

/// Quote endpoint under the provider base URL.
pub(crate) fn quote_url(base_url: &str) -> String {
    format!("{}/subscription/price", base_url.trim_end_matches('/'))
}

#[async_trait]
impl PricingProvider for PricingClient {
    async fn dynamic_price(&self) -> Result<String, PricingError> {
        let mut req = self.http.get(quote_url(&self.config.base_url));
        if let Some(key) = &self.config.api_key {
            req = req.header("Authorization", format!("Bearer {key}"));
        }

        let resp = req
            .send()
            .await
            .map_err(|e| PricingError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(PricingError::Upstream(format!("{status}: {body}")));
        }

        let quote = resp
            .json::<QuoteResponse>()
            .await
            .map_err(|e| PricingError::Upstream(e.to_string()))?;
        Ok(quote.price)
    }
}

#[cfg(test)]
#[path = "pricing_test.rs"]
mod tests;
