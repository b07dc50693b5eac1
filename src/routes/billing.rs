//! Billing routes — auto-renewal flag and subscription price quote.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::routes::envelope::Envelope;
use crate::state::AppState;

/// Price substituted when a live quote cannot be obtained.
pub const FALLBACK_PRICE: f64 = 10.0;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaypalConfigPayload {
    pub auto_renewal: bool,
}

#[derive(Debug, Serialize)]
pub struct PricePayload {
    pub success: bool,
    pub price: f64,
}

/// `GET /api/paypal/config` — read the auto-renewal flag.
///
/// A settings fault degrades to `autoRenewal: false` instead of a 5xx; the
/// flag only gates a client-side toggle.
pub async fn paypal_config(State(state): State<AppState>) -> Json<Envelope<PaypalConfigPayload>> {
    Json(read_auto_renewal(&state).await)
}

pub(crate) async fn read_auto_renewal(state: &AppState) -> Envelope<PaypalConfigPayload> {
    let auto_renewal = match state.settings.auto_renewal_enabled().await {
        Ok(enabled) => enabled,
        Err(e) => {
            tracing::warn!(error = %e, "settings lookup failed, auto-renewal off");
            false
        }
    };
    Envelope::ok(PaypalConfigPayload { auto_renewal })
}

/// `GET /api/subscription-price` — live quote with a fixed fallback.
///
/// Always 200: a failed quote is masked as `success: false` with the
/// fallback price rather than surfacing the fault.
pub async fn subscription_price(State(state): State<AppState>) -> Json<Envelope<PricePayload>> {
    Json(quote_price(&state).await)
}

pub(crate) async fn quote_price(state: &AppState) -> Envelope<PricePayload> {
    let payload = match state.pricing.dynamic_price().await {
        Ok(raw) => match parse_price(&raw) {
            Some(price) => PricePayload { success: true, price },
            None => {
                tracing::error!(quote = %raw, "unparseable price quote, using fallback");
                PricePayload { success: false, price: FALLBACK_PRICE }
            }
        },
        Err(e) => {
            tracing::error!(error = %e, "price quote failed, using fallback");
            PricePayload { success: false, price: FALLBACK_PRICE }
        }
    };
    Envelope::ok(payload)
}

/// Parse a decimal-formatted quote. Prices are non-negative and finite;
/// anything else counts as a parse fault.
pub(crate) fn parse_price(raw: &str) -> Option<f64> {
    let price: f64 = raw.trim().parse().ok()?;
    (price.is_finite() && price >= 0.0).then_some(price)
}

#[cfg(test)]
#[path = "billing_test.rs"]
mod tests;
