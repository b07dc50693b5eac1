//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the JSON API endpoints and the rendered post page under a single
//! Axum router. Every handler is a stateless pass-through: one request, one
//! collaborator call, one envelope or page back.

pub mod auth;
pub mod billing;
pub mod envelope;
pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/paypal/config", get(billing::paypal_config))
        .route("/api/subscription-price", get(billing::subscription_price))
        .route("/post/{id}", get(pages::post_page))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
