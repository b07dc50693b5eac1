//! Auth routes — session termination.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use time::Duration;

use crate::routes::envelope::Envelope;
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";
const INTERNAL_ERROR: &str = "Internal server error";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

#[derive(Debug, Serialize)]
pub struct LogoutPayload {
    pub success: bool,
}

/// `POST /api/auth/logout` — sign out upstream, clear the session cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();

    let (status, body) = terminate_session(&state, token).await;

    let cleared = Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO);
    let jar = CookieJar::new().add(cleared);

    (status, jar, Json(body)).into_response()
}

/// Sign-out is atomic: any collaborator fault maps to a single 500 envelope.
pub(crate) async fn terminate_session(state: &AppState, token: &str) -> (StatusCode, Envelope<LogoutPayload>) {
    match state.auth.sign_out(token).await {
        Ok(()) => (StatusCode::OK, Envelope::ok(LogoutPayload { success: true })),
        Err(e) => {
            tracing::error!(error = %e, "sign-out failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Envelope::err(INTERNAL_ERROR))
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
