//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one handle per external collaborator (auth provider, settings store,
//! pricing provider). Handlers share no mutable state; each request makes at
//! most one call through one of these handles.

use std::sync::Arc;

use crate::services::pricing::PricingProvider;
use crate::services::session::SessionProvider;
use crate::services::settings::SettingsStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn SessionProvider>,
    pub settings: Arc<dyn SettingsStore>,
    pub pricing: Arc<dyn PricingProvider>,
}

impl AppState {
    #[must_use]
    pub fn new(
        auth: Arc<dyn SessionProvider>,
        settings: Arc<dyn SettingsStore>,
        pricing: Arc<dyn PricingProvider>,
    ) -> Self {
        Self { auth, settings, pricing }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
