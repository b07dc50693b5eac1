mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::pricing::PricingClient;
use services::session::AuthClient;
use services::settings::SettingsClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Collaborator clients are built once at startup and injected into
    // handlers through AppState. All three are required.
    let auth = AuthClient::from_env().expect("auth provider not configured");
    let settings = SettingsClient::from_env().expect("settings store not configured");
    let pricing = PricingClient::from_env().expect("pricing provider not configured");

    let state = state::AppState::new(Arc::new(auth), Arc::new(settings), Arc::new(pricing));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "membergate listening");
    axum::serve(listener, app).await.expect("server failed");
}
