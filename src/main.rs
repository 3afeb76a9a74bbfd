use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use voiceai_server::api::routes::{create_router, AppState};
use voiceai_server::auth::{EnvCredentialStore, JwtSessionIssuer};
use voiceai_server::config::Config;
use voiceai_server::tts::GoogleTtsClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let addr = config.addr();

    tracing::info!("VoiceAI server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);

    let state = Arc::new(AppState {
        tts: Arc::new(GoogleTtsClient::new(config.google_api_key.clone())),
        credentials: Arc::new(EnvCredentialStore::from_env()),
        sessions: Arc::new(JwtSessionIssuer::new(&config.session_secret)),
    });

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app).await.expect("Server error");
}
