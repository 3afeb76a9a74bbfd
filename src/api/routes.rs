use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::auth::{require_session, CredentialStore, SessionIssuer};
use crate::tts::SynthesisClient;

/// Request-handler dependencies, injected rather than global so tests can
/// swap in fakes.
pub struct AppState {
    pub tts: Arc<dyn SynthesisClient>,
    pub credentials: Arc<dyn CredentialStore>,
    pub sessions: Arc<dyn SessionIssuer>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // Synthesis requires a verified session; enforcement lives here, not in
    // any client-side redirect.
    let protected = Router::new()
        .route("/tts", post(handlers::synthesize))
        .route("/session", get(handlers::session_info))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    let api_routes = Router::new()
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/voices", get(handlers::list_voices))
        .route("/health", get(handlers::health))
        .merge(protected);

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
