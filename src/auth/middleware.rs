use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::api::routes::AppState;
use crate::error::AppError;

pub const SESSION_COOKIE: &str = "session";

/// Pull the session token out of the request.
///
/// Sources, in priority order:
/// 1. `session` cookie (set by the login handler)
/// 2. `Authorization: Bearer <token>` header (non-browser clients)
fn extract_token(request: &Request) -> Option<String> {
    if let Some(value) = request.headers().get(header::COOKIE) {
        if let Ok(cookies) = value.to_str() {
            for pair in cookies.split(';') {
                if let Some((name, token)) = pair.trim().split_once('=') {
                    if name == SESSION_COOKIE && !token.is_empty() {
                        return Some(token.to_string());
                    }
                }
            }
        }
    }

    if let Some(value) = request.headers().get(header::AUTHORIZATION) {
        if let Ok(auth) = value.to_str() {
            if let Some(token) = auth.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    None
}

/// Middleware guarding the synthesis routes: verifies the presented session
/// token and inserts the `Session` into request extensions for handlers.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let Some(token) = extract_token(&request) else {
        tracing::warn!(path = %path, "Request without session token");
        return Err(AppError::Unauthorized("Authentication required".to_string()));
    };

    let Some(session) = state.sessions.verify(&token) else {
        tracing::warn!(path = %path, "Invalid or expired session token");
        return Err(AppError::Unauthorized("Authentication required".to_string()));
    };

    tracing::debug!(path = %path, email = %session.email, "Session verified");
    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}
