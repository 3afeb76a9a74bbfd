use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use std::sync::Arc;

use super::{
    HealthResponse, LoginRequest, LoginResponse, SessionResponse, SynthesizeRequest,
    VoicesResponse,
};
use crate::api::routes::AppState;
use crate::auth::{self, Session, SESSION_COOKIE, SESSION_TTL_SECS};
use crate::error::AppError;
use crate::tts::catalog;

pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Json(request): Json<SynthesizeRequest>,
) -> Result<Response, AppError> {
    let request = request.into_synthesis_request()?;

    tracing::info!(
        email = %session.email,
        voice = %request.voice,
        chars = request.text.len(),
        "Synthesis requested"
    );

    // Fresh provider call every time; nothing is cached or retried.
    let audio = state.tts.synthesize(&request).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "audio/mpeg"),
            (header::CONTENT_DISPOSITION, "inline; filename=speech.mp3"),
        ],
        audio,
    )
        .into_response())
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let subject = auth::authenticate(
        state.credentials.as_ref(),
        &request.email,
        &request.password,
    )?;
    let token = state.sessions.issue(&subject)?;

    let cookie = format!(
        "{}={}; HttpOnly; Path=/; Max-Age={}; SameSite=Lax",
        SESSION_COOKIE, token, SESSION_TTL_SECS
    );

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            email: subject.email,
        }),
    )
        .into_response())
}

pub async fn logout() -> Response {
    let cookie = format!("{}=; HttpOnly; Path=/; Max-Age=0; SameSite=Lax", SESSION_COOKIE);
    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(serde_json::json!({ "status": "signed out" })),
    )
        .into_response()
}

pub async fn session_info(Extension(session): Extension<Session>) -> Json<SessionResponse> {
    Json(SessionResponse {
        id: session.sub,
        email: session.email,
    })
}

pub async fn list_voices() -> Json<VoicesResponse> {
    Json(VoicesResponse {
        languages: catalog::LANGUAGES,
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
