pub mod handlers;
pub mod routes;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;
use crate::tts::{
    SynthesisRequest, DEFAULT_LANGUAGE, DEFAULT_PITCH, DEFAULT_SPEAKING_RATE, DEFAULT_VOICE,
};

/// Practical ceiling on submitted text; the provider rejects long input
/// anyway, this surfaces it earlier with a clear message.
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Body of `POST /api/tts`. Everything except `text` is optional, and the
/// numeric fields tolerate being sent as strings.
#[derive(Debug, Default, Deserialize)]
pub struct SynthesizeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub voice: Option<String>,
    #[serde(default, deserialize_with = "loose_f64")]
    pub speed: Option<f64>,
    #[serde(default, deserialize_with = "loose_f64")]
    pub pitch: Option<f64>,
}

impl SynthesizeRequest {
    /// Validate and apply defaults. No range checks on speed/pitch; the
    /// provider rejects out-of-range values and that surfaces as an
    /// upstream failure.
    pub fn into_synthesis_request(self) -> Result<SynthesisRequest, AppError> {
        let text = match self.text {
            Some(text) if !text.is_empty() => text,
            _ => return Err(AppError::MissingText),
        };

        if text.len() > MAX_TEXT_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Text too long (max {} characters)",
                MAX_TEXT_LENGTH
            )));
        }

        Ok(SynthesisRequest {
            text,
            language: self
                .language
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            voice: self
                .voice
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_VOICE.to_string()),
            speaking_rate: self.speed.unwrap_or(DEFAULT_SPEAKING_RATE),
            pitch: self.pitch.unwrap_or(DEFAULT_PITCH),
        })
    }
}

/// Accept a JSON number or a numeric string.
fn loose_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => Ok(n.as_f64()),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid numeric value: {:?}", s))),
        other => Err(serde::de::Error::custom(format!(
            "expected a number, got {}",
            other
        ))),
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub languages: &'static [crate::tts::catalog::Language],
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
