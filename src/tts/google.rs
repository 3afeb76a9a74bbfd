use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::{SynthesisClient, SynthesisRequest};
use crate::error::AppError;

/// Google Cloud Text-to-Speech REST endpoint.
pub const GOOGLE_TTS_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

#[derive(Debug, Serialize)]
struct SynthesizeBody<'a> {
    input: TextInput<'a>,
    voice: VoiceSelection<'a>,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct TextInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
    speaking_rate: f64,
    pitch: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    #[serde(default)]
    audio_content: Option<String>,
}

/// Synthesis client for the Google Cloud TTS REST API, authenticated with
/// an API key. The inner reqwest client is built once and reused.
pub struct GoogleTtsClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GoogleTtsClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: GOOGLE_TTS_URL.to_string(),
        }
    }
}

#[async_trait]
impl SynthesisClient for GoogleTtsClient {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, AppError> {
        let body = SynthesizeBody {
            input: TextInput {
                text: &request.text,
            },
            voice: VoiceSelection {
                language_code: &request.language,
                name: &request.voice,
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
                speaking_rate: request.speaking_rate,
                pitch: request.pitch,
            },
        };

        let response = self
            .http
            .post(&self.base_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "provider returned {}: {}",
                status, detail
            )));
        }

        let payload: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("invalid provider response: {}", e)))?;

        let encoded = payload.audio_content.unwrap_or_default();
        if encoded.is_empty() {
            return Err(AppError::NoAudio);
        }

        let audio = BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| AppError::Upstream(format!("provider sent invalid base64: {}", e)))?;
        if audio.is_empty() {
            return Err(AppError::NoAudio);
        }

        Ok(audio)
    }
}
