pub mod catalog;
pub mod google;

use async_trait::async_trait;

use crate::error::AppError;

pub use google::GoogleTtsClient;

pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_VOICE: &str = "en-US-Neural2-D";
pub const DEFAULT_SPEAKING_RATE: f64 = 1.0;
pub const DEFAULT_PITCH: f64 = 0.0;

/// One synthesis call's worth of input, already validated and defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub language: String,
    pub voice: String,
    pub speaking_rate: f64,
    pub pitch: f64,
}

/// Outbound synthesis call. One implementation talks to Google Cloud TTS;
/// tests inject fakes through this seam.
#[async_trait]
pub trait SynthesisClient: Send + Sync {
    /// Returns the encoded audio bytes (MP3) for the request.
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, AppError>;
}
