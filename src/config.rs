use std::net::SocketAddr;

/// Server configuration, read once at startup and passed down explicitly.
/// No Debug derive: `session_secret` and the API key must not end up in logs.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Signs and verifies session tokens.
    pub session_secret: String,
    /// API key for the Google Cloud Text-to-Speech REST endpoint.
    pub google_api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .expect("PORT must be a number");
        let session_secret =
            std::env::var("SESSION_SECRET").expect("SESSION_SECRET must be set");
        let google_api_key =
            std::env::var("GOOGLE_TTS_API_KEY").expect("GOOGLE_TTS_API_KEY must be set");

        Self {
            host,
            port,
            session_secret,
            google_api_key,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid address")
    }
}
