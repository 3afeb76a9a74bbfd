use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::Subject;
use crate::error::AppError;

/// Fixed session lifetime: 30 days.
pub const SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Subject id of the credential that logged in.
    pub sub: String,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

/// Issues and verifies session tokens. Swappable so the token mechanism
/// (signed cookie, JWT, opaque store-backed token) is not baked into the
/// handlers.
pub trait SessionIssuer: Send + Sync {
    fn issue(&self, subject: &Subject) -> Result<String, AppError>;

    /// Returns the session if the token is well-formed, correctly signed
    /// and not expired.
    fn verify(&self, token: &str) -> Option<Session>;
}

pub struct JwtSessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtSessionIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    fn now() -> usize {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as usize
    }
}

impl SessionIssuer for JwtSessionIssuer {
    fn issue(&self, subject: &Subject) -> Result<String, AppError> {
        let now = Self::now();
        let claims = Session {
            sub: subject.id.clone(),
            email: subject.email.clone(),
            iat: now,
            exp: now + SESSION_TTL_SECS as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("session token encoding failed: {}", e)))
    }

    fn verify(&self, token: &str) -> Option<Session> {
        decode::<Session>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> Subject {
        Subject {
            id: "1".to_string(),
            email: "test@test.com".to_string(),
        }
    }

    #[test]
    fn issue_then_verify_roundtrips_the_subject() {
        let issuer = JwtSessionIssuer::new("test-secret");
        let token = issuer.issue(&subject()).unwrap();
        let session = issuer.verify(&token).unwrap();

        assert_eq!(session.sub, "1");
        assert_eq!(session.email, "test@test.com");
        assert_eq!(session.exp - session.iat, SESSION_TTL_SECS as usize);
    }

    #[test]
    fn garbage_and_tampered_tokens_fail() {
        let issuer = JwtSessionIssuer::new("test-secret");
        assert!(issuer.verify("not-a-token").is_none());

        let mut token = issuer.issue(&subject()).unwrap();
        token.push('x');
        assert!(issuer.verify(&token).is_none());
    }

    #[test]
    fn token_signed_with_other_secret_fails() {
        let issuer = JwtSessionIssuer::new("test-secret");
        let other = JwtSessionIssuer::new("other-secret");
        let token = other.issue(&subject()).unwrap();
        assert!(issuer.verify(&token).is_none());
    }

    #[test]
    fn expired_token_fails() {
        let issuer = JwtSessionIssuer::new("test-secret");
        let now = JwtSessionIssuer::now();
        let claims = Session {
            sub: "1".to_string(),
            email: "test@test.com".to_string(),
            iat: now - 600,
            // Past the default validation leeway.
            exp: now - 300,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(issuer.verify(&token).is_none());
    }
}
