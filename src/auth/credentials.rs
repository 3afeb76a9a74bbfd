use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// A stored secret, in one of the two supported configuration profiles.
#[derive(Debug, Clone)]
pub enum Secret {
    /// Plaintext value, compared byte-for-byte in constant time.
    Plain(String),
    /// Lowercase hex SHA-256 digest of the password.
    Sha256Hex(String),
}

impl Secret {
    pub fn verify(&self, candidate: &str) -> bool {
        match self {
            Secret::Plain(expected) => expected.as_bytes().ct_eq(candidate.as_bytes()).into(),
            Secret::Sha256Hex(expected) => {
                let digest = hex::encode(Sha256::digest(candidate.as_bytes()));
                digest
                    .as_bytes()
                    .ct_eq(expected.to_ascii_lowercase().as_bytes())
                    .into()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Credential {
    pub id: String,
    pub email: String,
    pub secret: Secret,
}

/// Backing store for login credentials. The env-backed implementation below
/// is the default; alternate stores (file, secret manager) plug in here.
pub trait CredentialStore: Send + Sync {
    /// Case-insensitive email lookup.
    fn find_by_email(&self, email: &str) -> Option<&Credential>;

    fn is_empty(&self) -> bool;
}

/// Credentials read from `USER_<n>_EMAIL` plus either `USER_<n>_PASSWORD`
/// (plaintext) or `USER_<n>_PASSWORD_SHA256` (hex digest), scanned from n=1
/// until the first missing email.
pub struct EnvCredentialStore {
    credentials: Vec<Credential>,
}

impl EnvCredentialStore {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }

    pub fn from_env() -> Self {
        let mut credentials = Vec::new();
        let mut index = 1;

        while let Ok(email) = std::env::var(format!("USER_{}_EMAIL", index)) {
            let secret = if let Ok(digest) = std::env::var(format!("USER_{}_PASSWORD_SHA256", index))
            {
                Some(Secret::Sha256Hex(digest))
            } else {
                std::env::var(format!("USER_{}_PASSWORD", index))
                    .ok()
                    .map(Secret::Plain)
            };

            if let Some(secret) = secret {
                credentials.push(Credential {
                    id: index.to_string(),
                    email,
                    secret,
                });
            } else {
                tracing::warn!(index, "USER_{}_EMAIL set without a password, skipping", index);
            }
            index += 1;
        }

        if credentials.is_empty() {
            tracing::warn!("No users configured; set USER_1_EMAIL and USER_1_PASSWORD");
        } else {
            tracing::info!(
                users = credentials.len(),
                "Loaded credentials: {}",
                credentials
                    .iter()
                    .map(|c| c.email.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        Self { credentials }
    }
}

impl CredentialStore for EnvCredentialStore {
    fn find_by_email(&self, email: &str) -> Option<&Credential> {
        self.credentials
            .iter()
            .find(|c| c.email.eq_ignore_ascii_case(email))
    }

    fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plaintext_secret_verifies_exact_match_only() {
        let secret = Secret::Plain("password123".to_string());
        assert!(secret.verify("password123"));
        assert!(!secret.verify("password124"));
        assert!(!secret.verify(""));
    }

    #[test]
    fn hashed_secret_verifies_against_digest() {
        // sha256("password123")
        let digest = "ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f";
        let secret = Secret::Sha256Hex(digest.to_string());
        assert!(secret.verify("password123"));
        assert!(!secret.verify("password124"));

        let uppercase = Secret::Sha256Hex(digest.to_uppercase());
        assert!(uppercase.verify("password123"));
    }

    #[test]
    fn lookup_ignores_email_case() {
        let store = EnvCredentialStore::new(vec![Credential {
            id: "1".to_string(),
            email: "User@Example.com".to_string(),
            secret: Secret::Plain("pw".to_string()),
        }]);
        assert!(store.find_by_email("user@example.COM").is_some());
        assert!(store.find_by_email("other@example.com").is_none());
    }
}
