pub mod credentials;
pub mod middleware;
pub mod session;

pub use credentials::{Credential, CredentialStore, EnvCredentialStore, Secret};
pub use middleware::{require_session, SESSION_COOKIE};
pub use session::{JwtSessionIssuer, Session, SessionIssuer, SESSION_TTL_SECS};

use crate::error::AppError;

/// Verified identity produced by a successful credential check.
#[derive(Debug, Clone)]
pub struct Subject {
    pub id: String,
    pub email: String,
}

/// Check an email/password pair against the credential store.
///
/// Every failure path returns the same generic error so the response does
/// not reveal whether the account exists; the distinction is only logged.
pub fn authenticate(
    store: &dyn CredentialStore,
    email: &str,
    secret: &str,
) -> Result<Subject, AppError> {
    let rejected = || AppError::Unauthorized("Invalid credentials".to_string());

    if email.is_empty() || secret.is_empty() {
        tracing::warn!("Login rejected: missing email or password");
        return Err(rejected());
    }

    if store.is_empty() {
        tracing::warn!("Login rejected: no credentials configured");
        return Err(rejected());
    }

    let Some(credential) = store.find_by_email(email) else {
        tracing::warn!(email = %email, "Login rejected: unknown email");
        return Err(rejected());
    };

    if !credential.secret.verify(secret) {
        tracing::warn!(email = %credential.email, "Login rejected: wrong password");
        return Err(rejected());
    }

    tracing::info!(email = %credential.email, "Login successful");

    Ok(Subject {
        id: credential.id.clone(),
        email: credential.email.clone(),
    })
}
