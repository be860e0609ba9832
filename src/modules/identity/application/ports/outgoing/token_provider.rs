use serde::{Deserialize, Serialize};

use crate::identity::application::domain::entities::Role;

/// Claim set carried by a signed identity token. Every field is part of the
/// cross-service contract; a compatible verifier checks all of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Account id, string-encoded.
    pub sub: String,
    pub name: String,
    pub role: String,
    /// Unique per issuance.
    pub jti: String,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

impl IdentityClaims {
    /// Parses the subject claim back into an account id.
    pub fn account_id(&self) -> Result<i32, TokenError> {
        self.sub
            .parse::<i32>()
            .map_err(|_| TokenError::Invalid(format!("malformed subject claim: {}", self.sub)))
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,
    #[error("Invalid token: {0}")]
    Invalid(String),
    #[error("Token signing failed: {0}")]
    SigningFailed(String),
}

/// Outgoing port for token issuance and verification, so web extractors and
/// use cases can run against a fake in tests.
pub trait TokenProvider: Send + Sync {
    fn issue_identity_token(
        &self,
        account_id: i32,
        name: &str,
        role: Role,
    ) -> Result<String, TokenError>;

    fn verify_identity_token(&self, token: &str) -> Result<IdentityClaims, TokenError>;

    /// One-time random activation token; opaque, no expiry.
    fn mint_activation_token(&self) -> String;
}
