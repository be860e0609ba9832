use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Uuid;

use super::token_config::TokenConfig;
use crate::identity::application::domain::entities::Role;
use crate::identity::application::ports::outgoing::token_provider::{
    IdentityClaims, TokenError, TokenProvider,
};

/// Issues and verifies the two token kinds of the identity domain:
/// signed identity tokens (HS256) and random one-time activation tokens.
#[derive(Clone)]
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Initialize the service with config; keys are derived once.
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for TokenService {
    fn issue_identity_token(
        &self,
        account_id: i32,
        name: &str,
        role: Role,
    ) -> Result<String, TokenError> {
        let expiration = Utc::now() + Duration::seconds(self.config.token_expiry);
        let claims = IdentityClaims {
            sub: account_id.to_string(),
            name: name.to_string(),
            role: role.as_str().to_string(),
            jti: Uuid::new_v4().to_string(),
            exp: expiration.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    fn verify_identity_token(&self, token: &str) -> Result<IdentityClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);

        let decoded = decode::<IdentityClaims>(token, &self.decoding_key, &validation).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            },
        )?;

        Ok(decoded.claims)
    }

    fn mint_activation_token(&self) -> String {
        // 256 bits from the OS RNG, URL-safe so the confirmation link
        // needs no escaping.
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }
}
