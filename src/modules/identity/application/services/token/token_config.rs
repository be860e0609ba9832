use std::env;

/// Fixed issuer/audience pair. Tokens minted here are only honored by the
/// catalog side, and only when both names match on verification.
pub const TOKEN_ISSUER: &str = "commerce-identity";
pub const TOKEN_AUDIENCE: &str = "commerce-catalog";

#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub secret_key: String,
    pub issuer: String,
    pub audience: String,
    pub token_expiry: i64, // Expiration in seconds
}

impl TokenConfig {
    /// Load token configuration from environment variables.
    ///
    /// A missing signing key is a fatal configuration error at startup,
    /// never a per-request failure.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let token_expiry = env::var("JWT_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "3600".to_string()) // Default 1 hour
            .parse::<i64>()
            .expect("Invalid JWT_TOKEN_EXPIRY value");

        Self {
            secret_key,
            issuer: String::from(TOKEN_ISSUER),
            audience: String::from(TOKEN_AUDIENCE),
            token_expiry,
        }
    }
}
