use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer, Serialize};

use crate::identity::application::ports::outgoing::{AccountQuery, TokenProvider};
use crate::identity::application::services::hash::PasswordHashingService;
use crate::identity::application::services::token::TokenService;

// ========================= Login Request =========================
/// Validated login request - can be deserialized directly from JSON.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,    // Private - guaranteed valid
    password: String, // Private - guaranteed non-empty
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            LoginRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim().to_lowercase();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Authenticate Error =========================
#[derive(Debug, Clone)]
pub enum AuthenticateError {
    /// Unknown email, wrong password, or deleted account - indistinguishable
    /// on purpose.
    InvalidCredentials,
    /// Password matched but the email was never confirmed.
    AccountNotConfirmed,
    VerificationFailed(String),
    TokenIssueFailed(String),
    QueryError(String),
}

impl std::fmt::Display for AuthenticateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthenticateError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthenticateError::AccountNotConfirmed => {
                write!(f, "Account is not confirmed. Please check your email.")
            }
            AuthenticateError::VerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            AuthenticateError::TokenIssueFailed(msg) => {
                write!(f, "Token issuance failed: {}", msg)
            }
            AuthenticateError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for AuthenticateError {}

// ====================== Authenticate Response ======================
#[derive(Debug, Clone, Serialize)]
pub struct AccountInfo {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthenticateResponse {
    pub token: String,
    pub account: AccountInfo,
}

// ====================== Authenticate Use Case ======================
#[async_trait]
pub trait IAuthenticateUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest)
        -> Result<AuthenticateResponse, AuthenticateError>;
}

pub struct AuthenticateUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    query: Q,
    password_hasher: PasswordHashingService,
    token_service: TokenService,
}

impl<Q> AuthenticateUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: PasswordHashingService,
        token_service: TokenService,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_service,
        }
    }
}

#[async_trait]
impl<Q> IAuthenticateUseCase for AuthenticateUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(
        &self,
        request: LoginRequest,
    ) -> Result<AuthenticateResponse, AuthenticateError> {
        // 1️⃣ **Find account by email** - deleted accounts are invisible
        // here, so they fall into the unknown-email path below.
        let account = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| AuthenticateError::QueryError(e.to_string()))?;

        let account = match account {
            Some(account) => account,
            None => {
                // Equal-cost path: hashing burns the same bcrypt work a
                // verify would, so response time does not reveal whether
                // the email exists.
                let _ = self
                    .password_hasher
                    .hash_password(request.password().to_string())
                    .await;
                return Err(AuthenticateError::InvalidCredentials);
            }
        };

        // 2️⃣ **Verify password**
        let is_valid = self
            .password_hasher
            .verify_password(request.password().to_string(), account.password_hash.clone())
            .await
            .map_err(AuthenticateError::VerificationFailed)?;

        if !is_valid {
            return Err(AuthenticateError::InvalidCredentials);
        }

        // 3️⃣ **Require a confirmed email** - checked only after the hash
        // matched, so this error never leaks credentials validity.
        if !account.is_active {
            return Err(AuthenticateError::AccountNotConfirmed);
        }

        // 4️⃣ **Issue identity token**
        let token = self
            .token_service
            .issue_identity_token(account.id, &account.name, account.role)
            .map_err(|e| AuthenticateError::TokenIssueFailed(e.to_string()))?;

        Ok(AuthenticateResponse {
            token,
            account: AccountInfo {
                id: account.id,
                name: account.name,
                email: account.email,
                role: account.role.as_str().to_string(),
            },
        })
    }
}
