use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};

use crate::email::application::ports::outgoing::AccountNotifier;
use crate::identity::application::domain::entities::Role;
use crate::identity::application::ports::outgoing::{
    AccountQuery, AccountRepository, AccountRepositoryError, CreateAccountData, TokenProvider,
};
use crate::identity::application::services::hash::PasswordHashingService;
use crate::identity::application::services::token::TokenService;

// ========================= Register Request =========================
/// Validated registration request - deserializable directly from JSON.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    name: String,
    email: String,    // Private - guaranteed valid and normalized
    password: String, // Private - guaranteed non-trivial
}

#[derive(Debug, Clone)]
pub enum RegisterRequestError {
    EmptyName,
    EmptyEmail,
    InvalidEmailFormat,
    WeakPassword,
}

impl std::fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterRequestError::EmptyName => write!(f, "Name cannot be empty"),
            RegisterRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            RegisterRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            RegisterRequestError::WeakPassword => {
                write!(f, "Password must be at least 8 characters")
            }
        }
    }
}

impl std::error::Error for RegisterRequestError {}

impl RegisterRequest {
    pub fn new(
        name: String,
        email: String,
        password: String,
    ) -> Result<Self, RegisterRequestError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(RegisterRequestError::EmptyName);
        }

        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(RegisterRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        if password.len() < 8 {
            return Err(RegisterRequestError::WeakPassword);
        }

        Ok(Self {
            name,
            email,
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for RegisterRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RegisterRequestHelper {
            name: String,
            email: String,
            password: String,
        }

        let helper = RegisterRequestHelper::deserialize(deserializer)?;
        RegisterRequest::new(helper.name, helper.email, helper.password)
            .map_err(serde::de::Error::custom)
    }
}

// ====================== Register Error =============================
#[derive(Debug, Clone)]
pub enum RegisterAccountError {
    DuplicateEmail,
    HashingFailed(String),
    /// The confirmation email could not be dispatched; the account was not
    /// committed.
    NotificationError(String),
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for RegisterAccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterAccountError::DuplicateEmail => write!(f, "Email already registered"),
            RegisterAccountError::HashingFailed(msg) => write!(f, "Hashing failed: {}", msg),
            RegisterAccountError::NotificationError(msg) => {
                write!(f, "Confirmation email failed: {}", msg)
            }
            RegisterAccountError::QueryError(msg) => write!(f, "Query error: {}", msg),
            RegisterAccountError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterAccountError {}

// ====================== Register Output =============================
#[derive(Debug, Clone, serde::Serialize)]
pub struct RegisterAccountOutput {
    pub account_id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
}

// ====================== Register Use Case ===========================
#[async_trait]
pub trait IRegisterAccountUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RegisterRequest,
    ) -> Result<RegisterAccountOutput, RegisterAccountError>;
}

pub struct RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: PasswordHashingService,
    token_service: TokenService,
    notifier: Arc<dyn AccountNotifier + Send + Sync>,
}

impl<Q, R> RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: PasswordHashingService,
        token_service: TokenService,
        notifier: Arc<dyn AccountNotifier + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_service,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterAccountUseCase for RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RegisterRequest,
    ) -> Result<RegisterAccountOutput, RegisterAccountError> {
        // 1️⃣ **Check for an existing non-deleted account with this email.**
        // The partial unique index remains the authoritative guard; this
        // check only gives the common case a friendlier path.
        let existing = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| RegisterAccountError::QueryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterAccountError::DuplicateEmail);
        }

        // 2️⃣ **Hash password**
        let password_hash = self
            .password_hasher
            .hash_password(request.password().to_string())
            .await
            .map_err(RegisterAccountError::HashingFailed)?;

        // 3️⃣ **Mint the one-time activation token**
        let activation_token = self.token_service.mint_activation_token();

        // 4️⃣ **Dispatch the confirmation email before committing.**
        // An account must never exist in pending state with no way for its
        // owner to receive the activation token, so a sink failure aborts
        // the whole attempt.
        self.notifier
            .send_confirmation_email(request.email(), request.name(), &activation_token)
            .await
            .map_err(|e| RegisterAccountError::NotificationError(e.to_string()))?;

        // 5️⃣ **Persist in pending-activation state**
        match self
            .repository
            .create_account(CreateAccountData {
                name: request.name().to_string(),
                email: request.email().to_string(),
                password_hash,
                role: Role::User,
                activation_token,
            })
            .await
        {
            Ok(account) => Ok(RegisterAccountOutput {
                account_id: account.id,
                name: account.name,
                email: account.email,
                message:
                    "Account created. Please check your email to confirm your account."
                        .to_string(),
            }),
            // Lost a registration race; the index already holds the row.
            Err(AccountRepositoryError::EmailAlreadyExists) => {
                Err(RegisterAccountError::DuplicateEmail)
            }
            Err(e) => Err(RegisterAccountError::RepositoryError(e.to_string())),
        }
    }
}
