use async_trait::async_trait;

use crate::identity::application::ports::outgoing::{
    AccountQuery, AccountRepository, AccountRepositoryError,
};

#[derive(Debug, Clone)]
pub enum ConfirmEmailError {
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for ConfirmEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfirmEmailError::QueryError(msg) => write!(f, "Query error: {}", msg),
            ConfirmEmailError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ConfirmEmailError {}

/// Consumes a one-time activation token.
///
/// Returns `Ok(true)` when the matching pending account was activated, and
/// `Ok(false)` - silently, with no detail - when the token matches nothing
/// or was already consumed. Callers learn nothing about which case they hit.
#[async_trait]
pub trait IConfirmEmailUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<bool, ConfirmEmailError>;
}

pub struct ConfirmEmailUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> ConfirmEmailUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IConfirmEmailUseCase for ConfirmEmailUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<bool, ConfirmEmailError> {
        if token.is_empty() {
            return Ok(false);
        }

        let account = self
            .query
            .find_by_activation_token(token)
            .await
            .map_err(|e| ConfirmEmailError::QueryError(e.to_string()))?;

        let account = match account {
            Some(account) => account,
            None => return Ok(false),
        };

        // Tokens are single-use; an already-active account means this one
        // was consumed (or never cleared) and must not activate again.
        if account.is_active {
            return Ok(false);
        }

        // Activation and token clearing happen in the same update.
        match self.repository.activate_account(account.id).await {
            Ok(()) => Ok(true),
            Err(AccountRepositoryError::AccountNotFound) => Ok(false),
            Err(e) => Err(ConfirmEmailError::RepositoryError(e.to_string())),
        }
    }
}
