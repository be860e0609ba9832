use async_trait::async_trait;

use crate::identity::application::domain::entities::AccountView;
use crate::identity::application::ports::outgoing::AccountQuery;

#[derive(Debug, Clone)]
pub enum FetchAccountError {
    NotFound,
    QueryError(String),
}

impl std::fmt::Display for FetchAccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchAccountError::NotFound => write!(f, "Account not found"),
            FetchAccountError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for FetchAccountError {}

/// Returns the redacted account view; deleted and absent accounts are both
/// `NotFound`.
#[async_trait]
pub trait IFetchAccountUseCase: Send + Sync {
    async fn execute(&self, account_id: i32) -> Result<AccountView, FetchAccountError>;
}

pub struct FetchAccountUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchAccountUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchAccountUseCase for FetchAccountUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(&self, account_id: i32) -> Result<AccountView, FetchAccountError> {
        let account = self
            .query
            .find_by_id(account_id)
            .await
            .map_err(|e| FetchAccountError::QueryError(e.to_string()))?
            .ok_or(FetchAccountError::NotFound)?;

        Ok(AccountView::from(account))
    }
}
