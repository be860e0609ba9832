use async_trait::async_trait;

use crate::identity::application::domain::entities::Account;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the credential store. Every lookup excludes soft-deleted
/// rows; deleted accounts are invisible to the identity flows.
#[async_trait]
pub trait AccountQuery: Send + Sync {
    async fn find_by_id(&self, account_id: i32) -> Result<Option<Account>, AccountQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError>;
    async fn find_by_activation_token(
        &self,
        token: &str,
    ) -> Result<Option<Account>, AccountQueryError>;
}
