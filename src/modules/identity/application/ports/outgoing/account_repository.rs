use async_trait::async_trait;
use std::fmt;

use crate::identity::application::domain::entities::Role;

#[derive(Debug, Clone)]
pub struct CreateAccountData {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub activation_token: String,
}

/// Only the supplied fields are written; `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AccountResult {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub enum AccountRepositoryError {
    /// Storage-level unique violation on the email column. The partial
    /// unique index is the authoritative duplicate guard; the in-core
    /// existence check is only an optimization.
    EmailAlreadyExists,
    AccountNotFound,
    DatabaseError(String),
}

impl fmt::Display for AccountRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountRepositoryError::EmailAlreadyExists => write!(f, "Email already exists"),
            AccountRepositoryError::AccountNotFound => write!(f, "Account not found"),
            AccountRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for AccountRepositoryError {}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create_account(
        &self,
        data: CreateAccountData,
    ) -> Result<AccountResult, AccountRepositoryError>;

    /// Flips `is_active` and clears the activation token in one update.
    async fn activate_account(&self, account_id: i32) -> Result<(), AccountRepositoryError>;

    async fn update_profile(
        &self,
        account_id: i32,
        changes: ProfileChanges,
    ) -> Result<AccountResult, AccountRepositoryError>;

    async fn soft_delete_account(&self, account_id: i32) -> Result<(), AccountRepositoryError>;
}
