use async_trait::async_trait;

use crate::identity::application::ports::outgoing::{AccountRepository, AccountRepositoryError};

#[derive(Debug, Clone)]
pub enum SoftDeleteAccountError {
    NotFound,
    RepositoryError(String),
}

impl std::fmt::Display for SoftDeleteAccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoftDeleteAccountError::NotFound => write!(f, "Account not found"),
            SoftDeleteAccountError::RepositoryError(msg) => {
                write!(f, "Repository error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SoftDeleteAccountError {}

/// Marks the account deleted. Deletion is terminal: there is no restore
/// path, and repeating the call on an already-deleted account succeeds
/// silently. `NotFound` only fires when the account never existed.
#[async_trait]
pub trait ISoftDeleteAccountUseCase: Send + Sync {
    async fn execute(&self, account_id: i32) -> Result<(), SoftDeleteAccountError>;
}

pub struct SoftDeleteAccountUseCase<R>
where
    R: AccountRepository + Send + Sync,
{
    repository: R,
}

impl<R> SoftDeleteAccountUseCase<R>
where
    R: AccountRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ISoftDeleteAccountUseCase for SoftDeleteAccountUseCase<R>
where
    R: AccountRepository + Send + Sync,
{
    async fn execute(&self, account_id: i32) -> Result<(), SoftDeleteAccountError> {
        self.repository
            .soft_delete_account(account_id)
            .await
            .map_err(|e| match e {
                AccountRepositoryError::AccountNotFound => SoftDeleteAccountError::NotFound,
                other => SoftDeleteAccountError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::application::ports::outgoing::{
        AccountResult, CreateAccountData, ProfileChanges,
    };
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockAccountRepository {
        deleted: Arc<Mutex<Vec<i32>>>,
        fail_with: Option<AccountRepositoryError>,
    }

    #[async_trait]
    impl AccountRepository for MockAccountRepository {
        async fn create_account(
            &self,
            _data: CreateAccountData,
        ) -> Result<AccountResult, AccountRepositoryError> {
            unimplemented!()
        }

        async fn activate_account(&self, _account_id: i32) -> Result<(), AccountRepositoryError> {
            unimplemented!()
        }

        async fn update_profile(
            &self,
            _account_id: i32,
            _changes: ProfileChanges,
        ) -> Result<AccountResult, AccountRepositoryError> {
            unimplemented!()
        }

        async fn soft_delete_account(
            &self,
            account_id: i32,
        ) -> Result<(), AccountRepositoryError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            self.deleted.lock().unwrap().push(account_id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_soft_delete_success_and_repeat() {
        let repository = MockAccountRepository::default();
        let use_case = SoftDeleteAccountUseCase::new(repository.clone());

        assert!(use_case.execute(4).await.is_ok());
        // Second call still succeeds; the adapter just rewrites the flag.
        assert!(use_case.execute(4).await.is_ok());
        assert_eq!(*repository.deleted.lock().unwrap(), vec![4, 4]);
    }

    #[tokio::test]
    async fn test_soft_delete_unknown_account() {
        let repository = MockAccountRepository {
            deleted: Arc::new(Mutex::new(vec![])),
            fail_with: Some(AccountRepositoryError::AccountNotFound),
        };
        let use_case = SoftDeleteAccountUseCase::new(repository);

        assert!(matches!(
            use_case.execute(99).await,
            Err(SoftDeleteAccountError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_soft_delete_database_error() {
        let repository = MockAccountRepository {
            deleted: Arc::new(Mutex::new(vec![])),
            fail_with: Some(AccountRepositoryError::DatabaseError(
                "update failed".to_string(),
            )),
        };
        let use_case = SoftDeleteAccountUseCase::new(repository);

        assert!(matches!(
            use_case.execute(4).await,
            Err(SoftDeleteAccountError::RepositoryError(_))
        ));
    }
}
