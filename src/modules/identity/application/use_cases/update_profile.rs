use async_trait::async_trait;

use crate::identity::application::ports::outgoing::{
    AccountQuery, AccountRepository, AccountRepositoryError, AccountResult, ProfileChanges,
};

#[derive(Debug, Clone)]
pub struct UpdateProfileInput {
    pub account_id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub enum UpdateProfileError {
    NotFound,
    NothingToUpdate,
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for UpdateProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateProfileError::NotFound => write!(f, "Account not found"),
            UpdateProfileError::NothingToUpdate => write!(f, "No fields supplied"),
            UpdateProfileError::QueryError(msg) => write!(f, "Query error: {}", msg),
            UpdateProfileError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateProfileError {}

/// Overwrites only the supplied fields; everything else is untouched.
#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(&self, input: UpdateProfileInput)
        -> Result<AccountResult, UpdateProfileError>;
}

pub struct UpdateProfileUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateProfileUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IUpdateProfileUseCase for UpdateProfileUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: UpdateProfileInput,
    ) -> Result<AccountResult, UpdateProfileError> {
        if input.name.is_none() && input.email.is_none() {
            return Err(UpdateProfileError::NothingToUpdate);
        }

        // Deleted accounts are invisible to the query, so they 404 here.
        let existing = self
            .query
            .find_by_id(input.account_id)
            .await
            .map_err(|e| UpdateProfileError::QueryError(e.to_string()))?;
        if existing.is_none() {
            return Err(UpdateProfileError::NotFound);
        }

        self.repository
            .update_profile(
                input.account_id,
                ProfileChanges {
                    name: input.name,
                    email: input.email,
                },
            )
            .await
            .map_err(|e| match e {
                AccountRepositoryError::AccountNotFound => UpdateProfileError::NotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::application::domain::entities::{Account, Role};
    use crate::identity::application::ports::outgoing::{AccountQueryError, CreateAccountData};
    use std::sync::{Arc, Mutex};

    struct MockAccountQuery {
        account: Option<Account>,
    }

    #[async_trait]
    impl AccountQuery for MockAccountQuery {
        async fn find_by_id(&self, account_id: i32) -> Result<Option<Account>, AccountQueryError> {
            Ok(self
                .account
                .clone()
                .filter(|a| a.id == account_id && !a.is_deleted))
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<Account>, AccountQueryError> {
            Ok(None)
        }

        async fn find_by_activation_token(
            &self,
            _token: &str,
        ) -> Result<Option<Account>, AccountQueryError> {
            Ok(None)
        }
    }

    #[derive(Clone, Default)]
    struct MockAccountRepository {
        applied: Arc<Mutex<Option<ProfileChanges>>>,
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
            account_id: i32,
            changes: ProfileChanges,
        ) -> Result<AccountResult, AccountRepositoryError> {
            let result = AccountResult {
                id: account_id,
                name: changes.name.clone().unwrap_or_else(|| "Ann".to_string()),
                email: changes
                    .email
                    .clone()
                    .unwrap_or_else(|| "ann@example.com".to_string()),
                role: Role::User,
                is_active: true,
            };
            *self.applied.lock().unwrap() = Some(changes);
            Ok(result)
        }

        async fn soft_delete_account(
            &self,
            _account_id: i32,
        ) -> Result<(), AccountRepositoryError> {
            unimplemented!()
        }
    }

    fn account(is_deleted: bool) -> Account {
        Account {
            id: 3,
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            role: Role::User,
            password_hash: "hashed".to_string(),
            is_active: true,
            activation_token: None,
            is_deleted,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_update_partial_fields_only() {
        let repository = MockAccountRepository::default();
        let use_case = UpdateProfileUseCase::new(
            MockAccountQuery {
                account: Some(account(false)),
            },
            repository.clone(),
        );

        let result = use_case
            .execute(UpdateProfileInput {
                account_id: 3,
                name: Some("Ann Lee".to_string()),
                email: None,
            })
            .await
            .unwrap();

        assert_eq!(result.name, "Ann Lee");
        assert_eq!(result.email, "ann@example.com");

        let applied = repository.applied.lock().unwrap().clone().unwrap();
        assert_eq!(applied.name.as_deref(), Some("Ann Lee"));
        assert!(applied.email.is_none(), "email must be left untouched");
    }

    #[tokio::test]
    async fn test_update_missing_account_not_found() {
        let use_case = UpdateProfileUseCase::new(
            MockAccountQuery { account: None },
            MockAccountRepository::default(),
        );

        let result = use_case
            .execute(UpdateProfileInput {
                account_id: 3,
                name: Some("Ann Lee".to_string()),
                email: None,
            })
            .await;

        assert!(matches!(result, Err(UpdateProfileError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_deleted_account_not_found() {
        let use_case = UpdateProfileUseCase::new(
            MockAccountQuery {
                account: Some(account(true)),
            },
            MockAccountRepository::default(),
        );

        let result = use_case
            .execute(UpdateProfileInput {
                account_id: 3,
                name: Some("Ann Lee".to_string()),
                email: None,
            })
            .await;

        assert!(matches!(result, Err(UpdateProfileError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_with_no_fields_rejected() {
        let use_case = UpdateProfileUseCase::new(
            MockAccountQuery {
                account: Some(account(false)),
            },
            MockAccountRepository::default(),
        );

        let result = use_case
            .execute(UpdateProfileInput {
                account_id: 3,
                name: None,
                email: None,
            })
            .await;

        assert!(matches!(result, Err(UpdateProfileError::NothingToUpdate)));
    }
}
