use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use crate::identity::application::domain::entities::Role;
use crate::identity::application::ports::outgoing::account_repository::{
    AccountRepository, AccountRepositoryError, AccountResult, CreateAccountData, ProfileChanges,
};

use super::sea_orm_entity::accounts::{
    ActiveModel as AccountActiveModel, Entity as AccountEntity, Model as AccountModel,
};

#[derive(Clone, Debug)]
pub struct AccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_account_result(model: AccountModel) -> AccountResult {
        AccountResult {
            id: model.id,
            name: model.name,
            email: model.email,
            // Single-role deployment; unknown strings collapse to User.
            role: Role::parse(&model.role).unwrap_or(Role::User),
            is_active: model.is_active,
        }
    }

    fn map_insert_error(e: sea_orm::DbErr) -> AccountRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return AccountRepositoryError::EmailAlreadyExists;
        }
        AccountRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryPostgres {
    async fn create_account(
        &self,
        data: CreateAccountData,
    ) -> Result<AccountResult, AccountRepositoryError> {
        let active_account = AccountActiveModel {
            id: NotSet,
            name: Set(data.name),
            email: Set(data.email),
            role: Set(data.role.as_str().to_string()),
            password_hash: Set(data.password_hash),
            is_active: Set(false),
            activation_token: Set(Some(data.activation_token)),
            is_deleted: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_account
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(Self::map_to_account_result(inserted))
    }

    async fn activate_account(&self, account_id: i32) -> Result<(), AccountRepositoryError> {
        let account = AccountEntity::find_by_id(account_id)
            .one(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AccountRepositoryError::AccountNotFound)?;

        let mut active_account: AccountActiveModel = account.into();
        // Activation consumes the token in the same update.
        active_account.is_active = Set(true);
        active_account.activation_token = Set(None);

        active_account
            .update(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn update_profile(
        &self,
        account_id: i32,
        changes: ProfileChanges,
    ) -> Result<AccountResult, AccountRepositoryError> {
        let account = AccountEntity::find_by_id(account_id)
            .one(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AccountRepositoryError::AccountNotFound)?;

        let mut active_account: AccountActiveModel = account.into();
        if let Some(name) = changes.name {
            active_account.name = Set(name);
        }
        if let Some(email) = changes.email {
            active_account.email = Set(email);
        }

        let updated = active_account
            .update(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(Self::map_to_account_result(updated))
    }

    async fn soft_delete_account(&self, account_id: i32) -> Result<(), AccountRepositoryError> {
        let account = AccountEntity::find_by_id(account_id)
            .one(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AccountRepositoryError::AccountNotFound)?;

        let mut active_account: AccountActiveModel = account.into();
        active_account.is_deleted = Set(true);

        active_account
            .update(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
