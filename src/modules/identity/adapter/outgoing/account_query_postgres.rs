use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::identity::application::domain::entities::{Account, Role};
use crate::identity::application::ports::outgoing::account_query::{
    AccountQuery, AccountQueryError,
};

use super::sea_orm_entity::accounts::{Column, Entity as AccountEntity, Model as AccountModel};

#[derive(Clone, Debug)]
pub struct AccountQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_account(model: AccountModel) -> Account {
        Account {
            id: model.id,
            name: model.name,
            email: model.email,
            role: Role::parse(&model.role).unwrap_or(Role::User),
            password_hash: model.password_hash,
            is_active: model.is_active,
            activation_token: model.activation_token,
            is_deleted: model.is_deleted,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

#[async_trait]
impl AccountQuery for AccountQueryPostgres {
    async fn find_by_id(&self, account_id: i32) -> Result<Option<Account>, AccountQueryError> {
        let model = AccountEntity::find()
            .filter(Column::Id.eq(account_id))
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Self::map_to_account))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError> {
        let model = AccountEntity::find()
            .filter(Column::Email.eq(email))
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Self::map_to_account))
    }

    async fn find_by_activation_token(
        &self,
        token: &str,
    ) -> Result<Option<Account>, AccountQueryError> {
        let model = AccountEntity::find()
            .filter(Column::ActivationToken.eq(token))
            .filter(Column::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Self::map_to_account))
    }
}
