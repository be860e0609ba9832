use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::catalog::application::ports::outgoing::{
    CreateProductData, ProductQuery, ProductQueryError, ProductRepository,
    ProductRepositoryError, UpdateProductData,
};
use crate::catalog::domain::entities::Product;
use crate::email::application::ports::outgoing::{
    AccountNotificationError, AccountNotifier, EmailSender,
};
use crate::identity::application::domain::entities::Account;
use crate::identity::application::ports::outgoing::{
    AccountQuery, AccountQueryError, AccountRepository, AccountRepositoryError, AccountResult,
    CreateAccountData, ProfileChanges,
};

/// In-memory credential store standing in for the postgres adapters. The
/// create path enforces email uniqueness among non-deleted rows, mirroring
/// the partial unique index.
#[derive(Clone, Default)]
pub struct InMemoryAccountStore {
    inner: Arc<Mutex<AccountRows>>,
}

#[derive(Default)]
struct AccountRows {
    rows: Vec<Account>,
    next_id: i32,
}

impl InMemoryAccountStore {
    pub fn snapshot(&self, account_id: i32) -> Option<Account> {
        self.inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|a| a.id == account_id)
            .cloned()
    }
}

#[async_trait]
impl AccountQuery for InMemoryAccountStore {
    async fn find_by_id(&self, account_id: i32) -> Result<Option<Account>, AccountQueryError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|a| a.id == account_id && !a.is_deleted)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|a| a.email == email && !a.is_deleted)
            .cloned())
    }

    async fn find_by_activation_token(
        &self,
        token: &str,
    ) -> Result<Option<Account>, AccountQueryError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|a| a.activation_token.as_deref() == Some(token) && !a.is_deleted)
            .cloned())
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountStore {
    async fn create_account(
        &self,
        data: CreateAccountData,
    ) -> Result<AccountResult, AccountRepositoryError> {
        let mut inner = self.inner.lock().unwrap();

        if inner
            .rows
            .iter()
            .any(|a| a.email == data.email && !a.is_deleted)
        {
            return Err(AccountRepositoryError::EmailAlreadyExists);
        }

        inner.next_id += 1;
        let account = Account {
            id: inner.next_id,
            name: data.name,
            email: data.email,
            role: data.role,
            password_hash: data.password_hash,
            is_active: false,
            activation_token: Some(data.activation_token),
            is_deleted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let result = AccountResult {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role,
            is_active: false,
        };
        inner.rows.push(account);
        Ok(result)
    }

    async fn activate_account(&self, account_id: i32) -> Result<(), AccountRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let account = inner
            .rows
            .iter_mut()
            .find(|a| a.id == account_id)
            .ok_or(AccountRepositoryError::AccountNotFound)?;

        account.is_active = true;
        account.activation_token = None;
        Ok(())
    }

    async fn update_profile(
        &self,
        account_id: i32,
        changes: ProfileChanges,
    ) -> Result<AccountResult, AccountRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let account = inner
            .rows
            .iter_mut()
            .find(|a| a.id == account_id)
            .ok_or(AccountRepositoryError::AccountNotFound)?;

        if let Some(name) = changes.name {
            account.name = name;
        }
        if let Some(email) = changes.email {
            account.email = email;
        }

        Ok(AccountResult {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role,
            is_active: account.is_active,
        })
    }

    async fn soft_delete_account(&self, account_id: i32) -> Result<(), AccountRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let account = inner
            .rows
            .iter_mut()
            .find(|a| a.id == account_id)
            .ok_or(AccountRepositoryError::AccountNotFound)?;

        account.is_deleted = true;
        Ok(())
    }
}

/// In-memory product store covering both catalog ports.
#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    inner: Arc<Mutex<ProductRows>>,
}

#[derive(Default)]
struct ProductRows {
    rows: Vec<Product>,
    next_id: i32,
}

#[async_trait]
impl ProductQuery for InMemoryProductStore {
    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, ProductQueryError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|p| p.id == product_id)
            .cloned())
    }

    async fn list_by_creator(
        &self,
        creator_account_id: i32,
    ) -> Result<Vec<Product>, ProductQueryError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|p| p.creator_account_id == creator_account_id && !p.is_deleted)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductStore {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let product = Product {
            id: inner.next_id,
            name: data.name,
            description: data.description,
            price: data.price,
            is_available: data.is_available,
            creator_account_id: data.creator_account_id,
            is_deleted: false,
            created_at: Utc::now(),
        };
        inner.rows.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        product_id: i32,
        data: UpdateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let product = inner
            .rows
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or(ProductRepositoryError::NotFound)?;

        product.name = data.name;
        product.description = data.description;
        product.price = data.price;
        product.is_available = data.is_available;
        Ok(product.clone())
    }

    async fn soft_delete_product(&self, product_id: i32) -> Result<(), ProductRepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let product = inner
            .rows
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or(ProductRepositoryError::NotFound)?;

        product.is_deleted = true;
        Ok(())
    }
}

/// Captures every confirmation email instead of sending anything.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>, // (recipient, activation token)
}

impl RecordingNotifier {
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_token(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, t)| t.clone())
    }
}

#[async_trait]
impl AccountNotifier for RecordingNotifier {
    async fn send_confirmation_email(
        &self,
        to: &str,
        _name: &str,
        activation_token: &str,
    ) -> Result<(), AccountNotificationError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), activation_token.to_string()));
        Ok(())
    }
}

/// EmailSender that always fails; used to drive the notification-rollback
/// scenario through the real AccountEmailService.
pub struct FailingEmailSender;

#[async_trait]
impl EmailSender for FailingEmailSender {
    async fn send_email(&self, _to: &str, _subject: &str, _body: &str) -> Result<(), String> {
        Err("SMTP unreachable".to_string())
    }
}
