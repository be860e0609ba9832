use async_trait::async_trait;

use crate::catalog::application::ports::outgoing::{ProductQuery, ProductQueryError};
use crate::catalog::domain::entities::Product;

#[derive(Debug, Clone)]
pub enum ListProductsError {
    QueryError(String),
}

impl std::fmt::Display for ListProductsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListProductsError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ListProductsError {}

/// Lists the principal's own live products and nothing else.
#[async_trait]
pub trait IListProductsUseCase: Send + Sync {
    async fn execute(&self, principal_account_id: i32)
        -> Result<Vec<Product>, ListProductsError>;
}

pub struct ListProductsUseCase<Q>
where
    Q: ProductQuery,
{
    query: Q,
}

impl<Q> ListProductsUseCase<Q>
where
    Q: ProductQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListProductsUseCase for ListProductsUseCase<Q>
where
    Q: ProductQuery + Send + Sync,
{
    async fn execute(
        &self,
        principal_account_id: i32,
    ) -> Result<Vec<Product>, ListProductsError> {
        self.query
            .list_by_creator(principal_account_id)
            .await
            .map_err(|e| match e {
                ProductQueryError::DatabaseError(msg) => ListProductsError::QueryError(msg),
            })
    }
}
