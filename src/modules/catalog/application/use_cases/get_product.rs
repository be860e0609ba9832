use async_trait::async_trait;

use crate::catalog::application::ports::outgoing::{ProductQuery, ProductQueryError};
use crate::catalog::domain::entities::Product;
use crate::catalog::domain::ownership::{authorize, OwnershipDecision};

#[derive(Debug, Clone)]
pub enum GetProductError {
    /// Absent, deleted, or owned by someone else. Ownership denials are
    /// masked as not-found so other users' catalog never leaks.
    NotFound,
    QueryError(String),
}

impl std::fmt::Display for GetProductError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetProductError::NotFound => write!(f, "Product not found"),
            GetProductError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for GetProductError {}

#[async_trait]
pub trait IGetProductUseCase: Send + Sync {
    async fn execute(
        &self,
        principal_account_id: i32,
        product_id: i32,
    ) -> Result<Product, GetProductError>;
}

pub struct GetProductUseCase<Q>
where
    Q: ProductQuery,
{
    query: Q,
}

impl<Q> GetProductUseCase<Q>
where
    Q: ProductQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetProductUseCase for GetProductUseCase<Q>
where
    Q: ProductQuery + Send + Sync,
{
    async fn execute(
        &self,
        principal_account_id: i32,
        product_id: i32,
    ) -> Result<Product, GetProductError> {
        let product = self
            .query
            .find_by_id(product_id)
            .await
            .map_err(|e| match e {
                ProductQueryError::DatabaseError(msg) => GetProductError::QueryError(msg),
            })?
            .ok_or(GetProductError::NotFound)?;

        if authorize(principal_account_id, &product) == OwnershipDecision::Denied {
            return Err(GetProductError::NotFound);
        }

        Ok(product)
    }
}
