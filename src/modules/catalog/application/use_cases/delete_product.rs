use async_trait::async_trait;

use crate::catalog::application::ports::outgoing::{
    ProductQuery, ProductQueryError, ProductRepository, ProductRepositoryError,
};
use crate::catalog::domain::ownership::{authorize, OwnershipDecision};

#[derive(Debug, Clone)]
pub enum DeleteProductError {
    NotFound,
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for DeleteProductError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteProductError::NotFound => write!(f, "Product not found"),
            DeleteProductError::QueryError(msg) => write!(f, "Query error: {}", msg),
            DeleteProductError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteProductError {}

#[async_trait]
pub trait IDeleteProductUseCase: Send + Sync {
    async fn execute(
        &self,
        principal_account_id: i32,
        product_id: i32,
    ) -> Result<(), DeleteProductError>;
}

pub struct DeleteProductUseCase<Q, R>
where
    Q: ProductQuery,
    R: ProductRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteProductUseCase<Q, R>
where
    Q: ProductQuery,
    R: ProductRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IDeleteProductUseCase for DeleteProductUseCase<Q, R>
where
    Q: ProductQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal_account_id: i32,
        product_id: i32,
    ) -> Result<(), DeleteProductError> {
        let product = self
            .query
            .find_by_id(product_id)
            .await
            .map_err(|e| match e {
                ProductQueryError::DatabaseError(msg) => DeleteProductError::QueryError(msg),
            })?
            .ok_or(DeleteProductError::NotFound)?;

        // Already-deleted rows are denied here too, which makes a repeated
        // delete look like a missing product.
        if authorize(principal_account_id, &product) == OwnershipDecision::Denied {
            return Err(DeleteProductError::NotFound);
        }

        self.repository
            .soft_delete_product(product_id)
            .await
            .map_err(|e| match e {
                ProductRepositoryError::NotFound => DeleteProductError::NotFound,
                ProductRepositoryError::DatabaseError(msg) => {
                    DeleteProductError::RepositoryError(msg)
                }
            })
    }
}
