use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::catalog::application::ports::outgoing::{
    ProductQuery, ProductQueryError, ProductRepository, ProductRepositoryError, UpdateProductData,
};
use crate::catalog::domain::entities::Product;
use crate::catalog::domain::ownership::{authorize, OwnershipDecision};

#[derive(Debug, Clone)]
pub struct UpdateProductInput {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub is_available: bool,
}

#[derive(Debug, Clone)]
pub enum UpdateProductError {
    /// Absent, deleted, or owned by someone else - masked identically.
    NotFound,
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for UpdateProductError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateProductError::NotFound => write!(f, "Product not found"),
            UpdateProductError::QueryError(msg) => write!(f, "Query error: {}", msg),
            UpdateProductError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateProductError {}

#[async_trait]
pub trait IUpdateProductUseCase: Send + Sync {
    async fn execute(
        &self,
        principal_account_id: i32,
        product_id: i32,
        input: UpdateProductInput,
    ) -> Result<Product, UpdateProductError>;
}

pub struct UpdateProductUseCase<Q, R>
where
    Q: ProductQuery,
    R: ProductRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateProductUseCase<Q, R>
where
    Q: ProductQuery,
    R: ProductRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IUpdateProductUseCase for UpdateProductUseCase<Q, R>
where
    Q: ProductQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal_account_id: i32,
        product_id: i32,
        input: UpdateProductInput,
    ) -> Result<Product, UpdateProductError> {
        // Fetch-then-guard: the ownership check runs against the stored
        // creator, never anything the caller supplied.
        let existing = self
            .query
            .find_by_id(product_id)
            .await
            .map_err(|e| match e {
                ProductQueryError::DatabaseError(msg) => UpdateProductError::QueryError(msg),
            })?
            .ok_or(UpdateProductError::NotFound)?;

        if authorize(principal_account_id, &existing) == OwnershipDecision::Denied {
            return Err(UpdateProductError::NotFound);
        }

        self.repository
            .update_product(
                product_id,
                UpdateProductData {
                    name: input.name,
                    description: input.description,
                    price: input.price,
                    is_available: input.is_available,
                },
            )
            .await
            .map_err(|e| match e {
                ProductRepositoryError::NotFound => UpdateProductError::NotFound,
                ProductRepositoryError::DatabaseError(msg) => {
                    UpdateProductError::RepositoryError(msg)
                }
            })
    }
}
