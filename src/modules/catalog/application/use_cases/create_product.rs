use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::catalog::application::ports::outgoing::{
    CreateProductData, ProductRepository, ProductRepositoryError,
};
use crate::catalog::domain::entities::Product;

/// Carries no creator field on purpose: the creator is always stamped from
/// the authenticated principal, never from the payload.
#[derive(Debug, Clone)]
pub struct CreateProductInput {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub is_available: bool,
}

#[derive(Debug, Clone)]
pub enum CreateProductError {
    RepositoryError(String),
}

impl std::fmt::Display for CreateProductError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateProductError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreateProductError {}

#[async_trait]
pub trait ICreateProductUseCase: Send + Sync {
    async fn execute(
        &self,
        principal_account_id: i32,
        input: CreateProductInput,
    ) -> Result<Product, CreateProductError>;
}

pub struct CreateProductUseCase<R>
where
    R: ProductRepository,
{
    repository: R,
}

impl<R> CreateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateProductUseCase for CreateProductUseCase<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal_account_id: i32,
        input: CreateProductInput,
    ) -> Result<Product, CreateProductError> {
        self.repository
            .create_product(CreateProductData {
                name: input.name,
                description: input.description,
                price: input.price,
                is_available: input.is_available,
                creator_account_id: principal_account_id,
            })
            .await
            .map_err(|e| match e {
                ProductRepositoryError::DatabaseError(msg) => {
                    CreateProductError::RepositoryError(msg)
                }
                other => CreateProductError::RepositoryError(other.to_string()),
            })
    }
}
