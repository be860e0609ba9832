use async_trait::async_trait;
use rust_decimal::Decimal;
use std::fmt;

use crate::catalog::domain::entities::Product;

#[derive(Debug, Clone)]
pub struct CreateProductData {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub is_available: bool,
    pub creator_account_id: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateProductData {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub is_available: bool,
}

#[derive(Debug, Clone)]
pub enum ProductRepositoryError {
    NotFound,
    DatabaseError(String),
}

impl fmt::Display for ProductRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductRepositoryError::NotFound => write!(f, "Product not found"),
            ProductRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ProductRepositoryError {}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<Product, ProductRepositoryError>;

    async fn update_product(
        &self,
        product_id: i32,
        data: UpdateProductData,
    ) -> Result<Product, ProductRepositoryError>;

    async fn soft_delete_product(&self, product_id: i32) -> Result<(), ProductRepositoryError>;
}
