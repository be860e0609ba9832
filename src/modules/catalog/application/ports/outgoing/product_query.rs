use async_trait::async_trait;

use crate::catalog::domain::entities::Product;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProductQuery: Send + Sync {
    /// Returns the row even when soft-deleted; the ownership guard decides
    /// what the caller may see.
    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, ProductQueryError>;

    /// Lists only the given creator's live products. Filtering happens in
    /// the query itself so other owners' rows are never materialized.
    async fn list_by_creator(
        &self,
        creator_account_id: i32,
    ) -> Result<Vec<Product>, ProductQueryError>;
}
