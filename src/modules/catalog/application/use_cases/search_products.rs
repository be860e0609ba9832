use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::catalog::application::ports::outgoing::{ProductQuery, ProductQueryError};
use crate::catalog::domain::entities::Product;

#[derive(Debug, Clone, Default)]
pub struct ProductSearchFilter {
    /// Case-insensitive substring against name and description.
    pub query: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub is_available: Option<bool>,
}

#[derive(Debug, Clone)]
pub enum SearchProductsError {
    QueryError(String),
}

impl std::fmt::Display for SearchProductsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchProductsError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for SearchProductsError {}

/// Filters the principal's own products; the scope never widens past
/// `list_by_creator`.
#[async_trait]
pub trait ISearchProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        principal_account_id: i32,
        filter: ProductSearchFilter,
    ) -> Result<Vec<Product>, SearchProductsError>;
}

pub struct SearchProductsUseCase<Q>
where
    Q: ProductQuery,
{
    query: Q,
}

impl<Q> SearchProductsUseCase<Q>
where
    Q: ProductQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    fn matches(product: &Product, filter: &ProductSearchFilter) -> bool {
        if let Some(term) = &filter.query {
            let term = term.to_lowercase();
            let hit = product.name.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        if let Some(min) = filter.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = filter.max_price {
            if product.price > max {
                return false;
            }
        }
        if let Some(available) = filter.is_available {
            if product.is_available != available {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl<Q> ISearchProductsUseCase for SearchProductsUseCase<Q>
where
    Q: ProductQuery + Send + Sync,
{
    async fn execute(
        &self,
        principal_account_id: i32,
        filter: ProductSearchFilter,
    ) -> Result<Vec<Product>, SearchProductsError> {
        let products = self
            .query
            .list_by_creator(principal_account_id)
            .await
            .map_err(|e| match e {
                ProductQueryError::DatabaseError(msg) => SearchProductsError::QueryError(msg),
            })?;

        Ok(products
            .into_iter()
            .filter(|p| Self::matches(p, &filter))
            .collect())
    }
}
