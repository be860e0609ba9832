use actix_web::{get, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::catalog::application::use_cases::search_products::ProductSearchFilter;
use crate::identity::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::create_product::ProductResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchProductsParams {
    /// Case-insensitive substring matched against name and description.
    pub query: Option<String>,
    #[param(value_type = Option<f64>)]
    pub min_price: Option<Decimal>,
    #[param(value_type = Option<f64>)]
    pub max_price: Option<Decimal>,
    pub is_available: Option<bool>,
}

/// Search the authenticated account's products
#[utoipa::path(
    get,
    path = "/api/products/search",
    tag = "products",
    security(("BearerAuth" = [])),
    params(SearchProductsParams),
    responses(
        (status = 200, description = "Matching products", body = inline(SuccessResponse<Vec<ProductResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/products/search")]
pub async fn search_products_handler(
    principal: AuthenticatedAccount,
    params: web::Query<SearchProductsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();

    let filter = ProductSearchFilter {
        query: params.query,
        min_price: params.min_price,
        max_price: params.max_price,
        is_available: params.is_available,
    };

    match data
        .search_products_use_case
        .execute(principal.account_id, filter)
        .await
    {
        Ok(products) => ApiResponse::success(
            products
                .into_iter()
                .map(ProductResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(error = %e, "Product search failed");
            ApiResponse::internal_error()
        }
    }
}
