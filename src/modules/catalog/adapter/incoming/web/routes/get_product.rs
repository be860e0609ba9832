use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::catalog::application::use_cases::get_product::GetProductError;
use crate::identity::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::create_product::ProductResponse;

/// Fetch one of the authenticated account's products
///
/// Products belonging to other accounts answer 404, never 403.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    security(("BearerAuth" = [])),
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = inline(SuccessResponse<ProductResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
#[get("/api/products/{id}")]
pub async fn get_product_handler(
    principal: AuthenticatedAccount,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data
        .get_product_use_case
        .execute(principal.account_id, product_id)
        .await
    {
        Ok(product) => ApiResponse::success(ProductResponse::from(product)),
        Err(GetProductError::NotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(e) => {
            error!(error = %e, "Product fetch failed");
            ApiResponse::internal_error()
        }
    }
}
