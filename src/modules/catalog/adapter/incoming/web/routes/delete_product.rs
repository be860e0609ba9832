use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::catalog::application::use_cases::delete_product::DeleteProductError;
use crate::identity::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft-delete one of the authenticated account's products
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    security(("BearerAuth" = [])),
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
#[delete("/api/products/{id}")]
pub async fn delete_product_handler(
    principal: AuthenticatedAccount,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data
        .delete_product_use_case
        .execute(principal.account_id, product_id)
        .await
    {
        Ok(()) => {
            info!(product_id = %product_id, "Product soft-deleted");
            ApiResponse::no_content()
        }
        Err(DeleteProductError::NotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(e) => {
            error!(error = %e, "Product deletion failed");
            ApiResponse::internal_error()
        }
    }
}
