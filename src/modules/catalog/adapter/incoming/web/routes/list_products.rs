use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::identity::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::create_product::ProductResponse;

/// List the authenticated account's products
///
/// Only rows created by the caller come back; there is no way to enumerate
/// anyone else's catalog.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Products", body = inline(SuccessResponse<Vec<ProductResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/products")]
pub async fn list_products_handler(
    principal: AuthenticatedAccount,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .list_products_use_case
        .execute(principal.account_id)
        .await
    {
        Ok(products) => ApiResponse::success(
            products
                .into_iter()
                .map(ProductResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(error = %e, "Product listing failed");
            ApiResponse::internal_error()
        }
    }
}
