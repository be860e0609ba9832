use actix_web::{put, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::catalog::application::use_cases::update_product::{
    UpdateProductError, UpdateProductInput,
};
use crate::identity::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::create_product::ProductResponse;

/// Full overwrite of the mutable fields; the creator is immutable and not
/// part of the payload.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[schema(example = "Walnut desk")]
    pub name: String,
    #[schema(example = "Solid walnut, 140x70cm, oiled")]
    pub description: String,
    #[schema(value_type = f64, example = 420.00)]
    pub price: Decimal,
    pub is_available: bool,
}

/// Update one of the authenticated account's products
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    security(("BearerAuth" = [])),
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = inline(SuccessResponse<ProductResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
#[put("/api/products/{id}")]
pub async fn update_product_handler(
    principal: AuthenticatedAccount,
    path: web::Path<i32>,
    req: web::Json<UpdateProductRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();
    let req = req.into_inner();

    if req.name.trim().is_empty() {
        return ApiResponse::bad_request("INVALID_NAME", "Product name cannot be empty");
    }
    if req.price < Decimal::ZERO {
        return ApiResponse::bad_request("INVALID_PRICE", "Price cannot be negative");
    }

    let input = UpdateProductInput {
        name: req.name.trim().to_string(),
        description: req.description,
        price: req.price,
        is_available: req.is_available,
    };

    match data
        .update_product_use_case
        .execute(principal.account_id, product_id, input)
        .await
    {
        Ok(product) => {
            info!(product_id = %product.id, "Product updated");
            ApiResponse::success(ProductResponse::from(product))
        }
        Err(UpdateProductError::NotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(e) => {
            error!(error = %e, "Product update failed");
            ApiResponse::internal_error()
        }
    }
}
