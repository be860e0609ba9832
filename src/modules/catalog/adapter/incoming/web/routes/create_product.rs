use actix_web::{post, web, Responder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::catalog::application::use_cases::create_product::CreateProductInput;
use crate::catalog::domain::entities::Product;
use crate::identity::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The payload deliberately has no creator field; a caller-supplied
/// `creator_account_id` is dropped during deserialization and the creator
/// comes from the verified token instead.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Walnut desk")]
    pub name: String,
    #[schema(example = "Solid walnut, 140x70cm")]
    pub description: String,
    #[schema(value_type = f64, example = 450.00)]
    pub price: Decimal,
    pub is_available: bool,
}

#[derive(Serialize, ToSchema)]
pub struct ProductResponse {
    #[schema(example = 10)]
    pub id: i32,
    #[schema(example = "Walnut desk")]
    pub name: String,
    #[schema(example = "Solid walnut, 140x70cm")]
    pub description: String,
    #[schema(value_type = f64, example = 450.00)]
    pub price: Decimal,
    pub is_available: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            is_available: product.is_available,
        }
    }
}

/// Create a product
///
/// The authenticated account becomes the product's creator.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    security(("BearerAuth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = inline(SuccessResponse<ProductResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/products")]
pub async fn create_product_handler(
    principal: AuthenticatedAccount,
    req: web::Json<CreateProductRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if req.name.trim().is_empty() {
        return ApiResponse::bad_request("INVALID_NAME", "Product name cannot be empty");
    }
    if req.price < Decimal::ZERO {
        return ApiResponse::bad_request("INVALID_PRICE", "Price cannot be negative");
    }

    let input = CreateProductInput {
        name: req.name.trim().to_string(),
        description: req.description,
        price: req.price,
        is_available: req.is_available,
    };

    match data
        .create_product_use_case
        .execute(principal.account_id, input)
        .await
    {
        Ok(product) => {
            info!(
                product_id = %product.id,
                creator = %product.creator_account_id,
                "Product created"
            );
            ApiResponse::created(ProductResponse::from(product))
        }
        Err(e) => {
            error!(error = %e, "Product creation failed");
            ApiResponse::internal_error()
        }
    }
}
