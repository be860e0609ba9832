use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::catalog::adapter::incoming::web::routes::{
    CreateProductRequest, ProductResponse, UpdateProductRequest,
};
use crate::identity::adapter::incoming::web::routes::{
    AccountProfileResponse, ConfirmEmailResponse, LoginAccountInfo, LoginRequestDto,
    LoginResponse, RegisterRequestDto, RegisterResponse, RegisteredAccount,
    UpdateProfileRequest, UpdateProfileResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Commerce Backend API",
        version = "1.0.0",
        description = "Account identity and product catalog API",
    ),
    paths(
        // Account endpoints
        crate::identity::adapter::incoming::web::routes::register_account_handler,
        crate::identity::adapter::incoming::web::routes::confirm_email_handler,
        crate::identity::adapter::incoming::web::routes::login_account_handler,
        crate::identity::adapter::incoming::web::routes::fetch_account_handler,
        crate::identity::adapter::incoming::web::routes::update_profile_handler,
        crate::identity::adapter::incoming::web::routes::delete_account_handler,

        // Product endpoints
        crate::catalog::adapter::incoming::web::routes::create_product_handler,
        crate::catalog::adapter::incoming::web::routes::list_products_handler,
        crate::catalog::adapter::incoming::web::routes::search_products_handler,
        crate::catalog::adapter::incoming::web::routes::get_product_handler,
        crate::catalog::adapter::incoming::web::routes::update_product_handler,
        crate::catalog::adapter::incoming::web::routes::delete_product_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisterResponse>,
            ErrorResponse,
            ErrorDetail,

            // Account DTOs
            RegisterRequestDto,
            RegisterResponse,
            RegisteredAccount,
            ConfirmEmailResponse,
            LoginRequestDto,
            LoginResponse,
            LoginAccountInfo,
            AccountProfileResponse,
            UpdateProfileRequest,
            UpdateProfileResponse,

            // Product DTOs
            CreateProductRequest,
            UpdateProductRequest,
            ProductResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "accounts", description = "Account identity endpoints"),
        (name = "products", description = "Product catalog endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your identity token"))
                        .build(),
                ),
            )
        }
    }
}
