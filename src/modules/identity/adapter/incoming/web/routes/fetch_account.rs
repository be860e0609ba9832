use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::identity::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::identity::application::use_cases::fetch_account::FetchAccountError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct AccountProfileResponse {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Ann")]
    name: String,
    #[schema(example = "ann@example.com")]
    email: String,
    #[schema(example = "User")]
    role: String,
    is_active: bool,
}

/// Fetch the authenticated account
///
/// The password hash never appears in this view.
#[utoipa::path(
    get,
    path = "/api/accounts/me",
    tag = "accounts",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Account profile", body = inline(SuccessResponse<AccountProfileResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
    )
)]
#[get("/api/accounts/me")]
pub async fn fetch_account_handler(
    principal: AuthenticatedAccount,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_account_use_case
        .execute(principal.account_id)
        .await
    {
        Ok(view) => ApiResponse::success(AccountProfileResponse {
            id: view.id,
            name: view.name,
            email: view.email,
            role: view.role.as_str().to_string(),
            is_active: view.is_active,
        }),
        Err(FetchAccountError::NotFound) => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        Err(e) => {
            error!(error = %e, "Account fetch failed");
            ApiResponse::internal_error()
        }
    }
}
