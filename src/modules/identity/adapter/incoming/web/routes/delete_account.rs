use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::identity::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::identity::application::use_cases::soft_delete_account::SoftDeleteAccountError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft-delete the authenticated account
///
/// The row stays in storage but disappears from every lookup; the email
/// becomes available for a fresh registration. Deletion is permanent.
#[utoipa::path(
    delete,
    path = "/api/accounts/me",
    tag = "accounts",
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
    )
)]
#[delete("/api/accounts/me")]
pub async fn delete_account_handler(
    principal: AuthenticatedAccount,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .soft_delete_account_use_case
        .execute(principal.account_id)
        .await
    {
        Ok(()) => {
            info!(account_id = %principal.account_id, "Account soft-deleted");
            ApiResponse::no_content()
        }
        Err(SoftDeleteAccountError::NotFound) => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        Err(e) => {
            error!(error = %e, "Account deletion failed");
            ApiResponse::internal_error()
        }
    }
}
