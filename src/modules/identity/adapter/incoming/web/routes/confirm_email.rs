use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct ConfirmEmailParams {
    token: String,
}

#[derive(Serialize, ToSchema)]
pub struct ConfirmEmailResponse {
    #[schema(example = "Email confirmed. You can now log in.")]
    message: String,
}

/// Confirm an account email
///
/// Consumes the one-time activation token from the confirmation link.
/// Unknown and already-used tokens get the same generic rejection.
#[utoipa::path(
    get,
    path = "/api/accounts/confirm-email",
    tag = "accounts",
    params(("token" = String, Query, description = "One-time activation token")),
    responses(
        (status = 200, description = "Account activated", body = inline(SuccessResponse<ConfirmEmailResponse>)),
        (status = 400, description = "Invalid or already-used token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/accounts/confirm-email")]
pub async fn confirm_email_handler(
    params: web::Query<ConfirmEmailParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.confirm_email_use_case.execute(&params.token).await {
        Ok(true) => {
            info!("Account activated via confirmation token");
            ApiResponse::success(ConfirmEmailResponse {
                message: "Email confirmed. You can now log in.".to_string(),
            })
        }
        Ok(false) => ApiResponse::bad_request(
            "INVALID_ACTIVATION_TOKEN",
            "Activation token is invalid or has already been used",
        ),
        Err(e) => {
            error!(error = %e, "Email confirmation failed");
            ApiResponse::internal_error()
        }
    }
}
