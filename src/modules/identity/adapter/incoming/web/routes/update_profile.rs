use actix_web::{patch, web, Responder};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::identity::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::identity::application::use_cases::update_profile::{
    UpdateProfileError, UpdateProfileInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[schema(example = "Ann Lee")]
    pub name: Option<String>,
    #[schema(example = "ann.lee@example.com")]
    pub email: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct UpdateProfileResponse {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Ann Lee")]
    name: String,
    #[schema(example = "ann.lee@example.com")]
    email: String,
}

/// Update the authenticated account's profile
///
/// Only the supplied fields are overwritten.
#[utoipa::path(
    patch,
    path = "/api/accounts/me",
    tag = "accounts",
    security(("BearerAuth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<UpdateProfileResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
    )
)]
#[patch("/api/accounts/me")]
pub async fn update_profile_handler(
    principal: AuthenticatedAccount,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if let Some(email) = &req.email {
        if !EmailAddress::is_valid(email) {
            return ApiResponse::bad_request("INVALID_EMAIL", "Invalid email format");
        }
    }

    let input = UpdateProfileInput {
        account_id: principal.account_id,
        name: req.name,
        email: req.email.map(|e| e.trim().to_lowercase()),
    };

    match data.update_profile_use_case.execute(input).await {
        Ok(result) => {
            info!(account_id = %result.id, "Profile updated");
            ApiResponse::success(UpdateProfileResponse {
                id: result.id,
                name: result.name,
                email: result.email,
            })
        }
        Err(UpdateProfileError::NotFound) => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        Err(UpdateProfileError::NothingToUpdate) => {
            ApiResponse::bad_request("NOTHING_TO_UPDATE", "No fields supplied")
        }
        Err(e) => {
            error!(error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
