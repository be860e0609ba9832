use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::identity::application::use_cases::register_account::{
    RegisterAccountError, RegisterRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Documentation shape of the registration payload. The handler itself
/// deserializes into the validating `RegisterRequest`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann@example.com")]
    pub email: String,
    #[schema(example = "Pw123!abc")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    #[schema(example = "Account created. Please check your email to confirm your account.")]
    message: String,
    account: RegisteredAccount,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredAccount {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Ann")]
    name: String,
    #[schema(example = "ann@example.com")]
    email: String,
}

/// Register a new account
///
/// Creates an account in pending state and dispatches a confirmation email.
/// The registration fails as a whole when the email cannot be sent.
#[utoipa::path(
    post,
    path = "/api/accounts/register",
    tag = "accounts",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<RegisterResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 502, description = "Confirmation email could not be sent", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/accounts/register")]
pub async fn register_account_handler(
    req: web::Json<RegisterRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();

    info!(email = %request.email(), "Account registration attempt");

    match data.register_account_use_case.execute(request).await {
        Ok(output) => {
            info!(
                account_id = %output.account_id,
                email = %output.email,
                "Account registered, confirmation pending"
            );
            ApiResponse::created(RegisterResponse {
                message: output.message,
                account: RegisteredAccount {
                    id: output.account_id,
                    name: output.name,
                    email: output.email,
                },
            })
        }
        Err(RegisterAccountError::DuplicateEmail) => {
            warn!("Registration rejected: email already registered");
            ApiResponse::conflict("EMAIL_ALREADY_REGISTERED", "Email already registered")
        }
        Err(RegisterAccountError::NotificationError(msg)) => {
            error!(error = %msg, "Confirmation email failed; registration aborted");
            ApiResponse::bad_gateway(
                "NOTIFICATION_FAILED",
                "Could not send the confirmation email; registration was aborted",
            )
        }
        Err(other) => {
            error!(error = %other, "Unhandled registration error");
            ApiResponse::internal_error()
        }
    }
}
