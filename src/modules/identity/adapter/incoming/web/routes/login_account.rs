use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::identity::application::use_cases::authenticate::{AuthenticateError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Documentation shape of the login payload; deserialization goes through
/// the validating `LoginRequest`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "ann@example.com")]
    pub email: String,
    #[schema(example = "Pw123!abc")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed identity token, valid for one hour.
    token: String,
    account: LoginAccountInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginAccountInfo {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Ann")]
    name: String,
    #[schema(example = "ann@example.com")]
    email: String,
    #[schema(example = "User")]
    role: String,
}

fn map_authenticate_error(err: AuthenticateError) -> HttpResponse {
    match &err {
        AuthenticateError::InvalidCredentials => {
            warn!("Login rejected: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        AuthenticateError::AccountNotConfirmed => {
            warn!("Login rejected: account not confirmed");
            ApiResponse::unauthorized(
                "ACCOUNT_NOT_CONFIRMED",
                "Account is not confirmed. Please check your email to confirm your account.",
            )
        }
        other => {
            error!(error = %other, "Unhandled authentication error");
            ApiResponse::internal_error()
        }
    }
}

/// Authenticate with email and password
///
/// Issues a signed identity token on success. The catalog endpoints accept
/// this token as a bearer credential.
#[utoipa::path(
    post,
    path = "/api/accounts/login",
    tag = "accounts",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Authenticated", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials or unconfirmed account", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/accounts/login")]
pub async fn login_account_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();

    match data.authenticate_use_case.execute(request).await {
        Ok(response) => {
            info!(account_id = %response.account.id, "Login succeeded");
            ApiResponse::success(LoginResponse {
                token: response.token,
                account: LoginAccountInfo {
                    id: response.account.id,
                    name: response.account.name,
                    email: response.account.email,
                    role: response.account.role,
                },
            })
        }
        Err(err) => map_authenticate_error(err),
    }
}
