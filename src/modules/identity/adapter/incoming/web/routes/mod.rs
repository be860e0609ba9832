mod confirm_email;
mod delete_account;
mod fetch_account;
mod login_account;
mod register_account;
mod update_profile;

pub use confirm_email::{confirm_email_handler, ConfirmEmailResponse};
pub use delete_account::delete_account_handler;
pub use fetch_account::{fetch_account_handler, AccountProfileResponse};
pub use login_account::{login_account_handler, LoginAccountInfo, LoginRequestDto, LoginResponse};
pub use register_account::{
    register_account_handler, RegisterRequestDto, RegisterResponse, RegisteredAccount,
};
pub use update_profile::{update_profile_handler, UpdateProfileRequest, UpdateProfileResponse};
