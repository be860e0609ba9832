pub mod authenticate;
pub mod confirm_email;
pub mod fetch_account;
pub mod register_account;
pub mod soft_delete_account;
pub mod update_profile;
