mod account_email_service;

pub use account_email_service::AccountEmailService;
