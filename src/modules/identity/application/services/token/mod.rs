mod token_config;
mod token_service;

pub use token_config::TokenConfig;
pub use token_service::TokenService;
