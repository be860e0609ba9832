pub mod account_query;
pub mod account_repository;
pub mod token_provider;

pub use account_query::{AccountQuery, AccountQueryError};
pub use account_repository::{
    AccountRepository, AccountRepositoryError, AccountResult, CreateAccountData, ProfileChanges,
};
pub use token_provider::{IdentityClaims, TokenError, TokenProvider};
