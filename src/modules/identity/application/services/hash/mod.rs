mod bcrypt_hasher;
mod password_hasher;
mod password_hashing_service;

pub use bcrypt_hasher::BcryptHasher;
pub use password_hasher::PasswordHasher;
pub use password_hashing_service::PasswordHashingService;
