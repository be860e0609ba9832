use std::sync::Arc;

use tokio::task;

use super::bcrypt_hasher::BcryptHasher;
use super::password_hasher::PasswordHasher;

/// Async facade over a blocking hasher. Bcrypt work runs on the blocking
/// pool so request workers are never stalled by a hash.
pub struct PasswordHashingService {
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl Clone for PasswordHashingService {
    fn clone(&self) -> Self {
        Self {
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl PasswordHashingService {
    pub fn new(hasher: BcryptHasher) -> Self {
        Self {
            hasher: Arc::new(hasher),
        }
    }

    pub fn with_hasher<H>(hasher: H) -> Self
    where
        H: PasswordHasher + Send + Sync + 'static,
    {
        Self {
            hasher: Arc::new(hasher),
        }
    }

    pub async fn hash_password(&self, password: String) -> Result<String, String> {
        let hasher = Arc::clone(&self.hasher);
        task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| e.to_string())?
    }

    pub async fn verify_password(&self, password: String, hash: String) -> Result<bool, String> {
        let hasher = Arc::clone(&self.hasher);
        task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| e.to_string())?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify_round_trip() {
        let service = PasswordHashingService::new(BcryptHasher::fast());
        let password = "SecurePassword123";

        let hashed = service
            .hash_password(password.to_owned())
            .await
            .expect("hashing should succeed");

        let verify_correct = service
            .verify_password(password.to_owned(), hashed.clone())
            .await;
        assert!(verify_correct.is_ok());
        assert!(verify_correct.unwrap(), "password should match");

        let verify_wrong = service
            .verify_password("WrongPassword".to_owned(), hashed)
            .await;
        assert!(verify_wrong.is_ok());
        assert!(!verify_wrong.unwrap(), "password should not match");
    }

    #[tokio::test]
    async fn test_hasher_error_is_propagated() {
        struct BrokenHasher;

        impl PasswordHasher for BrokenHasher {
            fn hash_password(&self, _password: &str) -> Result<String, String> {
                Err("hashing backend unavailable".to_string())
            }

            fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, String> {
                Err("hashing backend unavailable".to_string())
            }
        }

        let service = PasswordHashingService::with_hasher(BrokenHasher);

        let hashed = service.hash_password("pw".to_owned()).await;
        assert!(hashed.is_err());

        let verified = service
            .verify_password("pw".to_owned(), "hash".to_owned())
            .await;
        assert!(verified.is_err());
    }
}
