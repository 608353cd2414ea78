use async_trait::async_trait;
use tracing::debug;

use super::argon2_hasher::Argon2Hasher;
use super::bcrypt_hasher::BcryptHasher;
use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};
use crate::config::{HashingAlgorithm, HasherConfig};

/// Hashes with the configured algorithm and verifies whichever
/// algorithm produced the stored hash.
#[derive(Clone)]
pub struct PasswordHashingService {
    algorithm: HashingAlgorithm,
    argon2: Argon2Hasher,
    bcrypt: BcryptHasher,
}

impl PasswordHashingService {
    pub fn from_config(config: &HasherConfig) -> Result<Self, HashError> {
        Ok(Self {
            algorithm: config.algorithm,
            argon2: Argon2Hasher::from_config(config)?,
            bcrypt: BcryptHasher::new(config.bcrypt_cost),
        })
    }

    fn hasher_for_hash(&self, hash: &str) -> Option<&dyn PasswordHasher> {
        if hash.starts_with("$argon2") {
            Some(&self.argon2)
        } else if hash.starts_with("$2") {
            Some(&self.bcrypt)
        } else {
            None
        }
    }
}

#[async_trait]
impl PasswordHasher for PasswordHashingService {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        match self.algorithm {
            HashingAlgorithm::Argon2 => self.argon2.hash_password(password).await,
            HashingAlgorithm::Bcrypt => self.bcrypt.hash_password(password).await,
        }
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        match self.hasher_for_hash(hash) {
            Some(hasher) => hasher.verify_password(password, hash).await,
            None => {
                debug!("Stored hash has an unknown format");
                Err(HashError::VerifyFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(algorithm: HashingAlgorithm) -> HasherConfig {
        HasherConfig {
            algorithm,
            argon2_memory_kib: 1024,
            argon2_iterations: 1,
            argon2_parallelism: 1,
            bcrypt_cost: 4,
        }
    }

    #[tokio::test]
    async fn test_password_hashing_service_with_argon2() {
        let service = PasswordHashingService::from_config(&config(HashingAlgorithm::Argon2)).unwrap();

        let hash = service.hash_password("SecurePassword123").await.unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert_eq!(service.verify_password("SecurePassword123", &hash).await, Ok(true));
    }

    #[tokio::test]
    async fn test_password_hashing_service_with_bcrypt() {
        let service = PasswordHashingService::from_config(&config(HashingAlgorithm::Bcrypt)).unwrap();

        let hash = service.hash_password("SecurePassword123").await.unwrap();

        assert!(hash.starts_with("$2"));
        assert_eq!(service.verify_password("wrong", &hash).await, Ok(false));
    }

    #[tokio::test]
    async fn test_verifies_hashes_from_the_other_algorithm() {
        let argon2 = PasswordHashingService::from_config(&config(HashingAlgorithm::Argon2)).unwrap();
        let bcrypt = PasswordHashingService::from_config(&config(HashingAlgorithm::Bcrypt)).unwrap();

        let legacy = bcrypt.hash_password("legacy-pass").await.unwrap();

        assert_eq!(argon2.verify_password("legacy-pass", &legacy).await, Ok(true));
    }

    #[tokio::test]
    async fn test_unknown_hash_format_fails_verification() {
        let service = PasswordHashingService::from_config(&config(HashingAlgorithm::Argon2)).unwrap();

        let result = service.verify_password("pw", "plaintext-pw").await;

        assert_eq!(result, Err(HashError::VerifyFailed));
    }

    #[test]
    fn test_invalid_argon2_config_is_reported() {
        let bad = HasherConfig {
            argon2_iterations: 0,
            ..config(HashingAlgorithm::Argon2)
        };

        assert!(matches!(
            PasswordHashingService::from_config(&bad),
            Err(HashError::InvalidParams(_))
        ));
    }
}
