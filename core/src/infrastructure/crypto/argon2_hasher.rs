use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, crypto::ports::HasherRepository};

#[derive(Debug, Clone, Default)]
pub struct Argon2HasherRepository;

impl Argon2HasherRepository {
    pub fn new() -> Self {
        Self
    }
}

impl HasherRepository for Argon2HasherRepository {
    fn hash_password(&self, password: &str) -> Result<String, CoreError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                error!("Failed to hash password: {}", e);
                CoreError::InternalServerError
            })
    }

    fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool, CoreError> {
        let parsed = PasswordHash::new(password_hash).map_err(|e| {
            error!("Stored password hash is malformed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2HasherRepository::new();
        let hash = hasher.hash_password("password123").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify_password("password123", &hash).unwrap());
        assert!(!hasher.verify_password("password124", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = Argon2HasherRepository::new();

        assert_ne!(
            hasher.hash_password("same").unwrap(),
            hasher.hash_password("same").unwrap()
        );
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let hasher = Argon2HasherRepository::new();

        assert!(hasher.verify_password("x", "not-a-hash").is_err());
    }
}
