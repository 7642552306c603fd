use super::SecurityError;
use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

/// Argon2id password hashing with a random salt per hash.
///
/// Hashes are PHC strings (`$argon2id$v=19$...`), so parameters travel with the hash.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passwords;

impl Passwords {
    /// # Errors
    /// Returns [`SecurityError::Hashing`] if Argon2 rejects the input.
    pub fn hash(self, plain: &str) -> Result<String, SecurityError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| SecurityError::Hashing { message: e.to_string().into(), context: None })
    }

    /// `Ok(false)` on a mismatch; an error only when `hash` is not a PHC string.
    ///
    /// # Errors
    /// Returns [`SecurityError::Hashing`] for a malformed stored hash.
    pub fn verify(self, plain: &str, hash: &str) -> Result<bool, SecurityError> {
        let parsed = PasswordHash::new(hash).map_err(|e| SecurityError::Hashing {
            message: e.to_string().into(),
            context: Some("Stored hash is not a PHC string".into()),
        })?;

        Ok(Argon2::default().verify_password(plain.as_bytes(), &parsed).is_ok())
    }
}
