//! Argon2id PIN hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use jobsite_core::error::AppError;

/// Hashes and verifies login PINs using Argon2id.
#[derive(Debug, Clone, Default)]
pub struct PinHasher;

impl PinHasher {
    /// Creates a new PIN hasher.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext PIN with a random salt, returning a PHC string.
    pub fn hash_pin(&self, pin: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(pin.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("PIN hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext PIN against a stored PHC string.
    ///
    /// Returns `Ok(false)` on mismatch. A malformed stored hash is an
    /// internal error, not a failed login.
    pub fn verify_pin(&self, pin: &str, hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid PIN hash format: {e}")))?;

        match Argon2::default().verify_password(pin.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!("PIN verification failed: {e}"))),
        }
    }
}
