//! Password value object.
//!
//! Sellers never store their password in the clear: the plain text is
//! salted and hashed with Argon2 before it reaches the store.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// Salted Argon2 hash of a seller password.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password with a fresh random salt.
    ///
    /// No length policy is applied here; any string is accepted.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?
            .to_string();

        Ok(Self { hash })
    }

    /// Consume and return the PHC string for storage.
    pub fn into_string(self) -> String {
        self.hash
    }
}

// Accessors for asserting on stored hashes
#[cfg(test)]
impl Password {
    pub(crate) fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.hash
    }

    /// A hash that does not parse never matches.
    pub(crate) fn verify(&self, plain_text: &str) -> bool {
        use argon2::password_hash::{PasswordHash, PasswordVerifier};

        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is malformed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "SecurePassword123!";
        let password = Password::new(plain).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "TestPassword123";
        let password = Password::new(plain).unwrap();
        let hash = password.as_str().to_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(plain));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let stored = Password::from_hash("plain-text-123".to_string());
        assert!(!stored.verify("plain-text-123"));
    }

    #[test]
    fn test_different_passwords_different_hashes() {
        let pass1 = Password::new("Password123!").unwrap();
        let pass2 = Password::new("Password456!").unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::new(plain).unwrap();
        let pass2 = Password::new(plain).unwrap();

        // Different salts produce different hashes
        assert_ne!(pass1.as_str(), pass2.as_str());
        // But both verify correctly
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_short_password_is_accepted() {
        let password = Password::new("123").unwrap();
        assert!(password.verify("123"));
        assert_ne!(password.as_str(), "123");
    }

    #[test]
    fn test_hash_is_argon2_phc_string() {
        let password = Password::new("password").unwrap();
        assert!(password.as_str().starts_with("$argon2"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("password").unwrap();
        let printed = format!("{:?}", password);
        assert!(printed.contains("[REDACTED]"));
        assert!(!printed.contains(password.as_str()));
    }
}
