//! Salted one-way password hashing for stored user credentials.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Invalid hashing parameters: {0}")]
    Params(argon2::Error),

    #[error("Password hashing failed: {0}")]
    Hash(argon2::password_hash::Error),
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHashConfig {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes over memory.
    pub iterations: u32,
    /// Degree of parallelism (lanes).
    pub parallelism: u32,
}

impl Default for PasswordHashConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl PasswordHashConfig {
    fn hasher(&self) -> Result<Argon2<'static>, PasswordError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(PasswordError::Params)?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hashes `password` with a fresh random salt, returning a PHC string.
pub fn hash_password(config: &PasswordHashConfig, password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = config
        .hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(PasswordError::Hash)?;
    Ok(hash.to_string())
}

/// Checks `password` against a stored PHC string. Cost parameters come from the hash itself.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(PasswordError::Hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> PasswordHashConfig {
        PasswordHashConfig {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_hash_is_not_plaintext_and_verifies() {
        let hash = hash_password(&cheap(), "secret").unwrap();

        assert_ne!(hash, "secret");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("secret", &hash).unwrap());
        assert!(!verify_password("Secret", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let a = hash_password(&cheap(), "123456").unwrap();
        let b = hash_password(&cheap(), "123456").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_cost_parameters_are_encoded() {
        let config = PasswordHashConfig {
            memory_kib: 2048,
            iterations: 3,
            parallelism: 1,
        };
        let hash = hash_password(&config, "pw").unwrap();
        assert!(hash.contains("m=2048,t=3,p=1"));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let config = PasswordHashConfig {
            iterations: 0,
            ..cheap()
        };
        assert!(matches!(
            hash_password(&config, "pw"),
            Err(PasswordError::Params(_))
        ));
    }

    #[test]
    fn test_malformed_hash_rejected() {
        assert!(verify_password("pw", "not-a-phc-string").is_err());
    }
}
