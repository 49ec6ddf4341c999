//! Environment configuration.

use std::{env, str::FromStr};

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

use crate::{password::PasswordHashConfig, seeder::InvoiceConflict};

const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is not a valid connection string: {reason}")]
    InvalidUrl { key: &'static str, reason: String },

    #[error("{key}={value} is invalid: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Connection options for the dashboard database, transport mode already applied.
    pub connect_options: PgConnectOptions,
    pub port: u16,
    pub password_hashing: PasswordHashConfig,
    pub invoice_conflict: InvoiceConflict,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (url_key, url) = ["POSTGRES_URL", "DATABASE_URL"]
            .into_iter()
            .find_map(|key| lookup(key).map(|url| (key, url)))
            .ok_or(ConfigError::Missing("POSTGRES_URL"))?;

        let url_options = PgConnectOptions::from_str(&url).map_err(|e| ConfigError::InvalidUrl {
            key: url_key,
            reason: e.to_string(),
        })?;

        let ssl_mode = match lookup("DATABASE_SSL_MODE") {
            Some(value) => {
                let mode = PgSslMode::from_str(&value).map_err(|e| ConfigError::Invalid {
                    key: "DATABASE_SSL_MODE",
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
                if !is_encrypted(&mode) {
                    tracing::warn!(
                        ssl_mode = %value,
                        "DATABASE_SSL_MODE allows an unencrypted database connection"
                    );
                }
                mode
            }
            // Never weaker than require; verifying modes from the URL are kept.
            None => match url_options.get_ssl_mode() {
                mode if is_encrypted(&mode) => mode,
                _ => PgSslMode::Require,
            },
        };
        let connect_options = url_options.ssl_mode(ssl_mode);

        let defaults = PasswordHashConfig::default();
        let password_hashing = PasswordHashConfig {
            memory_kib: parse_or(&lookup, "PASSWORD_HASH_MEMORY_KIB", defaults.memory_kib)?,
            iterations: parse_or(&lookup, "PASSWORD_HASH_ITERATIONS", defaults.iterations)?,
            parallelism: parse_or(&lookup, "PASSWORD_HASH_PARALLELISM", defaults.parallelism)?,
        };

        Ok(Self {
            connect_options,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            password_hashing,
            invoice_conflict: parse_or(&lookup, "SEED_INVOICE_CONFLICT", InvoiceConflict::default())?,
        })
    }
}

fn is_encrypted(mode: &PgSslMode) -> bool {
    matches!(
        mode,
        PgSslMode::Require | PgSslMode::VerifyCa | PgSslMode::VerifyFull
    )
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("POSTGRES_URL", "postgres://u:p@db.example.com/dash")]).unwrap();

        assert_eq!(config.port, 3001);
        assert_eq!(config.password_hashing, PasswordHashConfig::default());
        assert_eq!(config.invoice_conflict, InvoiceConflict::GeneratedId);
        assert!(matches!(
            config.connect_options.get_ssl_mode(),
            PgSslMode::Require
        ));
        assert_eq!(config.connect_options.get_host(), "db.example.com");
    }

    #[test]
    fn test_database_url_fallback() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/dash")]).unwrap();
        assert_eq!(config.connect_options.get_database(), Some("dash"));
    }

    #[test]
    fn test_missing_url() {
        assert!(matches!(
            config_from(&[]),
            Err(ConfigError::Missing("POSTGRES_URL"))
        ));
    }

    #[test]
    fn test_ssl_mode_override() {
        let config = config_from(&[
            ("POSTGRES_URL", "postgres://localhost/dash"),
            ("DATABASE_SSL_MODE", "disable"),
        ])
        .unwrap();
        assert!(matches!(
            config.connect_options.get_ssl_mode(),
            PgSslMode::Disable
        ));
    }

    #[test]
    fn test_url_verify_full_is_kept() {
        let config = config_from(&[(
            "POSTGRES_URL",
            "postgres://db.example.com/dash?sslmode=verify-full",
        )])
        .unwrap();
        assert!(matches!(
            config.connect_options.get_ssl_mode(),
            PgSslMode::VerifyFull
        ));
    }

    #[test]
    fn test_url_weak_modes_are_raised_to_require() {
        for mode in ["disable", "allow", "prefer"] {
            let url = format!("postgres://db.example.com/dash?sslmode={mode}");
            let config = config_from(&[("POSTGRES_URL", url.as_str())]).unwrap();
            assert!(
                matches!(config.connect_options.get_ssl_mode(), PgSslMode::Require),
                "sslmode={mode} was not raised"
            );
        }
    }

    #[test]
    fn test_ssl_mode_override_beats_url() {
        let config = config_from(&[
            ("POSTGRES_URL", "postgres://localhost/dash?sslmode=verify-full"),
            ("DATABASE_SSL_MODE", "require"),
        ])
        .unwrap();
        assert!(matches!(
            config.connect_options.get_ssl_mode(),
            PgSslMode::Require
        ));

        let err = config_from(&[
            ("POSTGRES_URL", "postgres://localhost/dash"),
            ("DATABASE_SSL_MODE", "sometimes"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "DATABASE_SSL_MODE",
                ..
            }
        ));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("POSTGRES_URL", "postgres://localhost/dash"),
            ("PORT", "8080"),
            ("PASSWORD_HASH_ITERATIONS", "4"),
            ("PASSWORD_HASH_MEMORY_KIB", "8192"),
            ("SEED_INVOICE_CONFLICT", "natural-key"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.password_hashing.iterations, 4);
        assert_eq!(config.password_hashing.memory_kib, 8192);
        assert_eq!(config.invoice_conflict, InvoiceConflict::NaturalKey);
    }

    #[test]
    fn test_invalid_values() {
        let err = config_from(&[
            ("POSTGRES_URL", "postgres://localhost/dash"),
            ("PORT", "eighty"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));

        let err = config_from(&[
            ("POSTGRES_URL", "postgres://localhost/dash"),
            ("SEED_INVOICE_CONFLICT", "upsert"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "SEED_INVOICE_CONFLICT",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_url() {
        let err = config_from(&[("POSTGRES_URL", "not a url")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidUrl {
                key: "POSTGRES_URL",
                ..
            }
        ));
    }
}
