//! Gateway configuration.

use std::env;

use common::{AppError, AppResult, JwtConfig};

/// Shortest accepted signing secret
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Development-only secret used when `JWT_SECRET` is unset in debug builds.
const DEV_JWT_SECRET: &str = "development-only-secret-change-me-please";

pub const DEFAULT_SESSION_COOKIE_NAME: &str = "x-api-token";

/// Gateway configuration.
///
/// The bind address comes from the `serve` command line (`GATEWAY_HOST`, `GATEWAY_PORT`).
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Session token signing
    pub jwt: JwtConfig,
    /// Cookie carrying the session token
    pub session_cookie_name: String,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> AppResult<Self> {
        let defaults = JwtConfig::default();

        Ok(Self {
            jwt: JwtConfig {
                secret: jwt_secret(env::var("JWT_SECRET").ok())?,
                expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                    .ok()
                    .and_then(|h| h.parse().ok())
                    .unwrap_or(defaults.expiration_hours),
            },
            session_cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| DEFAULT_SESSION_COOKIE_NAME.to_string()),
        })
    }

    /// Configuration with an explicit secret, for tests and embedding
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt: JwtConfig {
                secret: secret.into(),
                ..JwtConfig::default()
            },
            ..Self::default()
        }
    }
}

fn jwt_secret(configured: Option<String>) -> AppResult<String> {
    match configured {
        Some(secret) if secret.len() >= MIN_JWT_SECRET_LENGTH => Ok(secret),
        Some(_) => Err(AppError::internal(format!(
            "JWT_SECRET must be at least {} characters",
            MIN_JWT_SECRET_LENGTH
        ))),
        None if cfg!(debug_assertions) => {
            tracing::warn!("JWT_SECRET not set, using the development secret");
            Ok(DEV_JWT_SECRET.to_string())
        }
        None => Err(AppError::internal("JWT_SECRET must be set")),
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            session_cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_secret_is_rejected() {
        assert!(jwt_secret(Some("too-short".to_string())).is_err());
    }

    #[test]
    fn test_long_secret_is_kept() {
        let secret = "x".repeat(MIN_JWT_SECRET_LENGTH);
        assert_eq!(jwt_secret(Some(secret.clone())).unwrap(), secret);
    }

    #[test]
    fn test_with_secret_keeps_default_cookie_and_expiry() {
        let config = GatewayConfig::with_secret("s".repeat(MIN_JWT_SECRET_LENGTH));
        assert_eq!(config.jwt.secret.len(), MIN_JWT_SECRET_LENGTH);
        assert_eq!(config.jwt.expiration_hours, JwtConfig::default().expiration_hours);
        assert_eq!(config.session_cookie_name, DEFAULT_SESSION_COOKIE_NAME);
    }

    #[test]
    fn test_dev_secret_is_long_enough() {
        assert!(DEV_JWT_SECRET.len() >= MIN_JWT_SECRET_LENGTH);
    }
}
