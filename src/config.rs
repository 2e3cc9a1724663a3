//! Runtime auth configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::auth::{
    BCRYPT_SALT_ROUNDS, JWT_EXPIRES_IN, JWT_SECRET_FALLBACK, LOGIN_TOKEN_HOURS,
    OAUTH2_TOKEN_HOURS, TOKEN_EXPIRATION_SECONDS,
};
use crate::error::{AuthbitsError, Result};

/// Environment variable holding the JWT signing secret
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Settings consumed by the token and password layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expires_in: String,
    pub login_token_hours: u64,
    pub oauth2_token_hours: u64,
    pub bcrypt_salt_rounds: u32,
    pub token_expiration_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: JWT_SECRET_FALLBACK.to_string(),
            jwt_expires_in: JWT_EXPIRES_IN.to_string(),
            login_token_hours: LOGIN_TOKEN_HOURS,
            oauth2_token_hours: OAUTH2_TOKEN_HOURS,
            bcrypt_salt_rounds: BCRYPT_SALT_ROUNDS,
            token_expiration_seconds: TOKEN_EXPIRATION_SECONDS,
        }
    }
}

impl AuthConfig {
    /// Resolve from a variable lookup; the secret is required
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup(JWT_SECRET_ENV)
            .filter(|s| !s.is_empty())
            .ok_or(AuthbitsError::MissingSecret)?;
        Ok(Self { jwt_secret, ..Self::default() })
    }

    /// Resolve from the process environment; fails without `JWT_SECRET`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Like [`AuthConfig::from_env`] but falls back to the insecure default secret
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            warn!(error = %e, "falling back to default JWT secret");
            Self::default()
        })
    }

    /// True when still running on the built-in secret
    pub fn uses_fallback_secret(&self) -> bool {
        self.jwt_secret == JWT_SECRET_FALLBACK
    }
}
