//! Client storage key names shared by the frontend and backend
//!
//! Keys are consumed verbatim by whatever layer actually reads and writes
//! cookies, local storage and session storage.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AuthbitsError, Result};

/// Cookie keys
pub mod cookie {
    /// HTTP-only auth token set by the backend
    pub const TOKEN: &str = "token";
    pub const CSRF_TOKEN: &str = "csrf_token";
    pub const SESSION_ID: &str = "session_id";

    pub const ALL: &[&str] = &[TOKEN, CSRF_TOKEN, SESSION_ID];
}

/// Local storage keys
pub mod local {
    /// JWT access token from a regular login
    pub const LOGIN_TOKEN: &str = "auth_token_login";
    /// Access token obtained through the OAuth2 flow
    pub const OAUTH2_TOKEN: &str = "auth_token_oauth2";
    pub const REFRESH_LOGIN_TOKEN: &str = "refresh_token_login";
    pub const REFRESH_OAUTH2_TOKEN: &str = "refresh_token_oauth2";
    pub const USER_PROFILE: &str = "user_profile";
    pub const USER_PERMISSIONS: &str = "user_permissions";
    pub const THEME_PREFERENCE: &str = "theme_preference";
    pub const LANGUAGE_PREFERENCE: &str = "language_preference";
    /// Used for email autocomplete on the login form
    pub const LAST_LOGIN_EMAIL: &str = "last_login_email";

    pub const ALL: &[&str] = &[
        LOGIN_TOKEN,
        OAUTH2_TOKEN,
        REFRESH_LOGIN_TOKEN,
        REFRESH_OAUTH2_TOKEN,
        USER_PROFILE,
        USER_PERMISSIONS,
        THEME_PREFERENCE,
        LANGUAGE_PREFERENCE,
        LAST_LOGIN_EMAIL,
    ];
}

/// Session storage keys
pub mod session {
    /// Set while an OAuth2 redirect is in flight, guards redirect loops
    pub const OAUTH2_REDIRECTING: &str = "oauth2_redirecting";
    /// Same guard for redirects triggered by OAuth2 API errors
    pub const OAUTH2_API_REDIRECTING: &str = "oauth2_api_redirecting";
    pub const TWO_FACTOR_IN_PROGRESS: &str = "two_factor_in_progress";
    pub const TEMP_LOGIN_DATA: &str = "temp_login_data";
    pub const FORM_DATA_CACHE: &str = "form_data_cache";
    pub const OIDC_NONCE: &str = "oidc_nonce";
    pub const OIDC_STATE: &str = "oidc_state";
    /// Guards against reload loops
    pub const RELOAD_COUNTER: &str = "reload_counter";

    pub const ALL: &[&str] = &[
        OAUTH2_REDIRECTING,
        OAUTH2_API_REDIRECTING,
        TWO_FACTOR_IN_PROGRESS,
        TEMP_LOGIN_DATA,
        FORM_DATA_CACHE,
        OIDC_NONCE,
        OIDC_STATE,
        RELOAD_COUNTER,
    ];
}

/// Where a key lives on the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageArea {
    Cookie,
    LocalStorage,
    SessionStorage,
}

impl StorageArea {
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Cookie, Self::LocalStorage, Self::SessionStorage]
    }

    /// Every key defined for this area
    #[must_use]
    pub const fn keys(&self) -> &'static [&'static str] {
        match self {
            Self::Cookie => cookie::ALL,
            Self::LocalStorage => local::ALL,
            Self::SessionStorage => session::ALL,
        }
    }

    /// Area a key belongs to, if it is one of ours
    pub fn of(key: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|a| a.keys().iter().any(|k| *k == key))
    }
}

// ============================================================================
// Token keys
// ============================================================================

/// Which flow issued a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Login,
    Oauth2,
}

impl TokenType {
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Oauth2 => "oauth2",
        }
    }

    /// How long a token of this type stays valid
    #[must_use]
    pub const fn lifetime(&self) -> Duration {
        let hours = match self {
            Self::Login => crate::auth::LOGIN_TOKEN_HOURS,
            Self::Oauth2 => crate::auth::OAUTH2_TOKEN_HOURS,
        };
        Duration::from_secs(hours * 60 * 60)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TokenType {
    type Err = AuthbitsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "login" => Ok(Self::Login),
            "oauth2" => Ok(Self::Oauth2),
            other => Err(AuthbitsError::UnknownTokenType(other.to_string())),
        }
    }
}

/// Local storage key holding the access token for `token_type`
#[inline]
pub const fn token_key(token_type: TokenType) -> &'static str {
    match token_type {
        TokenType::Login => local::LOGIN_TOKEN,
        TokenType::Oauth2 => local::OAUTH2_TOKEN,
    }
}

/// Local storage key holding the refresh token for `token_type`
#[inline]
pub const fn refresh_token_key(token_type: TokenType) -> &'static str {
    match token_type {
        TokenType::Login => local::REFRESH_LOGIN_TOKEN,
        TokenType::Oauth2 => local::REFRESH_OAUTH2_TOKEN,
    }
}

/// Every access and refresh token key
pub fn all_token_keys() -> Vec<&'static str> {
    vec![
        local::LOGIN_TOKEN,
        local::OAUTH2_TOKEN,
        local::REFRESH_LOGIN_TOKEN,
        local::REFRESH_OAUTH2_TOKEN,
    ]
}

/// Token keys plus cached profile and permissions; clear these on logout
pub fn all_auth_keys() -> Vec<&'static str> {
    let mut keys = all_token_keys();
    keys.extend([local::USER_PROFILE, local::USER_PERMISSIONS]);
    keys
}
