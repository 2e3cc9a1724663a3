//! Authentication constants shared with the token and session layers
//!
//! Data only. Nothing here issues, signs or verifies tokens.

use std::fmt;
use std::time::Duration;

use crate::roles::Role;

// JWT defaults
/// Used only when no `JWT_SECRET` is configured; never acceptable in production
pub const JWT_SECRET_FALLBACK: &str = "your-secret-key";
pub const JWT_EXPIRES_IN: &str = "1h";
pub const JWT_ALGORITHMS: &[&str] = &["HS256"];
pub const JWT_TOKEN_TYPE: &str = "access";

// Token lifetimes (hours)
pub const LOGIN_TOKEN_HOURS: u64 = 24;
pub const OAUTH2_TOKEN_HOURS: u64 = 1;

pub const BCRYPT_SALT_ROUNDS: u32 = 10;
/// Role granted to new accounts for basic OAuth2 features
pub const DEFAULT_USER_ROLE: Role = Role::ClientManager;
/// Matches the login token lifetime
pub const TOKEN_EXPIRATION_SECONDS: u64 = 86_400;

// Cache TTLs
pub const USER_CACHE_TTL: Duration = Duration::from_millis(600_000);
pub const PERMISSIONS_CACHE_TTL: Duration = Duration::from_millis(300_000);

/// TOTP parameters
pub mod two_factor {
    pub const SECRET_LENGTH: usize = 32;
    pub const BACKUP_CODE_COUNT: usize = 10;
    pub const BACKUP_CODE_LENGTH: usize = 10;
    /// TOTP step, seconds
    pub const WINDOW_TIME: u64 = 30;
}

/// Auth failures surfaced to users, each with its display message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorKind {
    JwtSecretMissing,
    InvalidCredentials,
    UserNotFound,
    TokenExpired,
    InvalidToken,
    InvalidTokenType,
    Unauthorized,
    AuthenticationFailed,
    UserAlreadyExists,
    LoginFailed,
    TwoFactorNotEnabled,
    InvalidTwoFactorToken,
    InvalidBackupCode,
}

impl AuthErrorKind {
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::JwtSecretMissing,
            Self::InvalidCredentials,
            Self::UserNotFound,
            Self::TokenExpired,
            Self::InvalidToken,
            Self::InvalidTokenType,
            Self::Unauthorized,
            Self::AuthenticationFailed,
            Self::UserAlreadyExists,
            Self::LoginFailed,
            Self::TwoFactorNotEnabled,
            Self::InvalidTwoFactorToken,
            Self::InvalidBackupCode,
        ]
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::JwtSecretMissing => "JWT_SECRET 환경 변수가 필요합니다",
            Self::InvalidCredentials => "잘못된 자격 증명입니다",
            Self::UserNotFound => "사용자를 찾을 수 없습니다",
            Self::TokenExpired => "토큰이 만료되었습니다",
            Self::InvalidToken => "잘못된 토큰입니다",
            Self::InvalidTokenType => "잘못된 토큰 유형입니다",
            Self::Unauthorized => "권한이 없습니다",
            Self::AuthenticationFailed => "인증에 실패했습니다",
            Self::UserAlreadyExists => "이미 존재하는 사용자입니다",
            Self::LoginFailed => "로그인에 실패했습니다",
            Self::TwoFactorNotEnabled => "이 사용자에 대해 2단계 인증이 활성화되지 않았습니다",
            Self::InvalidTwoFactorToken => "잘못된 2단계 인증 토큰입니다",
            Self::InvalidBackupCode => "잘못된 백업 코드입니다",
        }
    }
}

impl fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Log line prefixes used by the auth service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthLogMessage {
    JwtStrategyInitialized,
    LoginAttempt,
    LoginSuccessful,
    LoginFailedUserNotFound,
    LoginFailedInvalidPassword,
    JwtValidationSuccessful,
    JwtValidationError,
    ProfileRequest,
    ProfileRetrievalSuccessful,
    ProfileRetrievalFailed,
    InvalidJwtPayloadSub,
    LoginFailed,
    InvalidJwtPayloadEmail,
    InvalidTokenType,
    UserNotFoundById,
    EmailMismatch,
}

impl AuthLogMessage {
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::JwtStrategyInitialized,
            Self::LoginAttempt,
            Self::LoginSuccessful,
            Self::LoginFailedUserNotFound,
            Self::LoginFailedInvalidPassword,
            Self::JwtValidationSuccessful,
            Self::JwtValidationError,
            Self::ProfileRequest,
            Self::ProfileRetrievalSuccessful,
            Self::ProfileRetrievalFailed,
            Self::InvalidJwtPayloadSub,
            Self::LoginFailed,
            Self::InvalidJwtPayloadEmail,
            Self::InvalidTokenType,
            Self::UserNotFoundById,
            Self::EmailMismatch,
        ]
    }

    #[must_use]
    pub const fn text(&self) -> &'static str {
        match self {
            Self::JwtStrategyInitialized => "JWT Strategy initialized with Bearer token extraction",
            Self::LoginAttempt => "Login attempt for email:",
            Self::LoginSuccessful => "Login successful for user:",
            Self::LoginFailedUserNotFound => "Login failed: User not found for email:",
            Self::LoginFailedInvalidPassword => "Login failed: Invalid password for user:",
            Self::JwtValidationSuccessful => "JWT validation successful for user:",
            Self::JwtValidationError => "JWT validation error:",
            Self::ProfileRequest => "Profile request for user ID:",
            Self::ProfileRetrievalSuccessful => "Profile retrieved for user:",
            Self::ProfileRetrievalFailed => "Profile retrieval failed for user ID:",
            Self::InvalidJwtPayloadSub => "Invalid JWT payload: missing or invalid sub claim",
            Self::LoginFailed => "Login error for email",
            Self::InvalidJwtPayloadEmail => "Invalid JWT payload: missing or invalid email claim",
            Self::InvalidTokenType => "Invalid token type:",
            Self::UserNotFoundById => "User not found for ID:",
            Self::EmailMismatch => "Email mismatch for user ID:",
        }
    }
}

impl fmt::Display for AuthLogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
