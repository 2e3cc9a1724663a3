//! Error types for authbits

use thiserror::Error;

/// The main error type for authbits operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthbitsError {
    /// Input was not a hexadecimal permission mask
    #[error("invalid permission mask format: {input:?}")]
    InvalidFormat { input: String },

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown permission: {0}")]
    UnknownPermission(String),

    #[error("unknown user type: {0}")]
    UnknownUserType(String),

    #[error("unknown token type: {0}")]
    UnknownTokenType(String),

    /// `JWT_SECRET` was required but not set
    #[error("JWT_SECRET 환경 변수가 필요합니다")]
    MissingSecret,
}

/// Result type alias for authbits operations
pub type Result<T> = std::result::Result<T, AuthbitsError>;

impl AuthbitsError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        AuthbitsError::InvalidFormat { input: input.to_string() }
    }
}
