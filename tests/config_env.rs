//! Environment-backed configuration
//!
//! These tests mutate `JWT_SECRET`, so they share one lock.

use authbits::config::JWT_SECRET_ENV;
use authbits::*;
use std::sync::Mutex;

static LOCK: Mutex<()> = Mutex::new(());

fn with_secret<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
    let _l = LOCK.lock().unwrap_or_else(|p| p.into_inner());
    let saved = std::env::var(JWT_SECRET_ENV).ok();
    match value {
        Some(v) => std::env::set_var(JWT_SECRET_ENV, v),
        None => std::env::remove_var(JWT_SECRET_ENV),
    }
    let r = f();
    match saved {
        Some(v) => std::env::set_var(JWT_SECRET_ENV, v),
        None => std::env::remove_var(JWT_SECRET_ENV),
    }
    r
}

#[test] fn test_from_env_requires_secret() {
    let r = with_secret(None, AuthConfig::from_env);
    assert_eq!(r, Err(AuthbitsError::MissingSecret));
}

#[test] fn test_from_env_reads_secret() {
    let c = with_secret(Some("env-secret"), AuthConfig::from_env).unwrap();
    assert_eq!(c.jwt_secret, "env-secret");
    assert_eq!(c.login_token_hours, 24);
}

#[test] fn test_from_env_or_default_falls_back() {
    let c = with_secret(None, AuthConfig::from_env_or_default);
    assert!(c.uses_fallback_secret());
    assert_eq!(c, AuthConfig::default());
}

#[test] fn test_from_env_or_default_prefers_env() {
    let c = with_secret(Some("env-secret"), AuthConfig::from_env_or_default);
    assert!(!c.uses_fallback_secret());
    assert_eq!(c.jwt_secret, "env-secret");
}
