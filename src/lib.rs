//! authbits - Bitmask permissions, role labels and client storage keys
//!
//! Everything here is constant data plus pure functions over plain `u64`
//! masks. Callers own the actual user masks and pass them in by value.

pub mod auth;
pub mod bits;
pub mod config;
pub mod constants;
pub mod error;
pub mod resolve;
pub mod roles;
pub mod storage;

pub use bits::{
    add_permissions, default_permissions, has_all_permissions, has_any_permission,
    has_permission, hex_to_permissions, is_admin, permission_ids, permission_names,
    permissions_from_names, permissions_to_hex, remove_permissions,
};
pub use config::AuthConfig;
pub use constants::*;
pub use error::{AuthbitsError, Result};
pub use resolve::{resolve_role, role_name, FALLBACK_PRIORITY};
pub use roles::{role_display_name, role_parents, role_permissions, Role, UserType};
pub use storage::{
    all_auth_keys, all_token_keys, refresh_token_key, token_key, StorageArea, TokenType,
};
