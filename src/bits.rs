//! Permission bit algebra (pure functions over plain `u64` masks)

use tracing::debug;

use crate::constants::{ADMIN_ACCESS, PERMISSIONS};
use crate::error::{AuthbitsError, Result};
use crate::roles::Role;

/// True if every bit of `permission` is set in `mask`. Zero is always satisfied.
#[inline]
pub const fn has_permission(mask: u64, permission: u64) -> bool {
    (mask & permission) == permission
}

/// True if at least one of `permissions` is satisfied. Empty → false.
#[inline]
pub fn has_any_permission(mask: u64, permissions: &[u64]) -> bool {
    permissions.iter().any(|&p| has_permission(mask, p))
}

/// True if all of `permissions` are satisfied. Empty → true.
#[inline]
pub fn has_all_permissions(mask: u64, permissions: &[u64]) -> bool {
    permissions.iter().all(|&p| has_permission(mask, p))
}

/// OR every entry of `to_add` into `mask`
#[inline]
pub fn add_permissions(mask: u64, to_add: &[u64]) -> u64 {
    to_add.iter().fold(mask, |acc, &p| acc | p)
}

/// Clear every entry of `to_remove` from `mask`
#[inline]
pub fn remove_permissions(mask: u64, to_remove: &[u64]) -> u64 {
    to_remove.iter().fold(mask, |acc, &p| acc & !p)
}

/// True if the admin bit is set, whatever else is
#[inline]
pub const fn is_admin(mask: u64) -> bool {
    has_permission(mask, ADMIN_ACCESS)
}

/// Default mask for a new account (the user role's permissions)
#[inline]
pub const fn default_permissions() -> u64 {
    Role::User.mask()
}

// ============================================================================
// Hex codec
// ============================================================================

/// Format a mask as `0x` followed by uppercase hex digits
pub fn permissions_to_hex(mask: u64) -> String {
    format!("0x{:X}", mask)
}

/// Parse a mask produced by [`permissions_to_hex`].
///
/// Surrounding whitespace, a `0x`/`0X` prefix and lowercase digits are
/// accepted. Anything else, including signs and values wider than 64 bits,
/// is rejected with `InvalidFormat`.
pub fn hex_to_permissions(input: &str) -> Result<u64> {
    let s = input.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        debug!(input, "rejected malformed permission mask");
        return Err(AuthbitsError::invalid_format(input));
    }
    u64::from_str_radix(digits, 16).map_err(|e| {
        debug!(input, error = %e, "permission mask out of range");
        AuthbitsError::invalid_format(input)
    })
}

// ============================================================================
// Names
// ============================================================================

/// Display names of every defined permission held by `mask`, in bit order
pub fn permission_names(mask: u64) -> Vec<&'static str> {
    PERMISSIONS
        .iter()
        .filter(|p| has_permission(mask, p.bit))
        .map(|p| p.name)
        .collect()
}

/// Wire names of every defined permission held by `mask`, in bit order
pub fn permission_ids(mask: u64) -> Vec<&'static str> {
    PERMISSIONS
        .iter()
        .filter(|p| has_permission(mask, p.bit))
        .map(|p| p.id)
        .collect()
}

/// Build a mask from wire names
pub fn permissions_from_names(names: &[&str]) -> Result<u64> {
    names.iter().try_fold(0, |acc, name| {
        PERMISSIONS
            .iter()
            .find(|p| p.id == *name)
            .map(|p| acc | p.bit)
            .ok_or_else(|| AuthbitsError::UnknownPermission(name.to_string()))
    })
}
