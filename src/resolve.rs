//! Role name resolution
//!
//! Maps an arbitrary mask back to one role label for display. A mask may hold
//! bits from several roles, so resolution picks deterministically:
//!
//! 1. admin bit set → admin, whatever else is set
//! 2. first role, in declaration order, whose whole set is held
//! 3. first role in [`FALLBACK_PRIORITY`] whose whole set is held
//! 4. no role → [`CUSTOM_ROLE_NAME`]

use tracing::trace;

use crate::bits::{has_all_permissions, is_admin};
use crate::constants::CUSTOM_ROLE_NAME;
use crate::roles::Role;

/// Fallback order, most powerful first. Differs from declaration order.
pub const FALLBACK_PRIORITY: [Role; 4] = [
    Role::UserManager,
    Role::ClientManager,
    Role::TokenManager,
    Role::User,
];

/// Best-matching role for `mask`, or `None` when no role's set is held
pub fn resolve_role(mask: u64) -> Option<Role> {
    if is_admin(mask) {
        trace!(mask, "resolved admin by admin bit");
        return Some(Role::Admin);
    }

    let exact = Role::all()
        .iter()
        .copied()
        .filter(|r| *r != Role::Admin)
        .find(|r| has_all_permissions(mask, r.permissions()));
    if let Some(role) = exact {
        trace!(mask, role = role.id(), "resolved by declaration order");
        return Some(role);
    }

    // TODO: confirm with product whether this pass should replace the one
    // above; it tests the same roles so it cannot match when that one missed.
    let fallback = FALLBACK_PRIORITY
        .iter()
        .copied()
        .find(|r| has_all_permissions(mask, r.permissions()));
    if let Some(role) = fallback {
        trace!(mask, role = role.id(), "resolved by fallback priority");
        return Some(role);
    }

    trace!(mask, "no role matched");
    None
}

/// Display label for `mask`; never fails
pub fn role_name(mask: u64) -> &'static str {
    resolve_role(mask).map_or(CUSTOM_ROLE_NAME, |r| r.display_name())
}
