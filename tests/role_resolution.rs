//! Role resolution tests
//!
//! Verify the ordering rules used to pick one label for a mask that may hold
//! bits from several roles.

use authbits::*;

// ============================================================================
// Admin short-circuit
// ============================================================================

/// The admin bit wins no matter what else is set
#[test]
fn admin_bit_beats_every_role() {
    for role in Role::all() {
        let m = role.mask() | ADMIN_ACCESS;
        assert_eq!(role_name(m), Role::Admin.display_name());
        assert_eq!(resolve_role(m), Some(Role::Admin));
    }
}

/// Unknown high bits do not disturb the admin check
#[test]
fn admin_with_unknown_bits() {
    assert_eq!(role_name(ADMIN_ACCESS | (1 << 63)), "시스템 관리자");
}

// ============================================================================
// Declaration order
// ============================================================================

/// Each role's own mask resolves to itself
#[test]
fn canonical_masks_resolve_to_their_role() {
    for role in Role::all() {
        assert_eq!(resolve_role(role.mask()), Some(*role), "{}", role);
    }
}

/// A mask holding several roles' sets gets the earliest declared one,
/// not the most specific one
#[test]
fn first_declared_role_wins() {
    let m = Role::TokenManager.mask() | Role::UserManager.mask();
    assert_eq!(resolve_role(m), Some(Role::TokenManager));

    // Together these cover the whole user set, so user is picked first
    let m = Role::ClientManager.mask() | Role::UserManager.mask();
    assert_eq!(resolve_role(m), Some(Role::User));

    let m = Role::User.mask() | Role::ClientManager.mask() | Role::UserManager.mask();
    assert_eq!(role_name(m), "일반 사용자");
}

/// Extra bits beyond a role's set do not prevent a match
#[test]
fn superset_still_matches() {
    let m = Role::UserManager.mask() | MANAGE_SYSTEM | MANAGE_DASHBOARD;
    assert_eq!(resolve_role(m), Some(Role::UserManager));
}

// ============================================================================
// No match
// ============================================================================

/// Missing any single bit of a role's set drops the role
#[test]
fn one_missing_bit_drops_the_role() {
    for &bit in Role::TokenManager.permissions() {
        let m = remove_permissions(Role::TokenManager.mask(), &[bit]);
        assert_eq!(role_name(m), "사용자 정의");
    }
}

/// The fallback priority lists every non-admin role exactly once
#[test]
fn fallback_priority_covers_ordinary_roles() {
    assert_eq!(FALLBACK_PRIORITY.len(), 4);
    for role in Role::all().iter().filter(|r| **r != Role::Admin) {
        assert!(FALLBACK_PRIORITY.contains(role));
    }
    assert_eq!(FALLBACK_PRIORITY[0], Role::UserManager);
}

/// String-keyed lookups agree with the enum
#[test]
fn string_lookups_match_enum() {
    for role in Role::all() {
        assert_eq!(role_display_name(role.id()).unwrap(), role.display_name());
        assert_eq!(role_permissions(role.id()).unwrap(), role.permissions());
        assert_eq!(role_parents(role.id()).unwrap(), role.parents());
    }
    assert_eq!(
        role_display_name("superuser"),
        Err(AuthbitsError::UnknownRole("superuser".into()))
    );
}
