//! Roles, their defining permission sets and the display-only hierarchy

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{AuthbitsError, Result};

/// A named bundle of permissions.
///
/// Variant order is declaration order and is significant: role resolution
/// walks roles in this order during its exact-match pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    ClientManager,
    TokenManager,
    UserManager,
    Admin,
}

const USER_PERMS: &[u64] = &[
    READ_USER,
    READ_DASHBOARD,
    READ_CLIENT,
    WRITE_CLIENT, // regular users may register OAuth2 clients
    READ_TOKEN,
    DELETE_TOKEN, // and revoke their own tokens
];

const CLIENT_MANAGER_PERMS: &[u64] = &[
    READ_CLIENT,
    WRITE_CLIENT,
    DELETE_CLIENT,
    READ_TOKEN,
    WRITE_TOKEN,
    DELETE_TOKEN,
    READ_DASHBOARD,
    WRITE_DASHBOARD,
    UPLOAD_FILE,
];

const TOKEN_MANAGER_PERMS: &[u64] = &[READ_TOKEN, WRITE_TOKEN, DELETE_TOKEN];

const USER_MANAGER_PERMS: &[u64] = &[READ_USER, WRITE_USER, DELETE_USER, MANAGE_USERS];

const ADMIN_PERMS: &[u64] = &[ADMIN_ACCESS];

const fn fold(perms: &[u64]) -> u64 {
    let mut mask = 0;
    let mut i = 0;
    while i < perms.len() {
        mask |= perms[i];
        i += 1;
    }
    mask
}

impl Role {
    /// All roles in declaration order
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::User,
            Self::ClientManager,
            Self::TokenManager,
            Self::UserManager,
            Self::Admin,
        ]
    }

    /// Wire identifier
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::ClientManager => "client_manager",
            Self::TokenManager => "token_manager",
            Self::UserManager => "user_manager",
            Self::Admin => "admin",
        }
    }

    /// Human-readable label shown in the UI
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::User => "일반 사용자",
            Self::ClientManager => "클라이언트 관리자",
            Self::TokenManager => "토큰 관리자",
            Self::UserManager => "사용자 관리자",
            Self::Admin => "시스템 관리자",
        }
    }

    /// The permission bits that define this role
    #[must_use]
    pub const fn permissions(&self) -> &'static [u64] {
        match self {
            Self::User => USER_PERMS,
            Self::ClientManager => CLIENT_MANAGER_PERMS,
            Self::TokenManager => TOKEN_MANAGER_PERMS,
            Self::UserManager => USER_MANAGER_PERMS,
            Self::Admin => ADMIN_PERMS,
        }
    }

    /// The defining permissions folded into one mask
    #[must_use]
    pub const fn mask(&self) -> u64 {
        fold(self.permissions())
    }

    /// Roles this role conceptually subsumes.
    ///
    /// Informational only. Permission checks work on masks and never consult
    /// the hierarchy.
    #[must_use]
    pub const fn parents(&self) -> &'static [Role] {
        match self {
            Self::User => &[],
            Self::ClientManager => &[Self::User],
            Self::TokenManager => &[Self::User],
            Self::UserManager => &[Self::User, Self::ClientManager],
            Self::Admin => &[
                Self::User,
                Self::ClientManager,
                Self::TokenManager,
                Self::UserManager,
            ],
        }
    }

    /// True if `other` appears anywhere above this role in the hierarchy
    pub fn subsumes(&self, other: Role) -> bool {
        self.parents()
            .iter()
            .any(|p| *p == other || p.subsumes(other))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Role {
    type Err = AuthbitsError;

    fn from_str(s: &str) -> Result<Self> {
        Role::all()
            .iter()
            .copied()
            .find(|r| r.id() == s)
            .ok_or_else(|| AuthbitsError::UnknownRole(s.to_string()))
    }
}

/// Permission list for a role given by its wire id
pub fn role_permissions(id: &str) -> Result<&'static [u64]> {
    Ok(id.parse::<Role>()?.permissions())
}

/// Display name for a role given by its wire id
pub fn role_display_name(id: &str) -> Result<&'static str> {
    Ok(id.parse::<Role>()?.display_name())
}

/// Parent roles for a role given by its wire id
pub fn role_parents(id: &str) -> Result<&'static [Role]> {
    Ok(id.parse::<Role>()?.parents())
}

// ============================================================================
// User types
// ============================================================================

/// Kind of account, each with a default permission set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// Signs in through OAuth2 only
    Regular,
    /// May manage OAuth2 clients
    Developer,
}

const REGULAR_DEFAULT: u64 = Role::User.mask();
const DEVELOPER_DEFAULT: u64 = Role::ClientManager.mask();

impl UserType {
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Developer => "developer",
        }
    }

    /// Role whose permissions seed this user type
    #[must_use]
    pub const fn base_role(&self) -> Role {
        match self {
            Self::Regular => Role::User,
            Self::Developer => Role::ClientManager,
        }
    }

    /// Default mask, folded once at compile time
    #[must_use]
    pub const fn default_permissions(&self) -> u64 {
        match self {
            Self::Regular => REGULAR_DEFAULT,
            Self::Developer => DEVELOPER_DEFAULT,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for UserType {
    type Err = AuthbitsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "regular" => Ok(Self::Regular),
            "developer" => Ok(Self::Developer),
            other => Err(AuthbitsError::UnknownUserType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_masks() {
        assert_eq!(Role::User.mask(), 0x0959);
        assert_eq!(Role::ClientManager.mask(), 0x59F8);
        assert_eq!(Role::TokenManager.mask(), 0x01C0);
        assert_eq!(Role::UserManager.mask(), 0x0207);
        assert_eq!(Role::Admin.mask(), ADMIN_ACCESS);
    }

    #[test]
    fn test_only_admin_holds_admin_bit() {
        for role in Role::all() {
            let has = role.mask() & ADMIN_ACCESS != 0;
            assert_eq!(has, *role == Role::Admin, "{}", role);
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for role in Role::all() {
            assert_eq!(role.id().parse::<Role>().unwrap(), *role);
        }
        assert_eq!(
            "root".parse::<Role>(),
            Err(AuthbitsError::UnknownRole("root".into()))
        );
    }

    #[test]
    fn test_hierarchy_is_acyclic() {
        for role in Role::all() {
            assert!(!role.subsumes(*role), "{} subsumes itself", role);
        }
        assert!(Role::Admin.subsumes(Role::User));
        assert!(Role::UserManager.subsumes(Role::User));
        assert!(!Role::User.subsumes(Role::Admin));
        assert!(!Role::TokenManager.subsumes(Role::ClientManager));
    }

    #[test]
    fn test_string_lookups() {
        assert_eq!(role_display_name("token_manager").unwrap(), "토큰 관리자");
        assert_eq!(role_permissions("admin").unwrap(), &[ADMIN_ACCESS]);
        assert_eq!(
            role_parents("user_manager").unwrap(),
            &[Role::User, Role::ClientManager]
        );
        assert!(role_parents("nobody").is_err());
    }

    #[test]
    fn test_user_type_defaults() {
        assert_eq!(UserType::Regular.default_permissions(), Role::User.mask());
        assert_eq!(
            UserType::Developer.default_permissions(),
            Role::ClientManager.mask()
        );
        assert_eq!(UserType::Regular.base_role(), Role::User);
        assert_eq!(UserType::Developer.base_role(), Role::ClientManager);
        for ut in [UserType::Regular, UserType::Developer] {
            assert_eq!(ut.default_permissions(), ut.base_role().mask());
            assert_eq!(ut.to_string().parse::<UserType>().unwrap(), ut);
        }
        assert_eq!(UserType::Developer.to_string(), "developer");
        assert_eq!("developer".parse::<UserType>().unwrap(), UserType::Developer);
        assert!("guest".parse::<UserType>().is_err());
    }
}
