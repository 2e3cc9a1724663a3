//! Permission bit constants and aggregate masks
//!
//! Each bit position belongs to exactly one permission for the lifetime of the
//! system. Bit 30 is reserved for the admin marker and is never part of an
//! ordinary permission set.

use serde::{Deserialize, Serialize};

use crate::error::{AuthbitsError, Result};

// User permissions
pub const READ_USER: u64 = 1;
pub const WRITE_USER: u64 = 1 << 1;
pub const DELETE_USER: u64 = 1 << 2;

// Client permissions
pub const READ_CLIENT: u64 = 1 << 3;
pub const WRITE_CLIENT: u64 = 1 << 4;
pub const DELETE_CLIENT: u64 = 1 << 5;

// Token permissions
pub const READ_TOKEN: u64 = 1 << 6;
pub const WRITE_TOKEN: u64 = 1 << 7;
pub const DELETE_TOKEN: u64 = 1 << 8;

// System permissions
pub const MANAGE_USERS: u64 = 1 << 9;
pub const MANAGE_SYSTEM: u64 = 1 << 10;

// Dashboard permissions
pub const READ_DASHBOARD: u64 = 1 << 11;
pub const WRITE_DASHBOARD: u64 = 1 << 12;
pub const MANAGE_DASHBOARD: u64 = 1 << 13;

// Upload permissions
pub const UPLOAD_FILE: u64 = 1 << 14;

/// Superuser marker, disjoint from every other permission
pub const ADMIN_ACCESS: u64 = 1 << 30;

/// Label used when a mask matches no role
pub const CUSTOM_ROLE_NAME: &str = "사용자 정의";

/// A defined permission: wire name, bit value and display name.
///
/// Serializes as its wire name and deserializes only from a defined one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub struct PermissionDef {
    pub id: &'static str,
    pub bit: u64,
    pub name: &'static str,
}

impl From<PermissionDef> for &'static str {
    fn from(p: PermissionDef) -> Self {
        p.id
    }
}

impl TryFrom<String> for PermissionDef {
    type Error = AuthbitsError;

    fn try_from(id: String) -> Result<Self> {
        permission_def(&id).ok_or(AuthbitsError::UnknownPermission(id))
    }
}

impl<'de> Deserialize<'de> for PermissionDef {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        PermissionDef::try_from(id).map_err(serde::de::Error::custom)
    }
}

const fn def(id: &'static str, bit: u64, name: &'static str) -> PermissionDef {
    PermissionDef { id, bit, name }
}

/// Every defined permission in declaration order (admin last)
pub const PERMISSIONS: &[PermissionDef] = &[
    def("read_user", READ_USER, "사용자 조회"),
    def("write_user", WRITE_USER, "사용자 수정"),
    def("delete_user", DELETE_USER, "사용자 삭제"),
    def("read_client", READ_CLIENT, "클라이언트 조회"),
    def("write_client", WRITE_CLIENT, "클라이언트 수정"),
    def("delete_client", DELETE_CLIENT, "클라이언트 삭제"),
    def("read_token", READ_TOKEN, "토큰 조회"),
    def("write_token", WRITE_TOKEN, "토큰 수정"),
    def("delete_token", DELETE_TOKEN, "토큰 삭제"),
    def("manage_users", MANAGE_USERS, "사용자 관리"),
    def("manage_system", MANAGE_SYSTEM, "시스템 관리"),
    def("read_dashboard", READ_DASHBOARD, "대시보드 조회"),
    def("write_dashboard", WRITE_DASHBOARD, "대시보드 수정"),
    def("manage_dashboard", MANAGE_DASHBOARD, "대시보드 관리"),
    def("upload_file", UPLOAD_FILE, "파일 업로드"),
    def("admin_access", ADMIN_ACCESS, "관리자 접근"),
];

const fn fold_ordinary(defs: &[PermissionDef]) -> u64 {
    let mut mask = 0;
    let mut i = 0;
    while i < defs.len() {
        if defs[i].bit != ADMIN_ACCESS {
            mask |= defs[i].bit;
        }
        i += 1;
    }
    mask
}

/// OR of every ordinary permission
pub const ALL_PERMISSIONS_MASK: u64 = fold_ordinary(PERMISSIONS);

/// OR of every defined permission except the admin bit
#[inline]
pub const fn all_permissions_mask() -> u64 {
    ALL_PERMISSIONS_MASK
}

/// The admin bit on its own
#[inline]
pub const fn admin_permission() -> u64 {
    ADMIN_ACCESS
}

/// All permission values except admin, in declaration order
pub fn all_permissions() -> Vec<u64> {
    PERMISSIONS
        .iter()
        .filter(|p| p.bit != ADMIN_ACCESS)
        .map(|p| p.bit)
        .collect()
}

/// Look up a permission definition by its wire name
pub fn permission_def(id: &str) -> Option<PermissionDef> {
    PERMISSIONS.iter().find(|p| p.id == id).copied()
}

/// Look up a permission value by its wire name
pub fn permission_value(id: &str) -> Option<u64> {
    permission_def(id).map(|p| p.bit)
}

/// Display name for a single permission bit
pub fn permission_display_name(bit: u64) -> Option<&'static str> {
    PERMISSIONS.iter().find(|p| p.bit == bit).map(|p| p.name)
}
