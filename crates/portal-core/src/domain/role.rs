// ============================================================================
// Portal Core - Role Portal
// File: crates/portal-core/src/domain/role.rs
// Description: The three role portals and their routing constants
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

use portal_shared::constants::{
    ADMIN_PREFIX, DOCTOR_PREFIX, PATIENT_PREFIX, SIDEBAR_COOKIE_ADMIN, SIDEBAR_COOKIE_DOCTOR,
    SIDEBAR_COOKIE_PATIENT,
};

/// Role portal enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Patient, Role::Doctor, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        match s {
            "patient" => Some(Role::Patient),
            "doctor" => Some(Role::Doctor),
            "admin" | "saas-admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Route prefix owned by this portal
    pub fn prefix(&self) -> &'static str {
        match self {
            Role::Patient => PATIENT_PREFIX,
            Role::Doctor => DOCTOR_PREFIX,
            Role::Admin => ADMIN_PREFIX,
        }
    }

    /// Landing page of the portal. Never prefix-matched by the active-path resolver.
    pub fn root_path(&self) -> &'static str {
        self.prefix()
    }

    /// Cookie holding the sidebar-open preference; distinct per portal.
    pub fn sidebar_cookie(&self) -> &'static str {
        match self {
            Role::Patient => SIDEBAR_COOKIE_PATIENT,
            Role::Doctor => SIDEBAR_COOKIE_DOCTOR,
            Role::Admin => SIDEBAR_COOKIE_ADMIN,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Patient => "患者中心",
            Role::Doctor => "医生工作台",
            Role::Admin => "SaaS 管理后台",
        }
    }

    /// Only the doctor portal sits behind the auth gate.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Role::Doctor)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
