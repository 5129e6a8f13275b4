//! Application-wide constants

pub const PATIENT_PREFIX: &str = "/dashboard";
pub const DOCTOR_PREFIX: &str = "/doctor";
pub const ADMIN_PREFIX: &str = "/saas-admin";

pub const DOCTOR_LOGIN_PATH: &str = "/doctor/auth/login";

/// Storage key of the doctor portal auth flag.
pub const DOCTOR_AUTH_KEY: &str = "doctor_authenticated";

pub const SIDEBAR_COOKIE_PATIENT: &str = "sidebar_state_patient";
pub const SIDEBAR_COOKIE_DOCTOR: &str = "sidebar_state_doctor";
pub const SIDEBAR_COOKIE_ADMIN: &str = "sidebar_state_admin";

/// Seven days.
pub const DEFAULT_COOKIE_MAX_AGE: i64 = 60 * 60 * 24 * 7;

pub const MAX_NAV_DEPTH: usize = 2;
