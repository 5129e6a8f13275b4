// ============================================================================
// Portal Core - Doctor Auth Gate
// File: crates/portal-core/src/services/auth_gate.rs
// ============================================================================
//! Client-side auth gate of the doctor portal.
//!
//! The gate is a three-state machine driven by pure functions. The session
//! object only reads and writes the persisted flag and reports where the
//! caller should go; the routing layer performs the redirect.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use portal_shared::constants::{DOCTOR_LOGIN_PATH, DOCTOR_PREFIX};
use portal_shared::utils::{is_segment_prefix, normalize_path, parse_flag};

use crate::repositories::ClientStateStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    Loading,
    Unauthenticated,
    Authenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    FlagLoaded(bool),
    StorageUnavailable,
    LoggedIn,
    LoggedOut,
}

/// What the routing layer should do with a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "location", rename_all = "snake_case")]
pub enum GateDecision {
    /// Check still running; render nothing protected yet.
    Pending,
    Allow,
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateRules {
    pub protected_prefix: String,
    pub login_path: String,
    pub protected_root: String,
    /// Paths under the prefix reachable without the flag. The login path is always public.
    pub public_paths: Vec<String>,
}

impl Default for GateRules {
    fn default() -> Self {
        Self {
            protected_prefix: DOCTOR_PREFIX.to_string(),
            login_path: DOCTOR_LOGIN_PATH.to_string(),
            protected_root: DOCTOR_PREFIX.to_string(),
            public_paths: Vec::new(),
        }
    }
}

impl GateRules {
    fn is_public(&self, path: &str) -> bool {
        path == self.login_path || self.public_paths.iter().any(|p| p == path)
    }
}

/// Next status for `event`.
///
/// The persisted flag only settles a `Loading` session: once decided, explicit
/// login and logout own the status and a late read is ignored.
pub fn transition(status: AuthStatus, event: AuthEvent) -> AuthStatus {
    match (status, event) {
        (AuthStatus::Loading, AuthEvent::FlagLoaded(true)) => AuthStatus::Authenticated,
        (AuthStatus::Loading, AuthEvent::FlagLoaded(false)) => AuthStatus::Unauthenticated,
        (decided, AuthEvent::FlagLoaded(_)) => decided,
        (_, AuthEvent::LoggedIn) => AuthStatus::Authenticated,
        (_, AuthEvent::StorageUnavailable | AuthEvent::LoggedOut) => AuthStatus::Unauthenticated,
    }
}

pub fn route_decision(status: AuthStatus, path: &str, rules: &GateRules) -> GateDecision {
    let path = normalize_path(path);
    match status {
        AuthStatus::Loading => GateDecision::Pending,
        AuthStatus::Unauthenticated => {
            if is_segment_prefix(&path, &rules.protected_prefix) && !rules.is_public(&path) {
                GateDecision::Redirect(rules.login_path.clone())
            } else {
                GateDecision::Allow
            }
        }
        AuthStatus::Authenticated => {
            if path == rules.login_path {
                GateDecision::Redirect(rules.protected_root.clone())
            } else {
                GateDecision::Allow
            }
        }
    }
}

/// Auth state of one client, backed by a persisted flag.
pub struct DoctorSession<S: ClientStateStore + ?Sized> {
    store: Arc<S>,
    key: String,
    rules: GateRules,
    status: AuthStatus,
}

impl<S: ClientStateStore + ?Sized> DoctorSession<S> {
    /// Session still in `Loading`; call [`DoctorSession::load`] before trusting it.
    pub fn new(store: Arc<S>, key: impl Into<String>, rules: GateRules) -> Self {
        Self {
            store,
            key: key.into(),
            rules,
            status: AuthStatus::Loading,
        }
    }

    /// New session with the persisted flag already read.
    pub async fn mount(store: Arc<S>, key: impl Into<String>, rules: GateRules) -> Self {
        let mut session = Self::new(store, key, rules);
        session.load().await;
        session
    }

    pub async fn load(&mut self) -> AuthStatus {
        let event = match self.store.get(&self.key).await {
            Ok(value) => AuthEvent::FlagLoaded(value.as_deref().is_some_and(parse_flag)),
            Err(e) => {
                warn!("Auth flag unreadable, treating as unauthenticated: {}", e);
                AuthEvent::StorageUnavailable
            }
        };
        self.status = transition(self.status, event);
        self.status
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    pub fn rules(&self) -> &GateRules {
        &self.rules
    }

    pub fn decide(&self, path: &str) -> GateDecision {
        route_decision(self.status, path, &self.rules)
    }

    /// Mock login. Returns where to go next.
    pub async fn login_doctor(&mut self) -> String {
        match self.store.set(&self.key, "true").await {
            Ok(()) => {
                self.status = transition(self.status, AuthEvent::LoggedIn);
                info!("Doctor logged in");
                self.rules.protected_root.clone()
            }
            Err(e) => {
                warn!("Failed to persist auth flag, staying unauthenticated: {}", e);
                self.status = transition(self.status, AuthEvent::StorageUnavailable);
                self.rules.login_path.clone()
            }
        }
    }

    pub async fn logout_doctor(&mut self) -> String {
        if let Err(e) = self.store.remove(&self.key).await {
            warn!("Failed to clear auth flag: {}", e);
        }
        self.status = transition(self.status, AuthEvent::LoggedOut);
        info!("Doctor logged out");
        self.rules.login_path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use crate::repositories::MockClientStateStore;
    use crate::test_support::RecordingStore;

    const KEY: &str = "doctor_authenticated";

    #[test]
    fn test_loading_never_allows() {
        let rules = GateRules::default();
        assert_eq!(route_decision(AuthStatus::Loading, "/doctor", &rules), GateDecision::Pending);
        assert_eq!(
            route_decision(AuthStatus::Loading, "/doctor/auth/login", &rules),
            GateDecision::Pending
        );
    }

    #[test]
    fn test_unauthenticated_routes() {
        let rules = GateRules::default();
        let status = AuthStatus::Unauthenticated;
        assert_eq!(
            route_decision(status, "/doctor/patients", &rules),
            GateDecision::Redirect("/doctor/auth/login".into())
        );
        assert_eq!(route_decision(status, "/doctor/auth/login", &rules), GateDecision::Allow);
        assert_eq!(route_decision(status, "/dashboard", &rules), GateDecision::Allow);
        assert_eq!(route_decision(status, "/doctorate", &rules), GateDecision::Allow);
    }

    #[test]
    fn test_extra_public_paths() {
        let rules = GateRules {
            public_paths: vec!["/doctor/auth/register".into()],
            ..GateRules::default()
        };
        assert_eq!(
            route_decision(AuthStatus::Unauthenticated, "/doctor/auth/register", &rules),
            GateDecision::Allow
        );
    }

    #[test]
    fn test_transitions() {
        assert_eq!(
            transition(AuthStatus::Loading, AuthEvent::FlagLoaded(true)),
            AuthStatus::Authenticated
        );
        assert_eq!(
            transition(AuthStatus::Loading, AuthEvent::StorageUnavailable),
            AuthStatus::Unauthenticated
        );
        assert_eq!(
            transition(AuthStatus::Authenticated, AuthEvent::LoggedOut),
            AuthStatus::Unauthenticated
        );
    }

    #[test]
    fn test_late_flag_read_keeps_decided_status() {
        assert_eq!(
            transition(AuthStatus::Authenticated, AuthEvent::FlagLoaded(false)),
            AuthStatus::Authenticated
        );
        assert_eq!(
            transition(AuthStatus::Unauthenticated, AuthEvent::FlagLoaded(true)),
            AuthStatus::Unauthenticated
        );
        assert_eq!(
            transition(AuthStatus::Unauthenticated, AuthEvent::LoggedIn),
            AuthStatus::Authenticated
        );
    }

    #[tokio::test]
    async fn test_flag_accepts_same_values_as_sidebar_preference() {
        let store = Arc::new(RecordingStore::with(KEY, "1"));
        let session = DoctorSession::mount(store, KEY, GateRules::default()).await;
        assert_eq!(session.status(), AuthStatus::Authenticated);
    }

    #[tokio::test]
    async fn test_new_session_starts_loading() {
        let store = Arc::new(RecordingStore::default());
        let mut session = DoctorSession::new(store, KEY, GateRules::default());
        assert_eq!(session.status(), AuthStatus::Loading);
        assert_eq!(session.load().await, AuthStatus::Unauthenticated);
    }

    #[tokio::test]
    async fn test_no_flag_redirects_to_login() {
        let store = Arc::new(RecordingStore::default());
        let session = DoctorSession::mount(store, KEY, GateRules::default()).await;
        assert_eq!(
            session.decide("/doctor/patients"),
            GateDecision::Redirect("/doctor/auth/login".into())
        );
    }

    #[tokio::test]
    async fn test_login_then_login_page_redirects_home() {
        let store = Arc::new(RecordingStore::default());
        let mut session = DoctorSession::mount(store.clone(), KEY, GateRules::default()).await;

        assert_eq!(session.login_doctor().await, "/doctor");
        assert_eq!(session.status(), AuthStatus::Authenticated);
        assert_eq!(session.decide("/doctor/auth/login"), GateDecision::Redirect("/doctor".into()));

        // Survives a reload
        let reloaded = DoctorSession::mount(store, KEY, GateRules::default()).await;
        assert_eq!(reloaded.status(), AuthStatus::Authenticated);
    }

    #[tokio::test]
    async fn test_logout_clears_flag() {
        let store = Arc::new(RecordingStore::with(KEY, "true"));
        let mut session = DoctorSession::mount(store.clone(), KEY, GateRules::default()).await;
        assert_eq!(session.status(), AuthStatus::Authenticated);

        assert_eq!(session.logout_doctor().await, "/doctor/auth/login");
        assert!(store.value(KEY).is_none());

        let reloaded = DoctorSession::mount(store, KEY, GateRules::default()).await;
        assert_eq!(
            reloaded.decide("/doctor/schedule"),
            GateDecision::Redirect("/doctor/auth/login".into())
        );
    }

    #[tokio::test]
    async fn test_storage_failure_is_unauthenticated() {
        let mut store = MockClientStateStore::new();
        store
            .expect_get()
            .returning(|_| Err(DomainError::StorageUnavailable("disk full".into())));
        store
            .expect_set()
            .returning(|_, _| Err(DomainError::StorageUnavailable("disk full".into())));

        let mut session = DoctorSession::mount(Arc::new(store), KEY, GateRules::default()).await;
        assert_eq!(session.status(), AuthStatus::Unauthenticated);

        assert_eq!(session.login_doctor().await, "/doctor/auth/login");
        assert_eq!(session.status(), AuthStatus::Unauthenticated);
    }
}
