use std::sync::Arc;

use axum::http::HeaderMap;
use axum::response::Response;

use portal_core::navigation::PortalNavigation;
use portal_core::repositories::ClientStateStore;
use portal_core::services::{DoctorSession, FlowService, GateRules};
use portal_shared::config::ClientStateSettings;

use crate::cookies::CookieStateStore;

#[derive(Clone)]
pub struct AppState {
    pub navigation: Arc<PortalNavigation>,
    pub flows: Arc<FlowService>,
    pub gate_rules: GateRules,
    pub client_state: ClientStateSettings,
    /// Process-wide store; `None` keeps client state in cookies.
    pub shared_store: Option<Arc<dyn ClientStateStore>>,
}

/// Client-state store seen by one request.
pub struct RequestStore {
    store: Arc<dyn ClientStateStore>,
    cookies: Option<Arc<CookieStateStore>>,
}

impl RequestStore {
    pub fn store(&self) -> Arc<dyn ClientStateStore> {
        self.store.clone()
    }

    /// Emit `Set-Cookie` for writes made through the cookie jar, if any.
    pub fn apply(&self, response: &mut Response) {
        if let Some(cookies) = &self.cookies {
            cookies.apply(response);
        }
    }
}

impl AppState {
    pub fn client_store(&self, headers: &HeaderMap) -> RequestStore {
        match &self.shared_store {
            Some(store) => RequestStore {
                store: store.clone(),
                cookies: None,
            },
            None => {
                let cookies = Arc::new(CookieStateStore::from_headers(headers, &self.client_state));
                RequestStore {
                    store: cookies.clone(),
                    cookies: Some(cookies),
                }
            }
        }
    }

    /// Doctor session for the request's client state, flag already loaded.
    pub async fn doctor_session(
        &self,
        store: &RequestStore,
    ) -> DoctorSession<dyn ClientStateStore> {
        DoctorSession::mount(store.store(), self.client_state.auth_key.clone(), self.gate_rules.clone()).await
    }
}
