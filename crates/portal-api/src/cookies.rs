// ============================================================================
// Portal API - Cookie State Store
// File: crates/portal-api/src/cookies.rs
// ============================================================================
//! `ClientStateStore` over the browser's cookies.
//!
//! Reads come from the request `Cookie` header, writes are collected and
//! emitted as `Set-Cookie` headers on the response.

use std::collections::HashMap;

use async_trait::async_trait;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::Response;
use parking_lot::Mutex;
use tracing::warn;

use portal_core::error::DomainError;
use portal_core::repositories::ClientStateStore;
use portal_shared::config::ClientStateSettings;

#[derive(Default)]
struct Jar {
    values: HashMap<String, String>,
    writes: Vec<(String, Option<String>)>,
}

pub struct CookieStateStore {
    jar: Mutex<Jar>,
    max_age: i64,
    secure: bool,
    /// Cookies never exposed to scripts.
    http_only: Vec<String>,
}

impl CookieStateStore {
    pub fn from_headers(headers: &HeaderMap, settings: &ClientStateSettings) -> Self {
        let values = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();

        Self {
            jar: Mutex::new(Jar {
                values,
                writes: Vec::new(),
            }),
            max_age: settings.cookie_max_age_seconds,
            secure: settings.secure_cookies,
            http_only: vec![settings.auth_key.clone()],
        }
    }

    /// `Set-Cookie` values for every write made through this store.
    pub fn set_cookie_headers(&self) -> Vec<HeaderValue> {
        let jar = self.jar.lock();
        jar.writes
            .iter()
            .filter_map(|(key, value)| {
                let cookie = self.render(key, value.as_deref());
                HeaderValue::from_str(&cookie)
                    .inspect_err(|e| warn!("Dropping unencodable cookie {}: {}", key, e))
                    .ok()
            })
            .collect()
    }

    pub fn apply(&self, response: &mut Response) {
        for value in self.set_cookie_headers() {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    fn render(&self, key: &str, value: Option<&str>) -> String {
        let mut cookie = match value {
            Some(value) => format!("{}={}; Path=/; Max-Age={}; SameSite=Lax", key, value, self.max_age),
            None => format!("{}=; Path=/; Max-Age=0; SameSite=Lax", key),
        };
        if self.http_only.iter().any(|k| k == key) {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

fn is_cookie_safe(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_graphic() && !matches!(b, b';' | b',' | b'"' | b'\\' | b'='))
}

#[async_trait]
impl ClientStateStore for CookieStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.jar.lock().values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        if !is_cookie_safe(key) || !is_cookie_safe(value) {
            return Err(DomainError::StorageUnavailable(format!(
                "cannot store {}={} in a cookie",
                key, value
            )));
        }
        let mut jar = self.jar.lock();
        jar.values.insert(key.to_string(), value.to_string());
        jar.writes.push((key.to_string(), Some(value.to_string())));
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DomainError> {
        let mut jar = self.jar.lock();
        jar.values.remove(key);
        jar.writes.push((key.to_string(), None));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_shared::config::StateBackend;

    fn settings() -> ClientStateSettings {
        ClientStateSettings {
            auth_key: "doctor_authenticated".into(),
            cookie_max_age_seconds: 604800,
            secure_cookies: false,
            backend: StateBackend::Cookie,
            file_path: None,
        }
    }

    #[tokio::test]
    async fn test_reads_request_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("sidebar_state_doctor=true; theme=dark"),
        );
        let store = CookieStateStore::from_headers(&headers, &settings());

        assert_eq!(store.get("sidebar_state_doctor").await.unwrap().as_deref(), Some("true"));
        assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));
        assert!(store.get("doctor_authenticated").await.unwrap().is_none());
        assert!(store.set_cookie_headers().is_empty());
    }

    #[tokio::test]
    async fn test_writes_become_set_cookie() {
        let store = CookieStateStore::from_headers(&HeaderMap::new(), &settings());
        store.set("sidebar_state_patient", "false").await.unwrap();
        store.set("doctor_authenticated", "true").await.unwrap();
        store.remove("doctor_authenticated").await.unwrap();

        let headers: Vec<String> = store
            .set_cookie_headers()
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect();

        assert_eq!(headers.len(), 3);
        assert_eq!(
            headers[0],
            "sidebar_state_patient=false; Path=/; Max-Age=604800; SameSite=Lax"
        );
        assert!(headers[1].contains("HttpOnly"));
        assert!(headers[2].starts_with("doctor_authenticated=; Path=/; Max-Age=0"));
    }

    #[tokio::test]
    async fn test_unsafe_value_rejected() {
        let store = CookieStateStore::from_headers(&HeaderMap::new(), &settings());
        assert!(store.set("k", "a;b").await.is_err());
        assert!(store.set_cookie_headers().is_empty());
    }
}
