use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::warn;

use portal_shared::config::CorsSettings;

use crate::handlers;
use crate::middleware::auth_gate::doctor_gate;
use crate::state::AppState;

pub fn build_router(state: AppState, cors: &CorsSettings) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/api/v1/portals/{role}/navigation",
            get(handlers::navigation::navigation),
        )
        .route("/api/v1/portals/{role}/shell", get(handlers::navigation::shell))
        .route(
            "/api/v1/portals/{role}/layout",
            post(handlers::navigation::layout_event),
        )
        .route(
            "/api/v1/portals/{role}/sidebar/activate",
            post(handlers::navigation::activate),
        )
        .route("/api/v1/doctor/auth/status", get(handlers::auth::status))
        .route("/api/v1/doctor/auth/login", post(handlers::auth::login))
        .route("/api/v1/doctor/auth/logout", post(handlers::auth::logout))
        .route(
            "/api/v1/flows/health-advice",
            post(handlers::flows::health_advice),
        )
        .route(
            "/api/v1/flows/health-report",
            post(handlers::flows::health_report),
        )
        .route("/dashboard", get(handlers::pages::page))
        .route("/dashboard/", get(handlers::pages::page))
        .route("/dashboard/{*rest}", get(handlers::pages::page))
        .route("/saas-admin", get(handlers::pages::page))
        .route("/saas-admin/", get(handlers::pages::page))
        .route("/saas-admin/{*rest}", get(handlers::pages::page));

    // Doctor pages sit behind the auth gate. A catch-all never matches an
    // empty tail, so the trailing-slash root is routed explicitly.
    let doctor_pages = Router::new()
        .route("/doctor", get(handlers::pages::page))
        .route("/doctor/", get(handlers::pages::page))
        .route("/doctor/{*rest}", get(handlers::pages::page))
        .route_layer(middleware::from_fn_with_state(state.clone(), doctor_gate));

    Router::new()
        .merge(public_routes)
        .merge(doctor_pages)
        .with_state(state)
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

fn cors_layer(cors: &CorsSettings) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match cors.allowed_origin.as_deref() {
        Some(origin) => match HeaderValue::from_str(origin) {
            Ok(value) => base.allow_origin(value),
            Err(_) => {
                warn!(origin, "Invalid CORS origin, falling back to any origin");
                base.allow_origin(Any)
            }
        },
        None => base.allow_origin(Any),
    }
}
