//! # Portal API
//! 
//! HTTP handlers, auth-gate middleware, cookie-backed client state and the router.

pub mod handlers;
pub mod middleware;
pub mod cookies;
pub mod error;
pub mod extract;
pub mod icons;
pub mod response;
pub mod router;
pub mod state;


pub use router::build_router;
pub use state::AppState;
