//! # Portal Shared
//! 
//! Shared configuration, constants, path utilities and telemetry for the care portal.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::AppError;
