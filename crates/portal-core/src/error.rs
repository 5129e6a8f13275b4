//! Domain errors

use thiserror::Error;

use crate::domain::Role;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Navigation item has an empty title: {0}")]
    EmptyNavTitle(String),

    #[error("Duplicate navigation path in {role} portal: {path}")]
    DuplicateNavPath { role: Role, path: String },

    #[error("Navigation path {path} is outside the {role} portal")]
    NavPathOutsidePortal { role: Role, path: String },

    #[error("Navigation path {0} is not in canonical form")]
    NonCanonicalNavPath(String),

    #[error("Navigation tree too deep at {0}")]
    NavTreeTooDeep(String),

    #[error("Unknown navigation item: {0}")]
    UnknownNavItem(String),

    #[error("Navigation item is not a section: {0}")]
    NotASection(String),

    #[error("Client state storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Invalid flow input: {0}")]
    InvalidFlowInput(String),

    #[error("Flow failed: {0}")]
    FlowFailed(String),

    #[error("Template error: {0}")]
    TemplateError(String),
}
