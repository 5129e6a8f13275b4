//! HTTP handlers

pub mod health;
pub mod navigation;
pub mod pages;
pub mod auth;
pub mod flows;

use portal_core::domain::Role;
use portal_core::error::DomainError;

use crate::error::ApiError;

pub(crate) fn parse_role(slug: &str) -> Result<Role, ApiError> {
    Role::from_slug(slug).ok_or_else(|| DomainError::UnknownRole(slug.to_string()).into())
}
