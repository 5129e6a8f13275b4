//! Request middleware

pub mod auth_gate;
