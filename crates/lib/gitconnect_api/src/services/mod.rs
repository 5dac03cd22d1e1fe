//! Service-layer orchestration.

pub mod auth;
