//! Request handlers.

pub mod auth;
pub mod posts;
pub mod profiles;
