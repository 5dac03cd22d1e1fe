//! Request-boundary middleware.

pub mod auth;
