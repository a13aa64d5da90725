//! Request security context for services behind the gateway.
//!
//! - [`services::SecurityContext`] reads user id / username / user key /
//!   login user / token from the current request (explicit or ambient).
//! - [`security::inner_auth`] tags routes that only accept inner
//!   (service-to-service) calls.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod security;
pub mod services;
pub mod state;
