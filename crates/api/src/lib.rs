//! Notification hub HTTP server library.
//!
//! Exposes configuration, state, error handling and the route tree so
//! integration tests and the binary entrypoint share one router.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
