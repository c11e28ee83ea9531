//! HTTP API: routes and handlers.

/// Request handlers.
pub mod handlers;
/// Router construction.
pub mod routes;

pub use routes::create_router;
