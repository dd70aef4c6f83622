//! HTTP adapter for the one-at-a-time browsing view.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::RotationHandlers;
pub use routes::rotation_routes;
