//! HTTP layer of the PressWire verification service.
//!
//! Exposes the application factory and the request/response payloads so
//! the binary and the integration tests share one wiring path.

pub mod app;
pub mod dto;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
