//! HTTP layer
//!
//! Axum server with:
//! - Bearer-token gate over every route
//! - CORS and request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod auth;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod testing;

pub use auth::{Claims, TokenVerifier};
pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
