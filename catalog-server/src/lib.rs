//! catalog-server: product catalog over HTTP
//!
//! Two layers, composed in dependency order:
//! - `db`: the storage accessor (`ProductStore`) and its Postgres and
//!   in-memory implementations
//! - `http`: axum router, bearer-token gate and JSON error mapping

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryProductStore, PgProductStore, ProductStore};
pub use http::{build_router, run_server, AppState, ServerConfig, TokenVerifier};
pub use models::{NewProduct, Product};
