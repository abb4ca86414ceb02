//! Storage accessor - connection pool and product repositories
//!
//! # Design Principles
//!
//! - Handlers only see `dyn ProductStore`, never a pool or a global handle
//! - Rely on DB constraints for bounds and nulls, no check-then-insert
//! - Generated ids come back through `RETURNING`

pub mod memory;
pub mod pool;
pub mod products;

use async_trait::async_trait;

use crate::models::{NewProduct, Product};

pub use memory::MemoryProductStore;
pub use pool::{create_pool, create_pool_with_options};
pub use products::PgProductStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("constraint violated: {reason}")]
    Constraint { reason: String },
}

/// Durable persistence of products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Create the `products` table if it does not exist yet.
    async fn ensure_schema(&self) -> Result<(), DbError>;

    /// Every persisted product, in no particular order.
    async fn list(&self) -> Result<Vec<Product>, DbError>;

    /// Insert one product and return it with its assigned id.
    async fn create(&self, product: NewProduct) -> Result<Product, DbError>;
}
