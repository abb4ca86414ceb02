//! In-process product store
//!
//! Mirrors the table's behavior closely enough to stand in for Postgres in
//! router tests and local runs: ids start at 1 and never repeat, names
//! longer than the column width are rejected, and prices are kept at the
//! precision and range of `DECIMAL(10,2)`. Like the Postgres store, `create`
//! echoes its input rather than the stored row.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, ProductStore};
use crate::models::{NewProduct, Product, MAX_NAME_LEN};

/// Exclusive bound on the price in cents: ten digits, two of them fractional.
const PRICE_CENTS_LIMIT: f64 = 1e10;

#[derive(Default)]
struct Table {
    rows: Vec<Product>,
    last_id: i32,
}

/// Product store held in memory
#[derive(Default)]
pub struct MemoryProductStore {
    table: RwLock<Table>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently stored.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn ensure_schema(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, DbError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn create(&self, product: NewProduct) -> Result<Product, DbError> {
        if product.name.chars().count() > MAX_NAME_LEN {
            return Err(DbError::Constraint {
                reason: format!("name exceeds {} characters", MAX_NAME_LEN),
            });
        }

        let stored_price = column_price(product.price)?;

        let mut table = self.table.write().await;
        table.last_id += 1;
        let created = product.with_id(table.last_id);
        table.rows.push(Product {
            price: stored_price,
            ..created.clone()
        });

        Ok(created)
    }
}

/// Round to two decimals and reject what would overflow the column.
fn column_price(price: f64) -> Result<f64, DbError> {
    let cents = (price * 100.0).round();
    if !cents.is_finite() || cents.abs() >= PRICE_CENTS_LIMIT {
        return Err(DbError::Constraint {
            reason: "numeric field overflow".into(),
        });
    }
    Ok(cents / 100.0)
}
