//! Product records
//!
//! No validation happens at construction: the table's constraints are the
//! only guard on what gets persisted.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Upper bound on `name`, matching `VARCHAR(100)` in the table.
pub const MAX_NAME_LEN: usize = 100;

/// A persisted product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub stock: i32,
}

/// Create payload. All three fields must be present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i32,
}

impl NewProduct {
    /// Attach a storage-assigned id.
    pub fn with_id(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
        }
    }
}
