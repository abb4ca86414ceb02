//! Product repository over Postgres
//!
//! - ensure_schema: CREATE TABLE IF NOT EXISTS (idempotent)
//! - list: unordered SELECT of every row
//! - create: INSERT ... RETURNING id, so the generated id is read back in the
//!   same round-trip; the rest of the response echoes the input

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, ProductStore};
use crate::models::{NewProduct, Product};

/// SQLSTATE for `string_data_right_truncation` (name longer than VARCHAR(100)).
const STRING_TRUNCATION: &str = "22001";

/// SQLSTATE for `numeric_value_out_of_range` (price beyond DECIMAL(10,2)).
const NUMERIC_OUT_OF_RANGE: &str = "22003";

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        price DECIMAL(10,2) NOT NULL,
        stock INT NOT NULL
    )
"#;

/// Postgres-backed product store
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn ensure_schema(&self) -> Result<(), DbError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, DbError> {
        // DECIMAL has no f64 decoder, cast on the way out
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price::float8 AS price, stock FROM products",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn create(&self, product: NewProduct) -> Result<Product, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO products (name, price, stock)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.stock)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;

        tracing::debug!(id, "product inserted");
        Ok(product.with_id(id))
    }
}

/// Split constraint failures out of generic driver errors.
fn classify(err: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(db_err) = &err {
        let code = db_err.code();
        let out_of_range = matches!(
            code.as_deref(),
            Some(STRING_TRUNCATION) | Some(NUMERIC_OUT_OF_RANGE)
        );
        let violated = !matches!(db_err.kind(), sqlx::error::ErrorKind::Other);
        if out_of_range || violated {
            return DbError::Constraint {
                reason: db_err.message().to_owned(),
            };
        }
    }
    DbError::Sqlx(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;
    use crate::models::MAX_NAME_LEN;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p catalog-server -- --ignored

    async fn store() -> PgProductStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        let store = PgProductStore::new(pool);
        store.ensure_schema().await.expect("schema creation failed");
        store
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ensure_schema_is_idempotent() {
        let store = store().await;
        store.ensure_schema().await.expect("second run failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_returns_fresh_id_and_list_includes_it() {
        let store = store().await;
        let before = store.list().await.unwrap();

        let created = store
            .create(NewProduct {
                name: "Widget".into(),
                price: 9.99,
                stock: 10,
            })
            .await
            .unwrap();

        assert!(created.id > 0);
        assert!(before.iter().all(|p| p.id != created.id));
        assert_eq!(created.name, "Widget");
        assert_eq!(created.price, 9.99);
        assert_eq!(created.stock, 10);

        let after = store.list().await.unwrap();
        assert_eq!(after.iter().filter(|p| p.id == created.id).count(), 1);
        assert_eq!(after.len(), before.len() + 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn overlong_name_is_a_constraint_error() {
        let store = store().await;
        let err = store
            .create(NewProduct {
                name: "n".repeat(MAX_NAME_LEN + 1),
                price: 1.0,
                stock: 1,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::Constraint { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_echoes_input_while_list_shows_column_precision() {
        let store = store().await;

        let created = store
            .create(NewProduct {
                name: "Precise".into(),
                price: 9.999,
                stock: 1,
            })
            .await
            .unwrap();
        assert_eq!(created.price, 9.999);

        let stored = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .find(|p| p.id == created.id)
            .unwrap();
        assert_eq!(stored.price, 10.0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn price_overflow_is_a_constraint_error() {
        let store = store().await;
        let err = store
            .create(NewProduct {
                name: "Pricey".into(),
                price: 1e9,
                stock: 1,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::Constraint { .. }));
    }
}
