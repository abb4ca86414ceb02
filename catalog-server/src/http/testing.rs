//! Helpers shared by the HTTP tests

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;

use crate::db::{DbError, ProductStore};
use crate::models::{NewProduct, Product};

pub const SECRET: &[u8] = b"test-signing-secret";

pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_secs()
}

pub fn sign(claims: Value) -> String {
    sign_with(Header::default(), SECRET, claims)
}

pub fn sign_with(header: Header, secret: &[u8], claims: Value) -> String {
    encode(&header, &claims, &EncodingKey::from_secret(secret)).expect("token encoding failed")
}

/// Store whose every call fails, standing in for a lost connection.
pub struct FailingStore;

#[async_trait]
impl ProductStore for FailingStore {
    async fn ensure_schema(&self) -> Result<(), DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn list(&self) -> Result<Vec<Product>, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }

    async fn create(&self, _product: NewProduct) -> Result<Product, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}
