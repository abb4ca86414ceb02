//! Domain models shared by the storage and HTTP layers

pub mod product;

pub use product::{NewProduct, Product, MAX_NAME_LEN};
