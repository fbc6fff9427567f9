//! Domain Layer
//!
//! Contains the product entity and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod category;
mod entity;
mod product;

pub use category::Category;
pub use entity::{DomainError, DomainResult, Entity};
pub use product::{format_price, Product, ProductId};
