//! Product Entity
//!
//! A single inventory record. Serialized with the camelCase keys the
//! browser snapshot uses (`oldPrice`, `isActive`).

use serde::{Deserialize, Serialize};
use super::category::Category;
use super::entity::Entity;

/// Product identifier (millisecond timestamp at creation)
pub type ProductId = u64;

/// An inventory record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, immutable after creation
    pub id: ProductId,
    pub name: String,
    #[serde(deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_number"
    )]
    pub old_price: Option<f64>,
    pub category: Category,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient::string_or_null")]
    pub description: String,
}

impl Product {
    /// Create an inactive product with no old price or description
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            old_price: None,
            category,
            is_active: false,
            description: String::new(),
        }
    }

    pub fn active_label(&self) -> &'static str {
        if self.is_active { "Yes" } else { "No" }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Format an amount with a currency symbol, e.g. `₹50` or `₹12.5`
pub fn format_price(symbol: &str, amount: f64) -> String {
    format!("{}{}", symbol, amount)
}

/// Deserializers accepting the loosely typed values older snapshots hold:
/// form inputs were stored verbatim, so numbers may arrive as strings and
/// an untouched optional field as `""`.
mod lenient {
    use serde::{de::Error, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    fn parse<E: Error>(value: NumberOrText) -> Result<Option<f64>, E> {
        match value {
            NumberOrText::Number(n) => Ok(Some(n)),
            NumberOrText::Text(s) if s.trim().is_empty() => Ok(None),
            NumberOrText::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| E::custom(format!("invalid number: {:?}", s))),
        }
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        parse::<D::Error>(NumberOrText::deserialize(d)?)?.ok_or_else(|| D::Error::custom("missing number"))
    }

    pub fn optional_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        match Option::<NumberOrText>::deserialize(d)? {
            Some(value) => parse(value),
            None => Ok(None),
        }
    }

    pub fn string_or_null<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
    }
}
