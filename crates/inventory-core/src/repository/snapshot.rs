//! Snapshot Codec
//!
//! The persisted form of the collection: a JSON array of product objects.

use crate::domain::{DomainResult, Product};

pub fn encode(products: &[Product]) -> DomainResult<String> {
    Ok(serde_json::to_string(products)?)
}

/// Decode a snapshot. Malformed text yields `DomainError::Corrupt`.
pub fn decode(text: &str) -> DomainResult<Vec<Product>> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, DomainError};

    #[test]
    fn test_encode_keeps_order() {
        let products = vec![
            Product::new(2, "Carrot", 30.0, Category::Vegetables),
            Product::new(1, "Almonds", 800.0, Category::FruitsAndNuts),
        ];
        let text = encode(&products).unwrap();
        assert_eq!(decode(&text).unwrap(), products);
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_malformed_is_corrupt() {
        assert!(matches!(decode("{not json"), Err(DomainError::Corrupt(_))));
        assert!(matches!(decode(r#"{"id":1}"#), Err(DomainError::Corrupt(_))));
    }

    #[test]
    fn test_decode_unknown_category_is_corrupt() {
        let text = r#"[{"id":1,"name":"Steak","price":10,"category":"Meat"}]"#;
        assert!(matches!(decode(text), Err(DomainError::Corrupt(_))));
    }
}
