//! Category
//!
//! Closed set of product categories.

use serde::{Deserialize, Serialize};

/// Product category, serialized as its display name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Vegetables")]
    Vegetables,
    #[serde(rename = "Fruits & Nuts")]
    FruitsAndNuts,
    #[serde(rename = "Dairy & Creams")]
    DairyAndCreams,
    #[serde(rename = "Packaged Food")]
    PackagedFood,
    #[serde(rename = "Staples")]
    Staples,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::Vegetables,
        Category::FruitsAndNuts,
        Category::DairyAndCreams,
        Category::PackagedFood,
        Category::Staples,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vegetables => "Vegetables",
            Category::FruitsAndNuts => "Fruits & Nuts",
            Category::DairyAndCreams => "Dairy & Creams",
            Category::PackagedFood => "Packaged Food",
            Category::Staples => "Staples",
        }
    }

    /// Parse a display name. Anything outside the closed set is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("dairy & creams"), None);
        assert_eq!(Category::parse("Meat"), None);
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::FruitsAndNuts).unwrap();
        assert_eq!(json, r#""Fruits & Nuts""#);
        let back: Category = serde_json::from_str(r#""Packaged Food""#).unwrap();
        assert_eq!(back, Category::PackagedFood);
    }
}
