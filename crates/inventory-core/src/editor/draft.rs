//! Product Draft
//!
//! The editor's transient copy of a product. Every field change yields a
//! new draft; nothing is shared or mutated in place.

use crate::domain::{Category, DomainError, DomainResult, Product, ProductId};

/// In-progress product. Required fields may still be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    /// Present when the draft was seeded from an existing record
    pub id: Option<ProductId>,
    pub name: String,
    pub price: Option<f64>,
    pub old_price: Option<f64>,
    pub category: Option<Category>,
    pub is_active: bool,
    pub description: String,
}

/// A single-attribute edit
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    Name(String),
    Price(Option<f64>),
    OldPrice(Option<f64>),
    Category(Option<Category>),
    IsActive(bool),
    Description(String),
}

impl FieldChange {
    /// Build a change from a form control's `name`, text value and checked state.
    ///
    /// Unknown field names yield `None`.
    pub fn from_input(field: &str, value: &str, checked: bool) -> Option<Self> {
        let change = match field {
            "name" => FieldChange::Name(value.to_string()),
            "price" => FieldChange::Price(parse_amount(value)),
            "oldPrice" => FieldChange::OldPrice(parse_amount(value)),
            "category" => FieldChange::Category(Category::parse(value)),
            "isActive" => FieldChange::IsActive(checked),
            "description" => FieldChange::Description(value.to_string()),
            _ => return None,
        };
        Some(change)
    }
}

/// Fields that block submission while empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Price,
    Category,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Name => "Product Name",
            RequiredField::Price => "Price",
            RequiredField::Category => "Category",
        }
    }
}

impl ProductDraft {
    /// Seed a draft with every attribute of an existing record
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            price: Some(product.price),
            old_price: product.old_price,
            category: Some(product.category),
            is_active: product.is_active,
            description: product.description.clone(),
        }
    }

    /// A new draft equal to this one with exactly one attribute replaced
    pub fn with(&self, change: FieldChange) -> Self {
        let mut next = self.clone();
        match change {
            FieldChange::Name(name) => next.name = name,
            FieldChange::Price(price) => next.price = price,
            FieldChange::OldPrice(old_price) => next.old_price = old_price,
            FieldChange::Category(category) => next.category = category,
            FieldChange::IsActive(is_active) => next.is_active = is_active,
            FieldChange::Description(description) => next.description = description,
        }
        next
    }

    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(RequiredField::Name);
        }
        if self.price.is_none() {
            missing.push(RequiredField::Price);
        }
        if self.category.is_none() {
            missing.push(RequiredField::Category);
        }
        missing
    }

    /// Turn the draft into a record carrying `id`
    pub fn into_product(self, id: ProductId) -> DomainResult<Product> {
        let (Some(price), Some(category)) = (self.price, self.category) else {
            return Err(DomainError::InvalidInput("draft is incomplete".to_string()));
        };
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("name is empty".to_string()));
        }
        // JSON has no infinity or NaN; storing one would make the snapshot unreadable
        if !price.is_finite() || self.old_price.is_some_and(|n| !n.is_finite()) {
            return Err(DomainError::InvalidInput("price must be a finite number".to_string()));
        }
        Ok(Product {
            id,
            name: self.name,
            price,
            old_price: self.old_price,
            category,
            is_active: self.is_active,
            description: self.description,
        })
    }

    /// Price as shown in the form input
    pub fn price_input(&self) -> String {
        amount_input(self.price)
    }

    pub fn old_price_input(&self) -> String {
        amount_input(self.old_price)
    }

    pub fn category_input(&self) -> &'static str {
        self.category.map(|c| c.as_str()).unwrap_or("")
    }
}

/// Parse a numeric form value. Blank or unparsable input is `None`.
pub fn parse_amount(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn amount_input(amount: Option<f64>) -> String {
    amount.map(|n| n.to_string()).unwrap_or_default()
}
