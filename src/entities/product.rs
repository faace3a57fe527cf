//! Product catalog entries
//!
//! Products power both the admin products screen (full CRUD, search by
//! name/SKU/category, category + status filters) and the public catalog,
//! which only ever sees active products.

use crate::core::field::FieldValue;
use crate::core::record::{Faceted, Searchable};
use crate::impl_record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

/// Whether a product is visible in the public catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Build a new product from a validated draft
    pub fn create(draft: ProductDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            sku: draft.sku,
            category: draft.category,
            price: draft.price,
            stock: draft.stock,
            status: draft.status,
            description: draft.description,
            image_url: draft.image_url,
            created_at: Utc::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }
}

impl_record!(Product, "product", "products", created_at);

impl Searchable for Product {
    fn searchable_fields() -> &'static [&'static str] {
        &["name", "sku", "category"]
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "name" => self.name.as_str().into(),
            "sku" => self.sku.as_str().into(),
            "category" => self.category.as_str().into(),
            "description" => self.description.clone().into(),
            _ => FieldValue::Null,
        }
    }
}

impl Faceted for Product {
    fn facet_names() -> &'static [&'static str] {
        &["category", "status"]
    }

    fn facet_value(&self, facet: &str) -> Option<String> {
        match facet {
            "category" => Some(self.category.clone()),
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

/// Editable fields of a product
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProductDraft {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "SKU is required"))]
    pub sku: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub stock: u32,

    #[serde(default)]
    pub status: ProductStatus,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            category: product.category.clone(),
            price: product.price,
            stock: product.stock,
            status: product.status,
            description: product.description.clone(),
            image_url: product.image_url.clone(),
        }
    }
}

/// Partial update for a product; only present fields change
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProductUpdate {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "SKU is required"))]
    pub sku: Option<String>,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    pub stock: Option<u32>,
    pub status: Option<ProductStatus>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl ProductUpdate {
    /// Produce the updated product, leaving absent fields untouched.
    /// The original is not modified; callers persist the returned copy
    /// only after the store confirms it.
    pub fn apply_to(&self, product: &Product) -> Product {
        let mut updated = product.clone();
        if let Some(name) = &self.name {
            updated.name = name.clone();
        }
        if let Some(sku) = &self.sku {
            updated.sku = sku.clone();
        }
        if let Some(category) = &self.category {
            updated.category = category.clone();
        }
        if let Some(price) = self.price {
            updated.price = price;
        }
        if let Some(stock) = self.stock {
            updated.stock = stock;
        }
        if let Some(status) = self.status {
            updated.status = status;
        }
        if let Some(description) = &self.description {
            updated.description = Some(description.clone());
        }
        if let Some(image_url) = &self.image_url {
            updated.image_url = Some(image_url.clone());
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, sku: &str, category: &str, status: ProductStatus) -> Product {
        Product::create(ProductDraft {
            name: name.to_string(),
            sku: sku.to_string(),
            category: category.to_string(),
            price: 100.0,
            stock: 5,
            status,
            description: None,
            image_url: None,
        })
    }

    #[test]
    fn test_search_covers_name_sku_and_category() {
        let p = product("SE-100 Controller", "SE100", "Electronics", ProductStatus::Active);
        assert!(p.matches_term("se-100"));
        assert!(p.matches_term("se100"));
        assert!(p.matches_term("electronics"));
        assert!(!p.matches_term("sensor"));
    }

    #[test]
    fn test_facets() {
        let p = product("AX-350 Motor", "AX350", "Motors", ProductStatus::Inactive);
        assert_eq!(p.facet_value("category").as_deref(), Some("Motors"));
        assert_eq!(p.facet_value("status").as_deref(), Some("inactive"));
        assert_eq!(p.facet_value("price"), None);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ProductStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let parsed: ProductStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(parsed, ProductStatus::Inactive);
    }

    #[test]
    fn test_update_applies_only_present_fields() {
        let original = product("SG-200 Sensor", "SG200", "Sensors", ProductStatus::Active);
        let update = ProductUpdate {
            price: Some(79.0),
            status: Some(ProductStatus::Inactive),
            ..Default::default()
        };

        let updated = update.apply_to(&original);
        assert_eq!(updated.price, 79.0);
        assert_eq!(updated.status, ProductStatus::Inactive);
        assert_eq!(updated.name, "SG-200 Sensor");
        assert_eq!(updated.sku, "SG200");
        // Original untouched until the store confirms
        assert_eq!(original.price, 100.0);
    }

    #[test]
    fn test_draft_validation() {
        let draft = ProductDraft {
            name: String::new(),
            sku: "X".to_string(),
            category: "Y".to_string(),
            price: -1.0,
            ..Default::default()
        };
        let errors = draft.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("price"));
    }
}
