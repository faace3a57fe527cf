//! Record traits defining the core abstraction for all collection types
//!
//! Every entity held by a collection store implements [`Record`]. Entities
//! that participate in free-text search additionally implement
//! [`Searchable`], and entities with categorical filter fields implement
//! [`Faceted`]. The query engine only ever sees these traits, never the
//! concrete types.

use crate::core::field::FieldValue;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for all records in a collection.
///
/// Records carry the minimal metadata the store and the HTTP layer need:
/// - id: unique identifier within the collection
/// - created_at: creation/submission timestamp
pub trait Record: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "products", "categories")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "product", "category")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;
}

/// Trait for records that support free-text search.
///
/// A record matches a search term when any of its designated searchable
/// fields contains the term as a case-insensitive substring. The empty
/// term matches every record.
pub trait Searchable: Record {
    /// Fields that participate in free-text search
    fn searchable_fields() -> &'static [&'static str];

    /// Dynamic field access by name
    fn field_value(&self, field: &str) -> FieldValue;

    /// Check whether any searchable field contains `term`, case-insensitively.
    fn matches_term(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        Self::searchable_fields()
            .iter()
            .any(|field| self.field_value(field).contains_ci(&needle))
    }
}

/// Trait for records with categorical filter fields.
///
/// Each facet maps a category name (e.g., "status") to the record's value
/// in that category (e.g., "pending"). Records without facets use the
/// default implementation.
pub trait Faceted: Record {
    /// Names of the filterable categories this record exposes
    fn facet_names() -> &'static [&'static str] {
        &[]
    }

    /// The record's value for a filter category, if it has one
    fn facet_value(&self, _facet: &str) -> Option<String> {
        None
    }
}
