//! Product categories
//!
//! The smallest collection: a name and nothing else. Names are unique
//! within the collection, compared case-insensitively.

use crate::core::field::FieldValue;
use crate::core::record::{Faceted, Searchable};
use crate::impl_record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Build a new category from a validated draft
    pub fn create(draft: CategoryDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name.trim().to_string(),
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive name comparison, used for the uniqueness check
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.eq_ignore_ascii_case(other.trim())
    }
}

impl_record!(Category, "category", "categories", created_at);

impl Searchable for Category {
    fn searchable_fields() -> &'static [&'static str] {
        &["name"]
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "name" => self.name.as_str().into(),
            _ => FieldValue::Null,
        }
    }
}

impl Faceted for Category {}

/// Editable fields of a category (create and rename both carry just the name)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CategoryDraft {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

impl From<&Category> for CategoryDraft {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
        }
    }
}
