//! Macros for reducing boilerplate when defining entities
//!
//! Every collection entity carries the same id/timestamp plumbing; this
//! macro generates the `Record` implementation so entity files only spell
//! out what is specific to them (searchable fields, facets, drafts).

/// Implement [`crate::core::Record`] for an entity struct.
///
/// Expects the struct to have an `id: Uuid` field; the timestamp field
/// name is passed explicitly since screens differ (`created_at` vs
/// `submitted_at` vs `posted_at`).
///
/// # Example
///
/// ```rust,ignore
/// impl_record!(Product, "product", "products", created_at);
/// ```
#[macro_export]
macro_rules! impl_record {
    ($type:ident, $singular:literal, $plural:literal, $created:ident) => {
        impl $crate::core::record::Record for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> ::uuid::Uuid {
                self.id
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.$created
            }
        }
    };
}
