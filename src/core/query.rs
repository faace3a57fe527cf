//! Search and filter evaluation over a collection
//!
//! A [`SearchQuery`] combines a free-text term with a set of categorical
//! facet selections. Matching policy:
//!
//! - the term matches when any designated searchable field contains it as
//!   a case-insensitive substring (empty term matches all);
//! - facet selections are conjunctive across categories and disjunctive
//!   within a category (no selection in a category means "match all").
//!
//! Queries are evaluated against the source collection on every call, so
//! a changed collection, term or facet set can never yield stale results.

use crate::core::record::{Faceted, Searchable};
use indexmap::IndexMap;

/// A free-text term plus categorical filter selections
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    term: Option<String>,
    facets: IndexMap<String, Vec<String>>,
}

impl SearchQuery {
    /// An empty query matching every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.set_term(term);
        self
    }

    /// Select values for a filter category
    pub fn with_facet(mut self, facet: impl Into<String>, values: Vec<String>) -> Self {
        self.set_facet(facet, values);
        self
    }

    /// Select a single value for a filter category
    pub fn with_facet_value(self, facet: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_facet(facet, vec![value.into()])
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.term = if term.trim().is_empty() {
            None
        } else {
            Some(term)
        };
    }

    pub fn clear_term(&mut self) {
        self.term = None;
    }

    /// Replace the selection for a category. An empty selection removes
    /// the category entirely (meaning "match all").
    pub fn set_facet(&mut self, facet: impl Into<String>, values: Vec<String>) {
        let facet = facet.into();
        if values.is_empty() {
            self.facets.shift_remove(&facet);
        } else {
            self.facets.insert(facet, values);
        }
    }

    pub fn clear_facet(&mut self, facet: &str) {
        self.facets.shift_remove(facet);
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn facets(&self) -> &IndexMap<String, Vec<String>> {
        &self.facets
    }

    /// True when neither a term nor any facet is active
    pub fn is_empty(&self) -> bool {
        self.term.is_none() && self.facets.is_empty()
    }

    /// Evaluate the query against one record
    pub fn matches<T: Searchable + Faceted>(&self, record: &T) -> bool {
        if let Some(term) = &self.term {
            if !record.matches_term(term) {
                return false;
            }
        }

        self.facets.iter().all(|(facet, selected)| {
            match record.facet_value(facet) {
                Some(value) => selected.iter().any(|s| s == &value),
                // A record without the category never matches an active
                // selection in that category.
                None => false,
            }
        })
    }

    /// Filter a collection down to the matching subset, preserving order
    pub fn apply<T: Searchable + Faceted>(&self, records: Vec<T>) -> Vec<T> {
        if self.is_empty() {
            return records;
        }
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::core::record::Record;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: Uuid,
        subject: String,
        requester: String,
        status: &'static str,
        priority: &'static str,
        created_at: DateTime<Utc>,
    }

    impl Ticket {
        fn new(subject: &str, requester: &str, status: &'static str, priority: &'static str) -> Self {
            Self {
                id: Uuid::new_v4(),
                subject: subject.to_string(),
                requester: requester.to_string(),
                status,
                priority,
                created_at: Utc::now(),
            }
        }
    }

    impl Record for Ticket {
        fn resource_name() -> &'static str {
            "tickets"
        }

        fn resource_name_singular() -> &'static str {
            "ticket"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }
    }

    impl Searchable for Ticket {
        fn searchable_fields() -> &'static [&'static str] {
            &["subject", "requester"]
        }

        fn field_value(&self, field: &str) -> FieldValue {
            match field {
                "subject" => self.subject.as_str().into(),
                "requester" => self.requester.as_str().into(),
                _ => FieldValue::Null,
            }
        }
    }

    impl Faceted for Ticket {
        fn facet_names() -> &'static [&'static str] {
            &["status", "priority"]
        }

        fn facet_value(&self, facet: &str) -> Option<String> {
            match facet {
                "status" => Some(self.status.to_string()),
                "priority" => Some(self.priority.to_string()),
                _ => None,
            }
        }
    }

    fn sample() -> Vec<Ticket> {
        vec![
            Ticket::new("Broken pump", "Alice", "open", "high"),
            Ticket::new("Invoice question", "Bob", "closed", "low"),
            Ticket::new("Pump replacement quote", "Carol", "open", "low"),
        ]
    }

    #[test]
    fn test_empty_query_matches_all() {
        let query = SearchQuery::new();
        assert_eq!(query.apply(sample()).len(), 3);
    }

    #[test]
    fn test_term_is_case_insensitive_substring() {
        let query = SearchQuery::new().with_term("PUMP");
        let hits = query.apply(sample());
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|t| t.subject.to_lowercase().contains("pump")));
    }

    #[test]
    fn test_term_matches_any_searchable_field() {
        let query = SearchQuery::new().with_term("bob");
        let hits = query.apply(sample());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].requester, "Bob");
    }

    #[test]
    fn test_single_facet() {
        let query = SearchQuery::new().with_facet_value("status", "open");
        assert_eq!(query.apply(sample()).len(), 2);
    }

    #[test]
    fn test_facets_conjunctive_across_categories() {
        let query = SearchQuery::new()
            .with_facet_value("status", "open")
            .with_facet_value("priority", "low");
        let hits = query.apply(sample());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].requester, "Carol");
    }

    #[test]
    fn test_facets_disjunctive_within_category() {
        let query = SearchQuery::new().with_facet(
            "priority",
            vec!["high".to_string(), "low".to_string()],
        );
        assert_eq!(query.apply(sample()).len(), 3);
    }

    #[test]
    fn test_term_and_facets_combined() {
        let query = SearchQuery::new()
            .with_term("pump")
            .with_facet_value("priority", "high");
        let hits = query.apply(sample());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].requester, "Alice");
    }

    #[test]
    fn test_empty_facet_selection_removes_category() {
        let mut query = SearchQuery::new().with_facet_value("status", "open");
        query.set_facet("status", vec![]);
        assert!(query.is_empty());
        assert_eq!(query.apply(sample()).len(), 3);
    }

    #[test]
    fn test_unknown_facet_matches_nothing() {
        let query = SearchQuery::new().with_facet_value("department", "sales");
        assert!(query.apply(sample()).is_empty());
    }

    #[test]
    fn test_whitespace_term_is_ignored() {
        let query = SearchQuery::new().with_term("   ");
        assert!(query.is_empty());
    }

    #[test]
    fn test_empty_collection_never_errors() {
        let query = SearchQuery::new().with_term("anything");
        assert!(query.apply(Vec::<Ticket>::new()).is_empty());
    }
}
