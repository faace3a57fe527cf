//! The assembled list-management engine
//!
//! [`ListController`] wires the query engine, paginator and selection set
//! over one collection snapshot — the shape every admin list screen
//! (jobs, applications, messages, products, categories) instantiates with
//! its own record type. The filtered view is recomputed from the snapshot
//! on every read; changing the term or a facet resets the cursor to page
//! 1, and refreshing the snapshot clamps the cursor into the valid range.

use crate::core::paginate::{PageRequest, Paginated, page_count, paginate};
use crate::core::query::SearchQuery;
use crate::core::record::{Faceted, Record, Searchable};
use crate::core::selection::{PageSelection, SelectionSet};
use uuid::Uuid;

/// One admin list screen's worth of state: snapshot + query + page + selection
#[derive(Debug, Clone)]
pub struct ListController<T> {
    records: Vec<T>,
    query: SearchQuery,
    page: usize,
    page_size: usize,
    selection: SelectionSet,
}

impl<T: Searchable + Faceted> ListController<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            query: SearchQuery::new(),
            page: 1,
            page_size: page_size.max(1),
            selection: SelectionSet::new(),
        }
    }

    /// Replace the collection snapshot (initial load or post-mutation
    /// refresh). The page cursor is clamped into the new valid range and
    /// selections pointing at removed records are dropped.
    pub fn load(&mut self, records: Vec<T>) {
        self.records = records;
        let known: Vec<Uuid> = self.records.iter().map(Record::id).collect();
        self.selection.retain_known(&known);
        self.clamp_page();
    }

    /// Set the free-text search term; resets to page 1
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.set_term(term);
        self.page = 1;
    }

    /// Replace the selection for a filter category; resets to page 1
    pub fn set_facet(&mut self, facet: impl Into<String>, values: Vec<String>) {
        self.query.set_facet(facet, values);
        self.page = 1;
    }

    /// Drop every active filter and the search term; resets to page 1
    pub fn clear_filters(&mut self) {
        self.query = SearchQuery::new();
        self.page = 1;
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// The filtered view, recomputed from the snapshot
    pub fn filtered(&self) -> Vec<&T> {
        self.records.iter().filter(|r| self.query.matches(*r)).collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered_count(), self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Navigate to a page; out-of-range values clamp to the valid range
    pub fn goto(&mut self, page: usize) {
        self.page = page.max(1).min(self.page_count());
    }

    /// The rows visible on the current page
    pub fn visible(&self) -> Paginated<T>
    where
        T: Clone,
    {
        let filtered: Vec<T> = self.filtered().into_iter().cloned().collect();
        paginate(filtered, &PageRequest::new(self.page, self.page_size))
    }

    fn visible_ids(&self) -> Vec<Uuid> {
        self.visible().items.iter().map(Record::id).collect()
    }

    fn clamp_page(&mut self) {
        self.page = self.page.min(self.page_count());
    }

    // === Selection ===

    pub fn toggle_selected(&mut self, id: Uuid) {
        self.selection.toggle(id);
    }

    /// Page-scoped select-all over the currently visible rows
    pub fn toggle_page_selection(&mut self) {
        let visible = self.visible_ids();
        self.selection.toggle_page(&visible);
    }

    /// Selection state of the current page (for the header checkbox)
    pub fn page_selection(&self) -> PageSelection {
        self.selection.page_state(&self.visible_ids())
    }

    pub fn selected_ids(&self) -> Vec<Uuid> {
        self.selection.ids()
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Called after a bulk mutation commits: refresh the snapshot and
    /// clear the selection entirely.
    pub fn bulk_committed(&mut self, records: Vec<T>) {
        self.selection.clear();
        self.load(records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use chrono::{DateTime, Utc};

    #[derive(Clone, Debug)]
    struct Row {
        id: Uuid,
        name: String,
        status: &'static str,
        created_at: DateTime<Utc>,
    }

    impl Row {
        fn new(name: &str, status: &'static str) -> Self {
            Self {
                id: Uuid::new_v4(),
                name: name.to_string(),
                status,
                created_at: Utc::now(),
            }
        }
    }

    impl Record for Row {
        fn resource_name() -> &'static str {
            "rows"
        }

        fn resource_name_singular() -> &'static str {
            "row"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }
    }

    impl Searchable for Row {
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

    impl Faceted for Row {
        fn facet_names() -> &'static [&'static str] {
            &["status"]
        }

        fn facet_value(&self, facet: &str) -> Option<String> {
            (facet == "status").then(|| self.status.to_string())
        }
    }

    fn rows(n: usize, status: &'static str) -> Vec<Row> {
        (0..n).map(|i| Row::new(&format!("row {i}"), status)).collect()
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut list = ListController::new(10);
        list.load(rows(30, "active"));
        list.goto(3);
        assert_eq!(list.current_page(), 3);

        list.set_search("row 1");
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn test_shrinking_filter_clamps_page() {
        let mut list = ListController::new(10);
        let mut all = rows(25, "active");
        all.extend(rows(3, "inactive"));
        list.load(all);
        list.goto(3);

        // Only 3 rows match now; page 3 no longer exists
        list.set_facet("status", vec!["inactive".to_string()]);
        assert_eq!(list.page_count(), 1);
        assert_eq!(list.current_page(), 1);
        assert_eq!(list.visible().items.len(), 3);
    }

    #[test]
    fn test_reload_clamps_page() {
        let mut list = ListController::new(10);
        list.load(rows(30, "active"));
        list.goto(3);

        list.load(rows(5, "active"));
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn test_select_all_is_page_scoped() {
        let mut list = ListController::new(10);
        let mut all = rows(10, "active");
        all.extend(rows(3, "inactive"));
        list.load(all);
        list.set_facet("status", vec!["inactive".to_string()]);

        // Page of 10 filtered down to 3 visible rows
        assert_eq!(list.visible().items.len(), 3);
        list.toggle_page_selection();
        assert_eq!(list.selection_len(), 3);
        assert_eq!(list.page_selection(), PageSelection::Full);

        list.toggle_page_selection();
        assert_eq!(list.selection_len(), 0);
    }

    #[test]
    fn test_bulk_commit_clears_selection() {
        let mut list = ListController::new(10);
        list.load(rows(5, "active"));
        list.toggle_page_selection();
        assert_eq!(list.selection_len(), 5);

        list.bulk_committed(rows(2, "active"));
        assert_eq!(list.selection_len(), 0);
        assert_eq!(list.filtered_count(), 2);
    }

    #[test]
    fn test_reload_drops_stale_selections() {
        let mut list = ListController::new(10);
        let kept = Row::new("kept", "active");
        let removed = Row::new("removed", "active");
        let kept_id = kept.id;
        let removed_id = removed.id;
        list.load(vec![kept.clone(), removed]);

        list.toggle_selected(kept_id);
        list.toggle_selected(removed_id);
        list.load(vec![kept]);

        assert_eq!(list.selected_ids(), vec![kept_id]);
    }

    #[test]
    fn test_empty_collection_with_search() {
        let mut list: ListController<Row> = ListController::new(10);
        list.load(Vec::new());
        list.set_search("anything");

        assert_eq!(list.filtered_count(), 0);
        assert_eq!(list.page_count(), 1);
        assert!(list.visible().items.is_empty());
    }

    #[test]
    fn test_status_filter_scenario() {
        // Collection [{pending}, {hired}] filtered to hired yields one row
        let mut list = ListController::new(10);
        let pending = Row::new("app one", "pending");
        let hired = Row::new("app two", "hired");
        let hired_id = hired.id;
        list.load(vec![pending, hired]);

        list.set_facet("status", vec!["hired".to_string()]);
        let visible = list.visible();
        assert_eq!(visible.items.len(), 1);
        assert_eq!(visible.items[0].id, hired_id);
    }
}
