//! Selection tracking for bulk actions
//!
//! Tracks the set of record ids chosen for a bulk action. Select-all is
//! page-scoped: toggling it only affects the ids currently visible, never
//! selections made on other pages. The set is cleared after any bulk
//! mutation commits.

use std::collections::HashSet;
use uuid::Uuid;

/// Aggregate selection state of the ids visible on the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    /// Every visible row is selected
    Full,
    /// Some but not all visible rows are selected (indeterminate checkbox)
    Partial,
    /// No visible row is selected
    Empty,
}

/// A set of record identifiers chosen for bulk action
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    selected: HashSet<Uuid>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership of a single id
    pub fn toggle(&mut self, id: Uuid) {
        if !self.selected.insert(id) {
            self.selected.remove(&id);
        }
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Snapshot of the selected ids
    pub fn ids(&self) -> Vec<Uuid> {
        self.selected.iter().copied().collect()
    }

    /// Clear the whole selection (called after a bulk mutation commits)
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Toggle select-all for the ids visible on the current page.
    ///
    /// If every visible id is already selected, exactly those ids are
    /// deselected; otherwise all visible ids become selected. Off-page
    /// selections are left untouched either way.
    pub fn toggle_page(&mut self, visible: &[Uuid]) {
        if self.page_state(visible) == PageSelection::Full {
            for id in visible {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(visible.iter().copied());
        }
    }

    /// Report the selection state for the visible page
    pub fn page_state(&self, visible: &[Uuid]) -> PageSelection {
        if visible.is_empty() {
            return PageSelection::Empty;
        }
        let selected = visible.iter().filter(|id| self.selected.contains(id)).count();
        if selected == 0 {
            PageSelection::Empty
        } else if selected == visible.len() {
            PageSelection::Full
        } else {
            PageSelection::Partial
        }
    }

    /// Drop selections pointing at ids that no longer exist
    pub fn retain_known(&mut self, known: &[Uuid]) {
        let known: HashSet<&Uuid> = known.iter().collect();
        self.selected.retain(|id| known.contains(id));
    }
}
