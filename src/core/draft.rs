//! Transient draft state for create/edit forms
//!
//! A [`FormBuffer`] mirrors one record's editable fields for the lifetime
//! of a single modal interaction. It holds a copy, never a reference: the
//! buffer can be mutated freely and simply dropped on cancel without
//! touching the collection. Committing hands the draft to the mutation
//! gateway; the store only changes if the gateway succeeds.

use uuid::Uuid;

/// Whether the buffer creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit(Uuid),
}

/// A draft of one record's editable fields
#[derive(Debug, Clone)]
pub struct FormBuffer<D> {
    mode: DraftMode,
    draft: D,
}

impl<D> FormBuffer<D> {
    /// Start a create-mode buffer from the empty default draft
    pub fn create() -> Self
    where
        D: Default,
    {
        Self {
            mode: DraftMode::Create,
            draft: D::default(),
        }
    }

    /// Start an edit-mode buffer from a deep copy of an existing record's
    /// editable fields
    pub fn edit<T>(record: &T) -> Self
    where
        T: crate::core::record::Record,
        D: for<'a> From<&'a T>,
    {
        Self {
            mode: DraftMode::Edit(record.id()),
            draft: D::from(record),
        }
    }

    pub fn mode(&self) -> DraftMode {
        self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, DraftMode::Edit(_))
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Mutate the draft in place. Only the buffer changes; the source
    /// record is untouched until commit.
    pub fn set(&mut self, apply: impl FnOnce(&mut D)) {
        apply(&mut self.draft);
    }

    /// Consume the buffer, yielding the draft for the mutation gateway
    pub fn commit(self) -> (DraftMode, D) {
        (self.mode, self.draft)
    }

    /// Discard the buffer. Equivalent to dropping it; spelled out so call
    /// sites read as an explicit cancel.
    pub fn cancel(self) {}
}
