//! # Typed Filters and Patches
//!
//! Queries over records are conjunctive equality filters: an ordered list
//! of (field, value) pairs combined with AND. Fields come from the record's
//! declared field enum, so only schema fields can be referenced. Patches are
//! the mutation counterpart: a list of set-clauses applied to one record.

use mongodb::bson::{doc, Bson, Document};

use super::record::{OwnedRecord, Record, RecordField, Scope};

// ============================================================================
// Filter
// ============================================================================

/// Ordered list of equality clauses combined with AND.
///
/// An empty filter matches every record of the kind.
#[derive(Debug)]
pub struct Filter<R: Record> {
    clauses: Vec<(R::Field, Bson)>,
}

impl<R: Record> Filter<R> {
    /// Empty filter.
    pub fn new() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    /// Adds an equality clause.
    pub fn eq(mut self, field: R::Field, value: impl Into<Bson>) -> Self {
        self.clauses.push((field, value.into()));
        self
    }

    /// True when no clauses were added.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Lowers the filter to a store query document.
    pub(crate) fn into_document(self) -> Document {
        let mut doc = Document::new();
        for (field, value) in self.clauses {
            doc.insert(field.as_str(), value);
        }
        doc
    }

    /// True when every clause matches the document.
    pub(crate) fn matches(&self, doc: &Document) -> bool {
        self.clauses
            .iter()
            .all(|(field, value)| doc.get(field.as_str()) == Some(value))
    }
}

impl<R: OwnedRecord> Filter<R> {
    /// Appends the owner clause for `scope`.
    ///
    /// This is the single place owner scoping happens; the scoped store
    /// operations all funnel through it.
    pub(crate) fn scoped_to(self, scope: &Scope) -> Self {
        let owner = scope.account_id().to_string();
        self.eq(R::OWNER_FIELD, owner)
    }
}

impl<R: Record> Default for Filter<R> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Patch
// ============================================================================

/// Ordered list of set-clauses applied to one record.
#[derive(Debug)]
pub struct Patch<R: Record> {
    sets: Vec<(R::Field, Bson)>,
}

impl<R: Record> Patch<R> {
    /// Empty patch.
    pub fn new() -> Self {
        Self { sets: Vec::new() }
    }

    /// Adds a set-clause replacing `field` with `value`.
    pub fn set(mut self, field: R::Field, value: impl Into<Bson>) -> Self {
        self.sets.push((field, value.into()));
        self
    }

    /// True when no set-clauses were added. An empty patch must not reach
    /// the store (an empty `$set` is rejected there); callers degrade it to
    /// a plain read.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Lowers the patch to a `$set` update document.
    pub(crate) fn into_update_document(self) -> Document {
        let mut sets = Document::new();
        for (field, value) in self.sets {
            sets.insert(field.as_str(), value);
        }
        doc! { "$set": sets }
    }

    /// The raw set-clauses, for backends that apply them in place.
    pub(crate) fn entries(&self) -> &[(R::Field, Bson)] {
        &self.sets
    }
}

impl<R: Record> Default for Patch<R> {
    fn default() -> Self {
        Self::new()
    }
}
