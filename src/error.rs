//! Error types for dataset loading and character building.
//!
//! All failures are represented by the `ChargenError` enum. Dataset-level
//! failures (io, parse, fetch, unresolved references) are terminal for
//! session initialization; per-operation failures (capacity violations,
//! missing preconditions) are local and leave the character untouched.

use crate::dataset::EntityKind;
use crate::entity_id::EntityId;
use thiserror::Error;

/// Errors that can occur while loading a dataset or building a character.
///
/// # Examples
///
/// ```rust
/// use chargen::{ChargenError, EntityId};
/// use chargen::dataset::EntityKind;
///
/// let err = ChargenError::UnresolvedReference {
///     kind: EntityKind::Item,
///     id: EntityId::new("item-longsword"),
/// };
/// assert!(err.to_string().contains("item-longsword"));
/// ```
#[derive(Debug, Error)]
pub enum ChargenError {
    /// Reading the dataset document from disk failed.
    #[error("Failed to read dataset: {0}")]
    DatasetIo(#[from] std::io::Error),

    /// The dataset document was not valid JSON for the raw schema.
    #[error("Failed to parse dataset: {0}")]
    DatasetParse(#[from] serde_json::Error),

    /// Fetching the dataset document over HTTP failed.
    #[cfg(feature = "fetch")]
    #[error("Failed to fetch dataset: {0}")]
    DatasetFetch(#[from] reqwest::Error),

    /// An id reference inside the dataset has no matching entity.
    ///
    /// The original implementation silently embedded an absent value
    /// here; this crate fails loudly at denormalisation time instead,
    /// so that every embedded reference in a [`crate::Dataset`] is
    /// guaranteed to be present.
    #[error("Unresolved {kind} reference: {id}")]
    UnresolvedReference { kind: EntityKind, id: EntityId },

    /// The dataset violates a structural invariant of the schema,
    /// e.g. a six-slot ability list with the wrong length.
    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),

    /// A derived value that requires a chosen class was queried while
    /// the character's class id resolves to nothing.
    ///
    /// This is a caller bug, not a recoverable runtime condition;
    /// it is surfaced as an error (rather than a panic) so that no
    /// state is corrupted.
    #[error("No class has been chosen")]
    NoClassChosen,

    /// A strict choice set already contains the id being added.
    #[error("Choice already present: {0}")]
    DuplicateChoice(EntityId),

    /// A strict choice set is at capacity and cannot take another id.
    #[error("Choice list is full (capacity {capacity})")]
    CapacityReached { capacity: usize },

    /// A strict choice set does not contain the id being removed.
    #[error("Choice not present: {0}")]
    NotChosen(EntityId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_reference_display() {
        let err = ChargenError::UnresolvedReference {
            kind: EntityKind::Spell,
            id: EntityId::new("spell-wish"),
        };
        let display = err.to_string();
        assert!(display.contains("spell"));
        assert!(display.contains("spell-wish"));
    }

    #[test]
    fn test_capacity_display() {
        let err = ChargenError::CapacityReached { capacity: 3 };
        assert!(err.to_string().contains('3'));
    }
}
