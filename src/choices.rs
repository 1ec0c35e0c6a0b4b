//! Capacity-bounded choice sets.
//!
//! A `ChoiceSet` is an ordered list of entity ids with a maximum size
//! enforced at the call site. Two policies exist, and the asymmetry is
//! deliberate UX, not an oversight:
//!
//! - [`ChoiceSet::toggle`] — the skill policy: always keep the N most
//!   recent picks. Adding past capacity silently evicts the oldest
//!   entry instead of rejecting.
//! - [`ChoiceSet::add`] / [`ChoiceSet::remove`] — the spell and cantrip
//!   policy: a hard cap. Adding past capacity, adding a duplicate, or
//!   removing something absent is rejected and the set is untouched.
//!
//! Insertion order is the age order used for eviction.

use crate::entity_id::EntityId;
use crate::error::ChargenError;
use serde::{Deserialize, Serialize};

/// Outcome of a [`ChoiceSet::toggle`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// The id was absent and has been appended.
    Added,
    /// The id was present and has been removed.
    Removed,
    /// The set was at capacity; the contained id was evicted to make
    /// room for the new one.
    Replaced(EntityId),
}

/// An ordered, capacity-bounded set of entity ids.
///
/// Serialises transparently as a JSON array, matching the original
/// character wire shape.
///
/// # Examples
///
/// ```rust
/// use chargen::{ChoiceSet, EntityId, Toggle};
///
/// let mut skills = ChoiceSet::new();
/// skills.toggle(EntityId::new("athletics"), 2);
/// skills.toggle(EntityId::new("stealth"), 2);
///
/// // At capacity: the oldest pick is evicted, never rejected.
/// let outcome = skills.toggle(EntityId::new("arcana"), 2);
/// assert_eq!(outcome, Toggle::Replaced(EntityId::new("athletics")));
/// assert_eq!(
///     skills.as_slice(),
///     [EntityId::new("stealth"), EntityId::new("arcana")]
/// );
///
/// // Toggling a present id removes it.
/// assert_eq!(skills.toggle(EntityId::new("stealth"), 2), Toggle::Removed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceSet {
    chosen: Vec<EntityId>,
}

impl ChoiceSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The chosen ids, oldest first.
    pub fn as_slice(&self) -> &[EntityId] {
        &self.chosen
    }

    /// Number of chosen ids.
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    /// True if nothing is chosen.
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// True if `id` is currently chosen.
    pub fn contains(&self, id: &EntityId) -> bool {
        self.chosen.contains(id)
    }

    /// Remove every chosen id.
    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    /// Toggle `id` under the rolling-replacement policy.
    ///
    /// Present ids are removed. Absent ids are appended; if the set is
    /// at `capacity`, the oldest id is evicted first. Note that with
    /// `capacity` 0 the append still happens after the (empty) eviction,
    /// exactly as the original behaved.
    pub fn toggle(&mut self, id: EntityId, capacity: usize) -> Toggle {
        if let Some(index) = self.chosen.iter().position(|c| c == &id) {
            self.chosen.remove(index);
            return Toggle::Removed;
        }
        if self.chosen.len() < capacity {
            self.chosen.push(id);
            return Toggle::Added;
        }
        // At capacity: shift the oldest out, push the new pick.
        let evicted = if self.chosen.is_empty() {
            None
        } else {
            Some(self.chosen.remove(0))
        };
        self.chosen.push(id);
        match evicted {
            Some(old) => Toggle::Replaced(old),
            None => Toggle::Added,
        }
    }

    /// Add `id` under the hard-cap policy.
    ///
    /// # Errors
    ///
    /// - [`ChargenError::DuplicateChoice`] if `id` is already chosen
    /// - [`ChargenError::CapacityReached`] if the set is at `capacity`
    pub fn add(&mut self, id: EntityId, capacity: usize) -> Result<(), ChargenError> {
        if self.contains(&id) {
            return Err(ChargenError::DuplicateChoice(id));
        }
        if self.chosen.len() >= capacity {
            return Err(ChargenError::CapacityReached { capacity });
        }
        self.chosen.push(id);
        Ok(())
    }

    /// Remove `id` under the hard-cap policy.
    ///
    /// # Errors
    ///
    /// [`ChargenError::NotChosen`] if `id` is not in the set.
    pub fn remove(&mut self, id: &EntityId) -> Result<(), ChargenError> {
        match self.chosen.iter().position(|c| c == id) {
            Some(index) => {
                self.chosen.remove(index);
                Ok(())
            }
            None => Err(ChargenError::NotChosen(id.clone())),
        }
    }
}
