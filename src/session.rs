//! Character building session.
//!
//! A `CharacterSession` owns the in-progress [`Character`] and shares
//! the denormalised [`Dataset`] read-only. It is the single mutation
//! path for the character and the home of every derived value: resolved
//! race/class, skill proficiency capacity, adjusted ability scores,
//! modifiers, and the remaining standard-array options per slot.
//!
//! Per-operation failures (capacity violations, missing class) are
//! local: they are logged, returned as errors, and leave the character
//! exactly as it was.

use crate::ability::{score_modifier, AbilityKey, ScoreValue, STANDARD_ARRAY};
use crate::character::Character;
use crate::choices::Toggle;
use crate::dataset::{Class, Dataset, Race};
use crate::entity_id::EntityId;
use crate::error::ChargenError;
use log::{debug, warn};
use std::sync::Arc;

/// A single user's character building session.
pub struct CharacterSession {
    data: Arc<Dataset>,
    character: Character,
}

impl CharacterSession {
    /// Start a session with an empty character seeded from `data`.
    ///
    /// # Errors
    ///
    /// [`ChargenError::MalformedDataset`] if the dataset cannot seed
    /// the placeholder race and class (see [`Character::empty`]).
    pub fn new(data: Arc<Dataset>) -> Result<CharacterSession, ChargenError> {
        let character = Character::empty(&data)?;
        Ok(CharacterSession { data, character })
    }

    /// Resume a session over an existing character.
    pub fn with_character(data: Arc<Dataset>, character: Character) -> CharacterSession {
        CharacterSession { data, character }
    }

    /// The shared dataset.
    pub fn data(&self) -> &Dataset {
        &self.data
    }

    /// The live character record.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// A detached deep copy of the character, suitable for handing to
    /// a submission collaborator. Mutating the session afterwards does
    /// not affect the snapshot.
    pub fn snapshot(&self) -> Character {
        self.character.clone()
    }

    // ------------------------------------------------------------------
    // Race and class
    // ------------------------------------------------------------------

    /// The chosen race, or `None` if the character's race id does not
    /// resolve against the dataset.
    pub fn race(&self) -> Option<&Race> {
        self.data.race(&self.character.race)
    }

    /// The chosen class, or `None` if the character's class id does not
    /// resolve against the dataset.
    pub fn class(&self) -> Option<&Class> {
        self.data.class(&self.character.class)
    }

    /// Choose a race.
    ///
    /// Side effect: clears the skill choice set, since the capacity and
    /// the eligible skill pool may both change with the race.
    pub fn set_race(&mut self, id: EntityId) {
        debug!("race changed to {id}; clearing skill choices");
        self.character.race = id;
        self.character.class_skill_choices.clear();
    }

    /// Choose a class.
    pub fn set_class(&mut self, id: EntityId) {
        debug!("class changed to {id}");
        self.character.class = id;
    }

    /// True iff the chosen class casts spells.
    ///
    /// # Errors
    ///
    /// [`ChargenError::NoClassChosen`] if no class resolves. Callers
    /// that cannot guarantee a class should check [`Self::class`]
    /// first.
    pub fn is_spellcaster(&self) -> Result<bool, ChargenError> {
        let class = self.class().ok_or(ChargenError::NoClassChosen)?;
        Ok(class.is_caster())
    }

    // ------------------------------------------------------------------
    // Ability scores
    // ------------------------------------------------------------------

    /// The raw value stored in the slot for `key`, bonuses not applied.
    pub fn base_score(&self, key: AbilityKey) -> ScoreValue {
        self.character.ability_points[key.index()].value
    }

    /// The racial bonus for `key`; 0 while no race resolves.
    pub fn racial_bonus(&self, key: AbilityKey) -> i32 {
        self.race()
            .map(|race| race.ability_bonuses[key.index()].bonus)
            .unwrap_or(0)
    }

    /// The base score with the racial bonus applied; an unset slot
    /// stays unset.
    pub fn adjusted_score(&self, key: AbilityKey) -> ScoreValue {
        match self.base_score(key) {
            ScoreValue::Unset => ScoreValue::Unset,
            ScoreValue::Set(base) => ScoreValue::Set(base + self.racial_bonus(key)),
        }
    }

    /// The modifier for `key`'s adjusted score; 0 while the slot is
    /// unset.
    pub fn ability_modifier(&self, key: AbilityKey) -> i32 {
        match self.adjusted_score(key) {
            ScoreValue::Unset => 0,
            ScoreValue::Set(score) => score_modifier(score),
        }
    }

    /// The values the slot for `key` may currently be set to.
    ///
    /// The unset sentinel comes first, followed by every standard-array
    /// value that is either this slot's own current value or not
    /// assigned to any slot. Only the queried slot's own value is
    /// special-cased — deliberately so, matching the original's filter
    /// even in its duplicate-value edge case.
    pub fn point_options(&self, key: AbilityKey) -> Vec<ScoreValue> {
        let current = self.base_score(key);
        let mut options = vec![ScoreValue::Unset];
        for point in STANDARD_ARRAY {
            let assigned = self
                .character
                .ability_points
                .iter()
                .any(|slot| slot.value == ScoreValue::Set(point));
            if current == ScoreValue::Set(point) || !assigned {
                options.push(ScoreValue::Set(point));
            }
        }
        options
    }

    /// Store `value` into the slot for `key`.
    ///
    /// No validation is applied, as in the original — a UI is expected
    /// to offer only the values from [`Self::point_options`].
    pub fn assign_point(&mut self, key: AbilityKey, value: ScoreValue) {
        debug!("ability {key} set to {value}");
        self.character.ability_points[key.index()].value = value;
    }

    /// Set all six slots back to the unset sentinel.
    pub fn reset_points(&mut self) {
        debug!("ability points reset to unset");
        for slot in &mut self.character.ability_points {
            slot.value = ScoreValue::Unset;
        }
    }

    /// Copy the chosen class's six default scores into the slots, in
    /// matching order.
    ///
    /// # Errors
    ///
    /// [`ChargenError::NoClassChosen`] if no class resolves; the slots
    /// are left untouched.
    pub fn reset_points_to_class_defaults(&mut self) -> Result<(), ChargenError> {
        let class = self.class().ok_or(ChargenError::NoClassChosen)?;
        let defaults: Vec<i32> = class.ability_defaults.iter().map(|d| d.value).collect();
        debug!("ability points reset to defaults for class {}", class.name);
        for (slot, value) in self.character.ability_points.iter_mut().zip(defaults) {
            slot.value = ScoreValue::Set(value);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Skills
    // ------------------------------------------------------------------

    /// How many skill proficiencies the character may hold: the class's
    /// choose-count plus the race's additional proficiencies, each
    /// contributing 0 while unresolved.
    pub fn skill_capacity(&self) -> usize {
        let from_class = self
            .class()
            .map(|c| c.proficiencies.skills.choose)
            .unwrap_or(0);
        let from_race = self
            .race()
            .map(|r| r.additional_skill_proficiencies)
            .unwrap_or(0);
        from_class + from_race
    }

    /// Toggle a skill choice under the rolling-replacement policy:
    /// present removes, absent appends, and at capacity the oldest pick
    /// is silently evicted.
    pub fn toggle_skill(&mut self, id: EntityId) -> Toggle {
        let capacity = self.skill_capacity();
        let outcome = self.character.class_skill_choices.toggle(id, capacity);
        if let Toggle::Replaced(evicted) = &outcome {
            debug!("skill choice evicted oldest pick {evicted}");
        }
        outcome
    }

    // ------------------------------------------------------------------
    // Cantrips and spells
    // ------------------------------------------------------------------

    /// How many cantrips the chosen class grants; 0 for non-casters and
    /// while no class resolves.
    pub fn cantrip_capacity(&self) -> usize {
        self.class()
            .and_then(|c| c.spellcasting.as_ref())
            .map(|s| s.cantrips.choose)
            .unwrap_or(0)
    }

    /// How many spells the chosen class grants; 0 for non-casters and
    /// while no class resolves.
    pub fn spell_capacity(&self) -> usize {
        self.class()
            .and_then(|c| c.spellcasting.as_ref())
            .map(|s| s.spells.choose)
            .unwrap_or(0)
    }

    /// Add a cantrip choice under the hard-cap policy.
    ///
    /// # Errors
    ///
    /// [`ChargenError::DuplicateChoice`] or
    /// [`ChargenError::CapacityReached`]; the set is untouched.
    pub fn add_cantrip(&mut self, id: EntityId) -> Result<(), ChargenError> {
        let capacity = self.cantrip_capacity();
        self.character
            .class_cantrip_choices
            .add(id, capacity)
            .inspect_err(|e| warn!("cantrip choice rejected: {e}"))
    }

    /// Remove a cantrip choice.
    ///
    /// # Errors
    ///
    /// [`ChargenError::NotChosen`] if the id is not chosen.
    pub fn remove_cantrip(&mut self, id: &EntityId) -> Result<(), ChargenError> {
        self.character
            .class_cantrip_choices
            .remove(id)
            .inspect_err(|e| warn!("cantrip removal rejected: {e}"))
    }

    /// Add a spell choice under the hard-cap policy.
    ///
    /// # Errors
    ///
    /// [`ChargenError::DuplicateChoice`] or
    /// [`ChargenError::CapacityReached`]; the set is untouched.
    pub fn add_spell(&mut self, id: EntityId) -> Result<(), ChargenError> {
        let capacity = self.spell_capacity();
        self.character
            .class_spell_choices
            .add(id, capacity)
            .inspect_err(|e| warn!("spell choice rejected: {e}"))
    }

    /// Remove a spell choice.
    ///
    /// # Errors
    ///
    /// [`ChargenError::NotChosen`] if the id is not chosen.
    pub fn remove_spell(&mut self, id: &EntityId) -> Result<(), ChargenError> {
        self.character
            .class_spell_choices
            .remove(id)
            .inspect_err(|e| warn!("spell removal rejected: {e}"))
    }
}
