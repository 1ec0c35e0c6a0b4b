//! The mutable in-progress character.
//!
//! A `Character` holds only user-authored state: the chosen race and
//! class ids, the three choice lists, the six ability point slots, and
//! the free-form narrative fields. Everything derived (modifiers,
//! capacities, adjusted scores) lives on
//! [`crate::session::CharacterSession`].
//!
//! The struct serialises to the camelCase JSON shape the submission
//! endpoint expects; an unset ability slot appears as the string
//! `"--"`.

use crate::ability::ScoreValue;
use crate::choices::ChoiceSet;
use crate::dataset::Dataset;
use crate::entity_id::EntityId;
use crate::error::ChargenError;
use serde::{Deserialize, Serialize};

/// One ability point slot: the ability's id plus the assigned value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityPoint {
    pub id: EntityId,
    pub value: ScoreValue,
}

/// The in-progress character record.
///
/// Created empty at session start, mutated exclusively through
/// [`crate::session::CharacterSession`] operations, and cloned into a
/// detached snapshot for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Chosen race id. May fail to resolve against the dataset; the
    /// session's accessors treat that as "no race" rather than an error.
    pub race: EntityId,
    /// Chosen class id, with the same silent-absence semantics.
    pub class: EntityId,
    pub class_skill_choices: ChoiceSet,
    pub class_cantrip_choices: ChoiceSet,
    pub class_spell_choices: ChoiceSet,
    /// Six slots aligned to the fixed ability ordering.
    pub ability_points: [AbilityPoint; 6],

    // Narrative fields. No computation reads these.
    pub name: String,
    pub age: Option<u32>,
    pub gender: String,
    pub alignment: String,
    pub background: String,
    pub traits: Vec<String>,
    pub ideals: Vec<String>,
    pub bonds: Vec<String>,
    pub flaws: Vec<String>,
    pub height: String,
    pub build: String,
    pub skin_tone: String,
    pub hair_color: String,
    pub hair_style: String,
    pub hair_length: String,
    pub hair_type: String,
    pub facial_hair_style: String,
    pub facial_hair_length: String,
    pub eye_color: String,
    pub eye_shape: String,
    pub distinguishing_features: Vec<String>,
    pub clothing_style: String,
    pub clothing_colors: Vec<String>,
    pub clothing_accessories: Vec<String>,
}

impl Character {
    /// Create an empty character seeded from `data`.
    ///
    /// The original hardcoded placeholder race and class ids that exist
    /// in its shipped dataset; here the placeholders are the dataset's
    /// first race and first class, so they always resolve for the
    /// dataset in play. The six ability slots take the dataset's
    /// ability ids in fixed order, all unset.
    ///
    /// # Errors
    ///
    /// [`ChargenError::MalformedDataset`] if the dataset has no races
    /// or no classes to seed the placeholders from.
    pub fn empty(data: &Dataset) -> Result<Character, ChargenError> {
        let race = data
            .races
            .first()
            .map(|r| r.id.clone())
            .ok_or_else(|| ChargenError::MalformedDataset("dataset has no races".into()))?;
        let class = data
            .classes
            .first()
            .map(|c| c.id.clone())
            .ok_or_else(|| ChargenError::MalformedDataset("dataset has no classes".into()))?;

        let ability_points = data.abilities.clone().map(|ability| AbilityPoint {
            id: ability.id,
            value: ScoreValue::Unset,
        });

        Ok(Character {
            race,
            class,
            class_skill_choices: ChoiceSet::new(),
            class_cantrip_choices: ChoiceSet::new(),
            class_spell_choices: ChoiceSet::new(),
            ability_points,
            name: String::new(),
            age: None,
            gender: String::new(),
            alignment: String::new(),
            background: String::new(),
            traits: Vec::new(),
            ideals: Vec::new(),
            bonds: Vec::new(),
            flaws: Vec::new(),
            height: String::new(),
            build: String::new(),
            skin_tone: String::new(),
            hair_color: String::new(),
            hair_style: String::new(),
            hair_length: String::new(),
            hair_type: String::new(),
            facial_hair_style: String::new(),
            facial_hair_length: String::new(),
            eye_color: String::new(),
            eye_shape: String::new(),
            distinguishing_features: Vec::new(),
            clothing_style: String::new(),
            clothing_colors: Vec::new(),
            clothing_accessories: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialises_to_camel_case() {
        let point = AbilityPoint {
            id: EntityId::new("a-str"),
            value: ScoreValue::Unset,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"id":"a-str","value":"--"}"#);
    }
}
