//! Raw dataset types.
//!
//! These mirror the static JSON document exactly as it is served:
//! cross-entity relationships are `EntityId` strings, weapons/armor/items
//! are still three separate collections, and field names are camelCase
//! on the wire. A `RawDataset` is only an intermediate form — it is
//! consumed by [`crate::denormalise::denormalise`] to produce the
//! embedded [`crate::Dataset`] the rest of the crate works with.

use crate::entity_id::EntityId;
use serde::{Deserialize, Serialize};

/// The static dataset as loaded, before any reference resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataset {
    pub abilities: Vec<RawAbility>,
    pub skills: Vec<RawSkill>,
    pub weapons: Vec<RawItem>,
    pub armor: Vec<RawItem>,
    pub items: Vec<RawItem>,
    pub races: Vec<RawRace>,
    pub classes: Vec<RawClass>,
    pub spells: Vec<RawSpell>,
    pub cantrips: Vec<RawCantrip>,
}

/// One of the six abilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAbility {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// A learnable skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSkill {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// An entry from any of the three item collections (weapons, armor,
/// generic items). The source collection becomes the item's category
/// during denormalisation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A playable race, referencing abilities and items by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRace {
    pub id: EntityId,
    pub name: String,
    /// Six entries aligned to the fixed ability ordering.
    pub ability_bonuses: Vec<RawAbilityBonus>,
    pub weapon_proficiencies: Vec<EntityId>,
    pub additional_skill_proficiencies: usize,
}

/// An `{id, bonus}` pair from a race's ability bonus list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAbilityBonus {
    pub id: EntityId,
    pub bonus: i32,
}

/// A playable class, referencing abilities, skills, items, spells and
/// cantrips by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClass {
    pub id: EntityId,
    pub name: String,
    pub equipment: Vec<RawEquipment>,
    /// Six `{id, value}` default-score entries aligned to the fixed
    /// ability ordering.
    pub abilities: Vec<RawAbilityDefault>,
    pub proficiencies: RawProficiencies,
    pub spellcasting: RawSpellcasting,
}

/// An `{id, quantity}` pair from a class's starting equipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEquipment {
    pub id: EntityId,
    pub quantity: u32,
}

/// An `{id, value}` pair from a class's ability defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAbilityDefault {
    pub id: EntityId,
    pub value: i32,
}

/// A class's proficiency block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProficiencies {
    pub armor: Vec<EntityId>,
    pub weapons: Vec<EntityId>,
    pub saving_throws: Vec<EntityId>,
    pub skills: RawChoose,
}

/// A bounded choice over referenced entities: pick `choose` out of `from`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChoose {
    pub choose: usize,
    pub from: Vec<EntityId>,
}

/// A class's spellcasting block. A `null` ability marks a non-casting
/// class; its cantrip and spell lists are then left unresolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSpellcasting {
    pub ability: Option<EntityId>,
    pub cantrips: RawChoose,
    pub spells: RawChoose,
}

/// A levelled spell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSpell {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A cantrip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCantrip {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
