//! Denormalised dataset types.
//!
//! A `Dataset` is fully self-contained: every field that semantically
//! references another entity holds an embedded copy of that entity, not
//! an id. It is produced exactly once per loaded document by
//! [`crate::denormalise::denormalise`] and treated as shared, read-only
//! state afterwards (a `CharacterSession` holds it behind an `Arc`).
//!
//! Six-slot alignments (class ability defaults, race ability bonuses)
//! are `[T; 6]` arrays, so the fixed ability ordering is part of the
//! type rather than a convention.

use crate::entity_id::EntityId;
use serde::{Deserialize, Serialize};

/// The kinds of entity a dataset contains. Used in error reporting
/// when a reference fails to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Ability,
    Skill,
    Item,
    Race,
    Class,
    Spell,
    Cantrip,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EntityKind::Ability => "ability",
            EntityKind::Skill => "skill",
            EntityKind::Item => "item",
            EntityKind::Race => "race",
            EntityKind::Class => "class",
            EntityKind::Spell => "spell",
            EntityKind::Cantrip => "cantrip",
        })
    }
}

/// One of the six abilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// A learnable skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Which source collection an item was merged from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemCategory {
    Weapon,
    Armor,
    Other,
}

/// An item from the unified item collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub category: ItemCategory,
    #[serde(default)]
    pub description: Option<String>,
}

/// An embedded ability with the bonus a race grants for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityBonus {
    pub ability: Ability,
    pub bonus: i32,
}

/// An embedded ability with a class's default score for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityDefault {
    pub ability: Ability,
    pub value: i32,
}

/// An embedded item with a starting quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub item: Item,
    pub quantity: u32,
}

/// A bounded choice over embedded entities: pick `choose` out of `from`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choose<T> {
    pub choose: usize,
    pub from: Vec<T>,
}

/// A class's proficiency block with everything embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proficiencies {
    pub armor: Vec<Item>,
    pub weapons: Vec<Item>,
    pub saving_throws: Vec<Ability>,
    pub skills: Choose<Skill>,
}

/// A caster class's spellcasting block. Non-casters carry no block at
/// all (`Class::spellcasting` is `None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spellcasting {
    pub ability: Ability,
    pub cantrips: Choose<Cantrip>,
    pub spells: Choose<Spell>,
}

/// A playable race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: EntityId,
    pub name: String,
    /// Aligned to the fixed six-ability ordering.
    pub ability_bonuses: [AbilityBonus; 6],
    pub weapon_proficiencies: Vec<Item>,
    pub additional_skill_proficiencies: usize,
}

/// A playable class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: EntityId,
    pub name: String,
    pub equipment: Vec<Equipment>,
    /// Aligned to the fixed six-ability ordering.
    pub ability_defaults: [AbilityDefault; 6],
    pub proficiencies: Proficiencies,
    pub spellcasting: Option<Spellcasting>,
}

impl Class {
    /// True iff this class casts spells.
    pub fn is_caster(&self) -> bool {
        self.spellcasting.is_some()
    }
}

/// A levelled spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A cantrip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cantrip {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The fully denormalised dataset.
///
/// Lookups scan the collections the way the original did; the
/// collections are small (a handful of races and classes, tens of
/// items) and are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// The six abilities, in the fixed ordering.
    pub abilities: [Ability; 6],
    pub skills: Vec<Skill>,
    /// Strict union of the raw weapon, armor and item collections.
    pub items: Vec<Item>,
    pub races: Vec<Race>,
    pub classes: Vec<Class>,
    pub spells: Vec<Spell>,
    pub cantrips: Vec<Cantrip>,
}

impl Dataset {
    /// Look up an ability by id.
    pub fn ability(&self, id: &EntityId) -> Option<&Ability> {
        self.abilities.iter().find(|a| &a.id == id)
    }

    /// Look up a skill by id.
    pub fn skill(&self, id: &EntityId) -> Option<&Skill> {
        self.skills.iter().find(|s| &s.id == id)
    }

    /// Look up an item by id.
    ///
    /// When the raw collections contained duplicate ids, the entry
    /// merged later wins, matching the original's lookup behavior.
    pub fn item(&self, id: &EntityId) -> Option<&Item> {
        self.items.iter().rev().find(|i| &i.id == id)
    }

    /// Look up a race by id.
    pub fn race(&self, id: &EntityId) -> Option<&Race> {
        self.races.iter().find(|r| &r.id == id)
    }

    /// Look up a class by id.
    pub fn class(&self, id: &EntityId) -> Option<&Class> {
        self.classes.iter().find(|c| &c.id == id)
    }

    /// Look up a spell by id.
    pub fn spell(&self, id: &EntityId) -> Option<&Spell> {
        self.spells.iter().find(|s| &s.id == id)
    }

    /// Look up a cantrip by id.
    pub fn cantrip(&self, id: &EntityId) -> Option<&Cantrip> {
        self.cantrips.iter().find(|c| &c.id == id)
    }
}
