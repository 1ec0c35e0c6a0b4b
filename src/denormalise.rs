//! Dataset denormalisation.
//!
//! The raw document encodes cross-entity relationships as id strings.
//! [`denormalise`] resolves every one of those references into an
//! embedded copy of the target entity, producing a self-contained
//! [`Dataset`]. The transformation consumes its input and the output is
//! a distinct type, so running it twice over the same data is a
//! compile-time impossibility rather than a runtime hazard.
//!
//! Passes, in order:
//! 1. merge the weapon, armor and generic item collections into one
//!    (strict union, categories tagged, no de-duplication)
//! 2. denormalise every class
//! 3. denormalise every race
//!
//! Item merging has to come first because classes and races reference
//! items; the class and race passes are independent of each other.
//!
//! Unlike the original, which silently embedded an absent value for a
//! dangling reference, this implementation fails loudly with
//! [`ChargenError::UnresolvedReference`]. Every reference embedded in
//! the returned `Dataset` is therefore guaranteed to resolve.

use crate::dataset::{
    Ability, AbilityBonus, AbilityDefault, Cantrip, Choose, Class, Dataset, EntityKind, Equipment,
    Item, ItemCategory, Proficiencies, Race, Skill, Spell, Spellcasting,
};
use crate::entity_id::EntityId;
use crate::error::ChargenError;
use crate::raw::{
    RawAbility, RawCantrip, RawClass, RawDataset, RawItem, RawRace, RawSkill, RawSpell,
};
use log::{debug, info};
use std::collections::HashMap;

/// Resolve every id reference in `raw`, returning a self-contained
/// dataset.
///
/// # Errors
///
/// - [`ChargenError::UnresolvedReference`] if any id points at nothing
/// - [`ChargenError::MalformedDataset`] if the ability collection or a
///   six-slot list is not exactly six entries long
pub fn denormalise(raw: RawDataset) -> Result<Dataset, ChargenError> {
    let RawDataset {
        abilities,
        skills,
        weapons,
        armor,
        items,
        races,
        classes,
        spells,
        cantrips,
    } = raw;

    let item_counts = (weapons.len(), armor.len(), items.len());
    let items = merge_items(weapons, armor, items);

    let abilities: Vec<Ability> = abilities.into_iter().map(ability_entity).collect();
    let abilities: [Ability; 6] = six(abilities, "abilities")?;
    let skills: Vec<Skill> = skills.into_iter().map(skill_entity).collect();
    let spells: Vec<Spell> = spells.into_iter().map(spell_entity).collect();
    let cantrips: Vec<Cantrip> = cantrips.into_iter().map(cantrip_entity).collect();

    let lookup = Lookup::new(&abilities, &skills, &items, &spells, &cantrips);

    let classes = classes
        .into_iter()
        .map(|class| denormalise_class(class, &lookup))
        .collect::<Result<Vec<_>, _>>()?;
    let races = races
        .into_iter()
        .map(|race| denormalise_race(race, &lookup))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "denormalised dataset: {} items ({} weapons, {} armor, {} other), {} races, {} classes, \
         {} skills, {} spells, {} cantrips",
        items.len(),
        item_counts.0,
        item_counts.1,
        item_counts.2,
        races.len(),
        classes.len(),
        skills.len(),
        spells.len(),
        cantrips.len(),
    );

    Ok(Dataset {
        abilities,
        skills,
        items,
        races,
        classes,
        spells,
        cantrips,
    })
}

/// Merge the three raw item collections into one, tagging each entry
/// with the collection it came from. Strict union: every entry is kept,
/// duplicates included.
fn merge_items(weapons: Vec<RawItem>, armor: Vec<RawItem>, items: Vec<RawItem>) -> Vec<Item> {
    weapons
        .into_iter()
        .map(|i| item_entity(i, ItemCategory::Weapon))
        .chain(armor.into_iter().map(|i| item_entity(i, ItemCategory::Armor)))
        .chain(items.into_iter().map(|i| item_entity(i, ItemCategory::Other)))
        .collect()
}

fn denormalise_class(class: RawClass, lookup: &Lookup<'_>) -> Result<Class, ChargenError> {
    debug!("denormalising class {}", class.name);

    // Equipment changes shape: {id, quantity} becomes {item, quantity}.
    let equipment = class
        .equipment
        .into_iter()
        .map(|e| {
            Ok(Equipment {
                item: lookup.item(&e.id)?,
                quantity: e.quantity,
            })
        })
        .collect::<Result<Vec<_>, ChargenError>>()?;

    // Ability defaults change shape too: {id, value} becomes
    // {ability, value}, in the same fixed order.
    let defaults = class
        .abilities
        .into_iter()
        .map(|d| {
            Ok(AbilityDefault {
                ability: lookup.ability(&d.id)?,
                value: d.value,
            })
        })
        .collect::<Result<Vec<_>, ChargenError>>()?;
    let ability_defaults = six(defaults, "class ability defaults")?;

    let proficiencies = Proficiencies {
        armor: lookup.items(class.proficiencies.armor)?,
        weapons: lookup.items(class.proficiencies.weapons)?,
        saving_throws: lookup.abilities(class.proficiencies.saving_throws)?,
        skills: Choose {
            choose: class.proficiencies.skills.choose,
            from: lookup.skills(class.proficiencies.skills.from)?,
        },
    };

    // Only casters get their spell lists resolved; a null ability marks
    // a non-caster and its lists are dropped entirely.
    let spellcasting = match class.spellcasting.ability {
        Some(ability_id) => Some(Spellcasting {
            ability: lookup.ability(&ability_id)?,
            cantrips: Choose {
                choose: class.spellcasting.cantrips.choose,
                from: lookup.cantrips(class.spellcasting.cantrips.from)?,
            },
            spells: Choose {
                choose: class.spellcasting.spells.choose,
                from: lookup.spells(class.spellcasting.spells.from)?,
            },
        }),
        None => None,
    };

    Ok(Class {
        id: class.id,
        name: class.name,
        equipment,
        ability_defaults,
        proficiencies,
        spellcasting,
    })
}

fn denormalise_race(race: RawRace, lookup: &Lookup<'_>) -> Result<Race, ChargenError> {
    debug!("denormalising race {}", race.name);

    let bonuses = race
        .ability_bonuses
        .into_iter()
        .map(|b| {
            Ok(AbilityBonus {
                ability: lookup.ability(&b.id)?,
                bonus: b.bonus,
            })
        })
        .collect::<Result<Vec<_>, ChargenError>>()?;
    let ability_bonuses = six(bonuses, "race ability bonuses")?;

    Ok(Race {
        id: race.id,
        name: race.name,
        ability_bonuses,
        weapon_proficiencies: lookup.items(race.weapon_proficiencies)?,
        additional_skill_proficiencies: race.additional_skill_proficiencies,
    })
}

/// By-id lookup tables over the already-converted leaf entities.
///
/// Built by inserting in collection order, so on an id collision the
/// later entry wins.
struct Lookup<'a> {
    abilities: HashMap<&'a EntityId, &'a Ability>,
    skills: HashMap<&'a EntityId, &'a Skill>,
    items: HashMap<&'a EntityId, &'a Item>,
    spells: HashMap<&'a EntityId, &'a Spell>,
    cantrips: HashMap<&'a EntityId, &'a Cantrip>,
}

impl<'a> Lookup<'a> {
    fn new(
        abilities: &'a [Ability],
        skills: &'a [Skill],
        items: &'a [Item],
        spells: &'a [Spell],
        cantrips: &'a [Cantrip],
    ) -> Self {
        Self {
            abilities: abilities.iter().map(|a| (&a.id, a)).collect(),
            skills: skills.iter().map(|s| (&s.id, s)).collect(),
            items: items.iter().map(|i| (&i.id, i)).collect(),
            spells: spells.iter().map(|s| (&s.id, s)).collect(),
            cantrips: cantrips.iter().map(|c| (&c.id, c)).collect(),
        }
    }

    fn ability(&self, id: &EntityId) -> Result<Ability, ChargenError> {
        self.abilities
            .get(id)
            .map(|a| (*a).clone())
            .ok_or_else(|| unresolved(EntityKind::Ability, id))
    }

    fn skill(&self, id: &EntityId) -> Result<Skill, ChargenError> {
        self.skills
            .get(id)
            .map(|s| (*s).clone())
            .ok_or_else(|| unresolved(EntityKind::Skill, id))
    }

    fn item(&self, id: &EntityId) -> Result<Item, ChargenError> {
        self.items
            .get(id)
            .map(|i| (*i).clone())
            .ok_or_else(|| unresolved(EntityKind::Item, id))
    }

    fn spell(&self, id: &EntityId) -> Result<Spell, ChargenError> {
        self.spells
            .get(id)
            .map(|s| (*s).clone())
            .ok_or_else(|| unresolved(EntityKind::Spell, id))
    }

    fn cantrip(&self, id: &EntityId) -> Result<Cantrip, ChargenError> {
        self.cantrips
            .get(id)
            .map(|c| (*c).clone())
            .ok_or_else(|| unresolved(EntityKind::Cantrip, id))
    }

    fn abilities(&self, ids: Vec<EntityId>) -> Result<Vec<Ability>, ChargenError> {
        ids.iter().map(|id| self.ability(id)).collect()
    }

    fn skills(&self, ids: Vec<EntityId>) -> Result<Vec<Skill>, ChargenError> {
        ids.iter().map(|id| self.skill(id)).collect()
    }

    fn items(&self, ids: Vec<EntityId>) -> Result<Vec<Item>, ChargenError> {
        ids.iter().map(|id| self.item(id)).collect()
    }

    fn spells(&self, ids: Vec<EntityId>) -> Result<Vec<Spell>, ChargenError> {
        ids.iter().map(|id| self.spell(id)).collect()
    }

    fn cantrips(&self, ids: Vec<EntityId>) -> Result<Vec<Cantrip>, ChargenError> {
        ids.iter().map(|id| self.cantrip(id)).collect()
    }
}

fn unresolved(kind: EntityKind, id: &EntityId) -> ChargenError {
    ChargenError::UnresolvedReference {
        kind,
        id: id.clone(),
    }
}

fn six<T>(entries: Vec<T>, what: &str) -> Result<[T; 6], ChargenError> {
    let len = entries.len();
    entries.try_into().map_err(|_| {
        ChargenError::MalformedDataset(format!("expected 6 {what}, found {len}"))
    })
}

fn ability_entity(raw: RawAbility) -> Ability {
    Ability {
        id: raw.id,
        name: raw.name,
        abbreviation: raw.abbreviation,
    }
}

fn skill_entity(raw: RawSkill) -> Skill {
    Skill {
        id: raw.id,
        name: raw.name,
        description: raw.description,
    }
}

fn item_entity(raw: RawItem, category: ItemCategory) -> Item {
    Item {
        id: raw.id,
        name: raw.name,
        category,
        description: raw.description,
    }
}

fn spell_entity(raw: RawSpell) -> Spell {
    Spell {
        id: raw.id,
        name: raw.name,
        description: raw.description,
    }
}

fn cantrip_entity(raw: RawCantrip) -> Cantrip {
    Cantrip {
        id: raw.id,
        name: raw.name,
        description: raw.description,
    }
}
