//! Shared fixture for the integration suites.

// Each suite compiles its own copy; not every suite uses every helper.
#![allow(dead_code)]

use chargen::{denormalise, Dataset, RawDataset};
use serde_json::json;

/// A small but complete raw dataset: two races, a martial class and a
/// caster class, items spread over all three source collections.
pub fn raw_fixture() -> serde_json::Value {
    json!({
        "abilities": [
            {"id": "str", "name": "Strength", "abbreviation": "STR"},
            {"id": "dex", "name": "Dexterity", "abbreviation": "DEX"},
            {"id": "con", "name": "Constitution", "abbreviation": "CON"},
            {"id": "int", "name": "Intelligence", "abbreviation": "INT"},
            {"id": "wis", "name": "Wisdom", "abbreviation": "WIS"},
            {"id": "cha", "name": "Charisma", "abbreviation": "CHA"}
        ],
        "skills": [
            {"id": "athletics", "name": "Athletics"},
            {"id": "stealth", "name": "Stealth"},
            {"id": "arcana", "name": "Arcana"},
            {"id": "history", "name": "History"}
        ],
        "weapons": [
            {"id": "longsword", "name": "Longsword"},
            {"id": "longbow", "name": "Longbow"}
        ],
        "armor": [
            {"id": "chain-mail", "name": "Chain Mail"}
        ],
        "items": [
            {"id": "rope", "name": "Hempen Rope"}
        ],
        "races": [
            {
                "id": "human",
                "name": "Human",
                "abilityBonuses": [
                    {"id": "str", "bonus": 1}, {"id": "dex", "bonus": 0},
                    {"id": "con", "bonus": 1}, {"id": "int", "bonus": 0},
                    {"id": "wis", "bonus": 0}, {"id": "cha", "bonus": 0}
                ],
                "weaponProficiencies": ["longsword"],
                "additionalSkillProficiencies": 1
            },
            {
                "id": "elf",
                "name": "Elf",
                "abilityBonuses": [
                    {"id": "str", "bonus": 0}, {"id": "dex", "bonus": 2},
                    {"id": "con", "bonus": 0}, {"id": "int", "bonus": 0},
                    {"id": "wis", "bonus": 0}, {"id": "cha", "bonus": 0}
                ],
                "weaponProficiencies": ["longbow"],
                "additionalSkillProficiencies": 0
            }
        ],
        "classes": [
            {
                "id": "fighter",
                "name": "Fighter",
                "equipment": [
                    {"id": "longsword", "quantity": 1},
                    {"id": "rope", "quantity": 2}
                ],
                "abilities": [
                    {"id": "str", "value": 15}, {"id": "dex", "value": 13},
                    {"id": "con", "value": 14}, {"id": "int", "value": 8},
                    {"id": "wis", "value": 10}, {"id": "cha", "value": 12}
                ],
                "proficiencies": {
                    "armor": ["chain-mail"],
                    "weapons": ["longsword", "longbow"],
                    "savingThrows": ["str", "con"],
                    "skills": {"choose": 2, "from": ["athletics", "history"]}
                },
                "spellcasting": {
                    "ability": null,
                    "cantrips": {"choose": 0, "from": []},
                    "spells": {"choose": 0, "from": []}
                }
            },
            {
                "id": "wizard",
                "name": "Wizard",
                "equipment": [{"id": "rope", "quantity": 1}],
                "abilities": [
                    {"id": "str", "value": 8}, {"id": "dex", "value": 13},
                    {"id": "con", "value": 14}, {"id": "int", "value": 15},
                    {"id": "wis", "value": 10}, {"id": "cha", "value": 12}
                ],
                "proficiencies": {
                    "armor": [],
                    "weapons": [],
                    "savingThrows": ["int", "wis"],
                    "skills": {"choose": 2, "from": ["arcana", "history"]}
                },
                "spellcasting": {
                    "ability": "int",
                    "cantrips": {"choose": 1, "from": ["fire-bolt", "mage-hand", "light"]},
                    "spells": {"choose": 2, "from": ["magic-missile", "shield-spell", "sleep"]}
                }
            }
        ],
        "spells": [
            {"id": "magic-missile", "name": "Magic Missile"},
            {"id": "shield-spell", "name": "Shield"},
            {"id": "sleep", "name": "Sleep"}
        ],
        "cantrips": [
            {"id": "fire-bolt", "name": "Fire Bolt"},
            {"id": "mage-hand", "name": "Mage Hand"},
            {"id": "light", "name": "Light"}
        ]
    })
}

/// The fixture parsed into the raw form.
pub fn raw() -> RawDataset {
    serde_json::from_value(raw_fixture()).unwrap()
}

/// The fixture denormalised.
pub fn dataset() -> Dataset {
    denormalise(raw()).unwrap()
}
