//! # chargen - Data-Driven Character Creation Engine
//!
//! A character creation core for tabletop RPGs that provides:
//! - **Dataset denormalisation** (id references resolved into embedded entities, once, by type)
//! - **Derived state** (ability modifiers, adjusted scores, proficiency capacities)
//! - **Bounded choice semantics** (rolling replacement for skills, hard caps for spells/cantrips)
//!
//! ## Core Concepts
//!
//! ### Dataset Pipeline
//!
//! The static dataset flows through a simple pipeline:
//!
//! ```text
//! [RawDataset] → [denormalise] → [Dataset] → [CharacterSession]
//! ```
//!
//! 1. **RawDataset** mirrors the JSON document: relationships are id strings
//! 2. **denormalise** consumes it and embeds every referenced entity
//! 3. **Dataset** is shared read-only; the session derives everything from it
//!
//! The raw and denormalised forms are distinct types and denormalisation
//! consumes its input, so a dataset cannot be denormalised twice.
//!
//! ### Key Features
//!
//! - **Loud reference errors**: a dangling id fails dataset loading instead of
//!   surfacing as a silent absence later
//! - **Fixed ability ordering**: six-slot alignments are `[T; 6]` arrays
//! - **Two choice policies**: skills keep the N most recent picks; spells and
//!   cantrips reject past their cap
//! - **Detached snapshots**: submission gets a deep copy, never the live record
//!
//! ## Example
//!
//! ```rust
//! use chargen::{load_dataset, AbilityKey, CharacterSession, ScoreValue};
//! use std::sync::Arc;
//!
//! let data = load_dataset(
//!     r#"{
//!         "abilities": [
//!             {"id": "str", "name": "Strength"},
//!             {"id": "dex", "name": "Dexterity"},
//!             {"id": "con", "name": "Constitution"},
//!             {"id": "int", "name": "Intelligence"},
//!             {"id": "wis", "name": "Wisdom"},
//!             {"id": "cha", "name": "Charisma"}
//!         ],
//!         "skills": [{"id": "athletics", "name": "Athletics"}],
//!         "weapons": [{"id": "sword", "name": "Longsword"}],
//!         "armor": [],
//!         "items": [],
//!         "races": [{
//!             "id": "human",
//!             "name": "Human",
//!             "abilityBonuses": [
//!                 {"id": "str", "bonus": 1}, {"id": "dex", "bonus": 0},
//!                 {"id": "con", "bonus": 0}, {"id": "int", "bonus": 0},
//!                 {"id": "wis", "bonus": 0}, {"id": "cha", "bonus": 0}
//!             ],
//!             "weaponProficiencies": ["sword"],
//!             "additionalSkillProficiencies": 1
//!         }],
//!         "classes": [{
//!             "id": "fighter",
//!             "name": "Fighter",
//!             "equipment": [{"id": "sword", "quantity": 1}],
//!             "abilities": [
//!                 {"id": "str", "value": 15}, {"id": "dex", "value": 13},
//!                 {"id": "con", "value": 14}, {"id": "int", "value": 8},
//!                 {"id": "wis", "value": 10}, {"id": "cha", "value": 12}
//!             ],
//!             "proficiencies": {
//!                 "armor": [],
//!                 "weapons": ["sword"],
//!                 "savingThrows": ["str", "con"],
//!                 "skills": {"choose": 2, "from": ["athletics"]}
//!             },
//!             "spellcasting": {
//!                 "ability": null,
//!                 "cantrips": {"choose": 0, "from": []},
//!                 "spells": {"choose": 0, "from": []}
//!             }
//!         }],
//!         "spells": [],
//!         "cantrips": []
//!     }"#,
//! )
//! .unwrap();
//!
//! let mut session = CharacterSession::new(Arc::new(data)).unwrap();
//!
//! // Fighter defaults + human strength bonus: 15 + 1 = 16, modifier +3.
//! session.reset_points_to_class_defaults().unwrap();
//! assert_eq!(session.adjusted_score(AbilityKey::Strength), ScoreValue::Set(16));
//! assert_eq!(session.ability_modifier(AbilityKey::Strength), 3);
//!
//! // Two class picks plus one racial pick.
//! assert_eq!(session.skill_capacity(), 3);
//! session.toggle_skill("athletics".into());
//!
//! let snapshot = session.snapshot();
//! assert!(snapshot.class_skill_choices.contains(&"athletics".into()));
//! ```
//!
//! ## Modules
//!
//! - [`entity_id`] - Entity identifier type
//! - [`ability`] - Fixed ability ordering, score sentinel, modifier arithmetic
//! - [`raw`] - Raw dataset wire types
//! - [`dataset`] - Denormalised dataset types
//! - [`denormalise`] - The denormalisation pass
//! - [`character`] - The mutable character record
//! - [`choices`] - Capacity-bounded choice sets
//! - [`session`] - The character building session
//! - [`loader`] - Dataset loading (str, file, optional HTTP fetch)
//! - [`error`] - Error types

pub mod ability;
pub mod character;
pub mod choices;
pub mod dataset;
pub mod denormalise;
pub mod entity_id;
pub mod error;
pub mod loader;
pub mod raw;
pub mod session;

// Re-export main types for convenience
pub use ability::{score_modifier, AbilityKey, ScoreValue, STANDARD_ARRAY};
pub use character::{AbilityPoint, Character};
pub use choices::{ChoiceSet, Toggle};
pub use dataset::Dataset;
pub use denormalise::denormalise;
pub use entity_id::EntityId;
pub use error::ChargenError;
pub use loader::{load_dataset, load_dataset_file};
pub use raw::RawDataset;
pub use session::CharacterSession;

#[cfg(feature = "fetch")]
pub use loader::fetch_dataset;
