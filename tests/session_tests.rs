mod common;

use chargen::{
    AbilityKey, ChargenError, CharacterSession, EntityId, ScoreValue, Toggle,
};
use common::dataset;
use std::sync::Arc;

fn session() -> CharacterSession {
    CharacterSession::new(Arc::new(dataset())).unwrap()
}

fn id(s: &str) -> EntityId {
    EntityId::new(s)
}

/// A fresh session seeds the placeholders from the dataset and starts
/// with everything unset.
#[test]
fn test_empty_character_seeding() {
    let session = session();
    let character = session.character();

    assert_eq!(character.race.as_str(), "human");
    assert_eq!(character.class.as_str(), "fighter");
    assert!(character.class_skill_choices.is_empty());
    assert!(character.class_cantrip_choices.is_empty());
    assert!(character.class_spell_choices.is_empty());
    for key in AbilityKey::ALL {
        assert_eq!(session.base_score(key), ScoreValue::Unset);
    }
    // Slots carry the abilities' ids in fixed order.
    assert_eq!(character.ability_points[0].id.as_str(), "str");
    assert_eq!(character.ability_points[5].id.as_str(), "cha");
}

/// Adjusted scores apply the racial bonus and leave unset slots unset.
#[test]
fn test_adjusted_scores_and_modifiers() {
    let mut session = session();

    // Unset: sentinel stays, modifier is 0.
    assert_eq!(session.adjusted_score(AbilityKey::Strength), ScoreValue::Unset);
    assert_eq!(session.ability_modifier(AbilityKey::Strength), 0);

    // Human: +1 strength, +1 constitution.
    session.assign_point(AbilityKey::Strength, ScoreValue::Set(15));
    assert_eq!(session.racial_bonus(AbilityKey::Strength), 1);
    assert_eq!(session.adjusted_score(AbilityKey::Strength), ScoreValue::Set(16));
    assert_eq!(session.ability_modifier(AbilityKey::Strength), 3);

    // A score of 9 floors to -1, not 0.
    session.assign_point(AbilityKey::Dexterity, ScoreValue::Set(9));
    assert_eq!(session.racial_bonus(AbilityKey::Dexterity), 0);
    assert_eq!(session.ability_modifier(AbilityKey::Dexterity), -1);
}

/// An unresolvable race contributes no bonus and no skill capacity.
#[test]
fn test_unresolved_race_is_tolerated() {
    let mut session = session();
    session.set_race(id("gnome"));

    assert!(session.race().is_none());
    assert_eq!(session.racial_bonus(AbilityKey::Strength), 0);
    // Fighter still contributes its two class picks.
    assert_eq!(session.skill_capacity(), 2);

    session.assign_point(AbilityKey::Strength, ScoreValue::Set(15));
    assert_eq!(session.adjusted_score(AbilityKey::Strength), ScoreValue::Set(15));
}

/// With capacity 2, adding A, B, C keeps {B, C}; removing B then
/// adding D keeps {C, D}.
#[test]
fn test_skill_toggle_rolls_oldest_out() {
    let mut session = session();
    // Elf grants no extra picks, so fighter + elf is capacity 2.
    session.set_race(id("elf"));
    assert_eq!(session.skill_capacity(), 2);

    assert_eq!(session.toggle_skill(id("athletics")), Toggle::Added);
    assert_eq!(session.toggle_skill(id("history")), Toggle::Added);
    assert_eq!(
        session.toggle_skill(id("stealth")),
        Toggle::Replaced(id("athletics"))
    );
    assert_eq!(
        session.character().class_skill_choices.as_slice(),
        [id("history"), id("stealth")]
    );

    assert_eq!(session.toggle_skill(id("history")), Toggle::Removed);
    assert_eq!(session.toggle_skill(id("arcana")), Toggle::Added);
    assert_eq!(
        session.character().class_skill_choices.as_slice(),
        [id("stealth"), id("arcana")]
    );
}

/// Race plus class capacities combine: human adds one pick on top of
/// the fighter's two.
#[test]
fn test_skill_capacity_combines_race_and_class() {
    let session = session();
    assert_eq!(session.skill_capacity(), 3);
}

/// Changing race clears the skill choices, whatever they were.
#[test]
fn test_race_change_clears_skills() {
    let mut session = session();
    session.toggle_skill(id("athletics"));
    session.toggle_skill(id("history"));
    assert_eq!(session.character().class_skill_choices.len(), 2);

    session.set_race(id("elf"));
    assert!(session.character().class_skill_choices.is_empty());
}

/// Cantrip adds are hard-capped: with capacity 1, the second add is
/// rejected and the set keeps its single entry.
#[test]
fn test_cantrip_capacity_rejects() {
    let mut session = session();
    session.set_class(id("wizard"));
    assert_eq!(session.cantrip_capacity(), 1);

    session.add_cantrip(id("fire-bolt")).unwrap();
    let err = session.add_cantrip(id("mage-hand")).unwrap_err();
    assert!(matches!(err, ChargenError::CapacityReached { capacity: 1 }));
    assert_eq!(
        session.character().class_cantrip_choices.as_slice(),
        [id("fire-bolt")]
    );

    let err = session.add_cantrip(id("fire-bolt")).unwrap_err();
    assert!(matches!(err, ChargenError::DuplicateChoice(_)));
}

/// Spell choices follow the same strict policy with their own capacity.
#[test]
fn test_spell_choices_are_independent() {
    let mut session = session();
    session.set_class(id("wizard"));
    assert_eq!(session.spell_capacity(), 2);

    session.add_spell(id("magic-missile")).unwrap();
    session.add_spell(id("sleep")).unwrap();
    let err = session.add_spell(id("shield-spell")).unwrap_err();
    assert!(matches!(err, ChargenError::CapacityReached { capacity: 2 }));

    let err = session.remove_spell(&id("shield-spell")).unwrap_err();
    assert!(matches!(err, ChargenError::NotChosen(_)));

    session.remove_spell(&id("sleep")).unwrap();
    session.add_spell(id("shield-spell")).unwrap();
    assert_eq!(
        session.character().class_spell_choices.as_slice(),
        [id("magic-missile"), id("shield-spell")]
    );
}

/// A non-caster has zero spell slots, so every strict add rejects.
#[test]
fn test_non_caster_rejects_spells() {
    let mut session = session();
    assert_eq!(session.is_spellcaster().unwrap(), false);
    assert_eq!(session.cantrip_capacity(), 0);

    let err = session.add_cantrip(id("fire-bolt")).unwrap_err();
    assert!(matches!(err, ChargenError::CapacityReached { capacity: 0 }));
}

/// Querying spellcasting with an unresolvable class is a precondition
/// violation, surfaced as an error with no state change.
#[test]
fn test_is_spellcaster_requires_class() {
    let mut session = session();
    session.set_class(id("barbarian"));

    assert!(session.class().is_none());
    assert!(matches!(
        session.is_spellcaster(),
        Err(ChargenError::NoClassChosen)
    ));
}

/// Unset sentinel first, own current value kept, values assigned to
/// other slots excluded.
#[test]
fn test_point_options() {
    let mut session = session();
    session.assign_point(AbilityKey::Strength, ScoreValue::Set(8));
    session.assign_point(AbilityKey::Dexterity, ScoreValue::Set(10));

    // {8, 10} taken elsewhere, queried slot unset.
    assert_eq!(
        session.point_options(AbilityKey::Constitution),
        [
            ScoreValue::Unset,
            ScoreValue::Set(12),
            ScoreValue::Set(13),
            ScoreValue::Set(14),
            ScoreValue::Set(15)
        ]
    );

    // The queried slot's own value is always offered back.
    assert_eq!(
        session.point_options(AbilityKey::Strength),
        [
            ScoreValue::Unset,
            ScoreValue::Set(8),
            ScoreValue::Set(12),
            ScoreValue::Set(13),
            ScoreValue::Set(14),
            ScoreValue::Set(15)
        ]
    );
}

/// Only the queried slot's own value is special-cased; a value shared
/// by two slots still shows for each of them and for nobody else.
#[test]
fn test_point_options_duplicate_asymmetry() {
    let mut session = session();
    session.assign_point(AbilityKey::Strength, ScoreValue::Set(8));
    session.assign_point(AbilityKey::Dexterity, ScoreValue::Set(8));

    assert!(session
        .point_options(AbilityKey::Strength)
        .contains(&ScoreValue::Set(8)));
    assert!(session
        .point_options(AbilityKey::Dexterity)
        .contains(&ScoreValue::Set(8)));
    assert!(!session
        .point_options(AbilityKey::Wisdom)
        .contains(&ScoreValue::Set(8)));
}

/// Class defaults copy in slot order; a follow-up reset leaves all six
/// slots unset again.
#[test]
fn test_reset_points() {
    let mut session = session();
    session.reset_points_to_class_defaults().unwrap();

    assert_eq!(session.base_score(AbilityKey::Strength), ScoreValue::Set(15));
    assert_eq!(session.base_score(AbilityKey::Intelligence), ScoreValue::Set(8));

    session.reset_points();
    for key in AbilityKey::ALL {
        assert_eq!(session.base_score(key), ScoreValue::Unset);
    }
}

/// Resetting to defaults without a resolvable class errors and leaves
/// the slots untouched.
#[test]
fn test_reset_to_defaults_requires_class() {
    let mut session = session();
    session.assign_point(AbilityKey::Wisdom, ScoreValue::Set(14));
    session.set_class(id("barbarian"));

    let err = session.reset_points_to_class_defaults().unwrap_err();
    assert!(matches!(err, ChargenError::NoClassChosen));
    assert_eq!(session.base_score(AbilityKey::Wisdom), ScoreValue::Set(14));
}

/// Snapshots are deep copies: later session mutations do not show
/// through, and the serialised shape matches the submission wire form.
#[test]
fn test_snapshot_is_detached() {
    let mut session = session();
    session.assign_point(AbilityKey::Strength, ScoreValue::Set(15));
    session.toggle_skill(id("athletics"));

    let snapshot = session.snapshot();
    session.toggle_skill(id("history"));
    session.assign_point(AbilityKey::Strength, ScoreValue::Unset);

    assert_eq!(snapshot.class_skill_choices.as_slice(), [id("athletics")]);
    assert_eq!(snapshot.ability_points[0].value, ScoreValue::Set(15));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["race"], "human");
    assert_eq!(json["classSkillChoices"][0], "athletics");
    assert_eq!(json["abilityPoints"][0]["value"], 15);
    assert_eq!(json["abilityPoints"][1]["value"], "--");
    assert_eq!(json["distinguishingFeatures"], serde_json::json!([]));
}
